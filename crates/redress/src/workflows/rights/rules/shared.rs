//! Tier sets and modifiers reused across the goods calculators.

use rust_decimal::Decimal;

use super::{EligibilityRule, Modifier, Provision, RemedyTemplate, TierRule};
use crate::workflows::rights::domain::{EvidenceFlag, Jurisdiction, RemedyKind};
use crate::workflows::rights::elapsed::ElapsedBound;

use EvidenceFlag::{IndependentInspection, RepairAttempted};

/// Consumer Rights Act 2015 goods tiers (short-term reject, repair period, limitation).
pub(super) fn consumer_rights_act_tiers() -> Vec<TierRule> {
    let satisfactory =
        Provision::statutory("Goods must be of satisfactory quality (Consumer Rights Act 2015, s.9)");

    vec![
        TierRule::within("short-term right to reject", ElapsedBound::Days(30))
            .eligible(EligibilityRule::Always)
            .right(satisfactory.clone())
            .right(Provision::statutory(
                "Goods must be fit for any purpose you made known to the seller (s.10)",
            ))
            .right(Provision::statutory("Goods must match their description (s.11)"))
            .right(Provision::statutory(
                "You can reject faulty goods for a full refund within 30 days of delivery (ss.20-22)",
            ))
            .remedy(RemedyTemplate::statutory(
                RemedyKind::Refund,
                "Reject the goods for a full refund with no deduction for use",
            ))
            .remedy(RemedyTemplate::statutory(
                RemedyKind::RepairOrReplacement,
                "Ask for a free repair or replacement instead of rejecting",
            ))
            .remedy(RemedyTemplate::statutory(
                RemedyKind::PriceReduction,
                "Keep the goods and agree a price reduction with the seller",
            ))
            .warning(
                "Act promptly: the 30-day window runs from delivery, not from when you noticed the fault",
            ),
        TierRule::within("repair or replacement period", ElapsedBound::Months(6))
            .eligible(EligibilityRule::Requires(vec![RepairAttempted]))
            .right(satisfactory.clone())
            .right(Provision::statutory(
                "The burden of proof is on the seller: a fault that appears within 6 months is presumed to have been present at delivery (s.19(14))",
            ))
            .remedy(RemedyTemplate::statutory(
                RemedyKind::RepairOrReplacement,
                "Request a repair or replacement first; the seller is entitled to one attempt before you can reject",
            ))
            .remedy(
                RemedyTemplate::statutory(
                    RemedyKind::Refund,
                    "Use your final right to reject for a refund now that the repair or replacement has failed (s.24)",
                )
                .requiring(&[RepairAttempted]),
            )
            .remedy(
                RemedyTemplate::statutory(
                    RemedyKind::PriceReduction,
                    "Keep the goods and claim a price reduction because the repair failed (s.24)",
                )
                .requiring(&[RepairAttempted]),
            )
            .warning("The burden of proof shifts to you after 6 months"),
        TierRule::within("statutory limitation period", ElapsedBound::Years(6))
            .eligible(EligibilityRule::Requires(vec![
                RepairAttempted,
                IndependentInspection,
            ]))
            .right(satisfactory)
            .right(Provision::statutory(
                "You must show the fault was present at delivery, usually with an independent inspection report",
            ))
            .remedy(RemedyTemplate::statutory(
                RemedyKind::RepairOrReplacement,
                "Request a free repair or replacement; the seller may ask for evidence of the fault",
            ))
            .remedy(
                RemedyTemplate::statutory(
                    RemedyKind::Refund,
                    "Use your final right to reject; the refund can be reduced to reflect the use you have had (s.24(8))",
                )
                .requiring(&[RepairAttempted, IndependentInspection]),
            )
            .remedy(
                RemedyTemplate::statutory(
                    RemedyKind::PriceReduction,
                    "Claim a price reduction if the repair or replacement failed",
                )
                .requiring(&[RepairAttempted]),
            )
            .warning("The burden of proof is now on you")
            .warning("Court claims must be issued within 6 years of the breach (Limitation Act 1980, s.5)"),
        TierRule::beyond("time-barred")
            .time_barred()
            .warning("More than 6 years have passed, so a court claim is likely time-barred"),
    ]
}

/// Sale of Goods Directive (EU) 2019/771 tiers.
pub(super) fn legal_guarantee_tiers() -> Vec<TierRule> {
    let conformity = Provision::statutory(
        "Goods must conform to the contract in quality, quantity and description (Directive (EU) 2019/771, Arts. 6-7)",
    );

    vec![
        TierRule::within("reversed burden of proof period", ElapsedBound::Months(12))
            .eligible(EligibilityRule::Requires(vec![RepairAttempted]))
            .right(conformity.clone())
            .right(Provision::statutory(
                "A defect that appears within one year of delivery is presumed to have existed at delivery (Art. 11)",
            ))
            .remedy(RemedyTemplate::statutory(
                RemedyKind::RepairOrReplacement,
                "Ask the seller to repair or replace the goods free of charge within a reasonable time (Art. 14)",
            ))
            .remedy(
                RemedyTemplate::statutory(
                    RemedyKind::Refund,
                    "Terminate the contract for a full refund because the repair or replacement failed (Arts. 13(4), 16)",
                )
                .requiring(&[RepairAttempted]),
            )
            .remedy(
                RemedyTemplate::statutory(
                    RemedyKind::PriceReduction,
                    "Claim a proportionate price reduction (Art. 15)",
                )
                .requiring(&[RepairAttempted]),
            )
            .warning("Some member states extend the reversed burden of proof to two years"),
        TierRule::within("legal guarantee period", ElapsedBound::Years(2))
            .eligible(EligibilityRule::Requires(vec![
                RepairAttempted,
                IndependentInspection,
            ]))
            .right(conformity)
            .right(Provision::statutory(
                "You must prove the defect existed at delivery",
            ))
            .remedy(RemedyTemplate::statutory(
                RemedyKind::RepairOrReplacement,
                "Ask the seller to repair or replace the goods under the legal guarantee (Art. 10)",
            ))
            .remedy(
                RemedyTemplate::statutory(
                    RemedyKind::Refund,
                    "Terminate the contract for a refund once the defect is proven and repair has failed",
                )
                .requiring(&[RepairAttempted, IndependentInspection]),
            )
            .remedy(
                RemedyTemplate::statutory(
                    RemedyKind::PriceReduction,
                    "Claim a proportionate price reduction (Art. 15)",
                )
                .requiring(&[RepairAttempted]),
            )
            .warning("The burden of proof is now on you"),
        TierRule::beyond("time-barred").time_barred().warning(
            "The two-year legal guarantee has expired; national limitation rules may still allow a claim in some member states",
        ),
    ]
}

/// Consumer Credit Act 1974 s.75 joint liability for purchases between £100 and £30,000.
pub(super) fn section_75() -> Modifier {
    Modifier::Chargeback {
        minimum: Decimal::new(100, 0),
        maximum: Some(Decimal::new(30_000, 0)),
        text: "If you paid by credit card, claim against the card provider, which is jointly liable with the seller (Consumer Credit Act 1974, s.75)",
    }
}

/// Fair Credit Billing Act claims-and-defenses right for purchases over $50.
pub(super) fn fair_credit_billing() -> Modifier {
    Modifier::Chargeback {
        minimum: Decimal::new(50, 0),
        maximum: None,
        text: "If you paid by credit card, dispute the charge with your card issuer (Fair Credit Billing Act, 15 U.S.C. § 1666i)",
    }
}

/// Card scheme chargeback rules used where no statute gives the card issuer liability.
pub(super) fn card_scheme_chargeback() -> Modifier {
    Modifier::Chargeback {
        minimum: Decimal::ZERO,
        maximum: None,
        text: "If you paid by card, ask your card issuer for a chargeback under the card scheme rules, usually within 120 days",
    }
}

/// Misrepresentation is the only route against a private seller.
pub(super) fn private_sale(jurisdiction: Jurisdiction) -> Modifier {
    let (right, remedy) = match jurisdiction {
        Jurisdiction::Uk => (
            "A private seller must not misdescribe the goods (Misrepresentation Act 1967)",
            "Claim for misrepresentation if the seller made false statements about the vehicle's condition or history",
        ),
        Jurisdiction::Us => (
            "A private seller is liable for fraud or intentional misrepresentation about the vehicle",
            "Sue the seller for misrepresentation if they lied about the vehicle's condition, mileage or title",
        ),
        Jurisdiction::Eu => (
            "National contract law lets you rescind a private sale induced by fraud or deliberate concealment",
            "Seek rescission or damages for misrepresentation under national contract law",
        ),
        Jurisdiction::Au => (
            "Private sellers must still not mislead you about title or describe the vehicle falsely",
            "Claim damages at your state tribunal if the seller misrepresented the vehicle",
        ),
        Jurisdiction::Ca => (
            "Private sellers are liable for misrepresentation and must deliver clear title",
            "Claim damages in Small Claims Court for misrepresentation about the vehicle",
        ),
    };

    Modifier::PrivateSale {
        right,
        remedy,
        warning: "Private sellers have no statutory duty of quality; consumer protection rights apply only to traders",
    }
}

/// Service history rebuts the "poor maintenance" defence for vehicle faults.
pub(super) fn service_history_ground() -> Modifier {
    Modifier::EvidenceGround {
        flag: EvidenceFlag::ServiceHistory,
        text: "A complete service history rebuts any claim that the fault was caused by poor maintenance",
    }
}

pub(super) fn receipt_ground() -> Modifier {
    Modifier::EvidenceGround {
        flag: EvidenceFlag::ReceiptKept,
        text: "Your receipt or bank statement proves where and when you bought the item",
    }
}
