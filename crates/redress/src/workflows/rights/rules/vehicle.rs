use super::shared;
use super::{EligibilityRule, Modifier, Provision, RemedyTemplate, RuleTableEntry, TierRule};
use crate::workflows::rights::domain::{
    Category, EvidenceFlag, Jurisdiction, RemedyKind, SellerType,
};
use crate::workflows::rights::elapsed::ElapsedBound;

use EvidenceFlag::{IndependentInspection, RepairAttempted};

pub(super) fn entry(jurisdiction: Jurisdiction, seller: SellerType) -> RuleTableEntry {
    let category = Category::Vehicle(seller);
    let base = match jurisdiction {
        Jurisdiction::Uk => uk(category),
        Jurisdiction::Us => us(category),
        Jurisdiction::Eu => eu(category),
        Jurisdiction::Au => au(category),
        Jurisdiction::Ca => ca(category),
    };

    let entry = base.modifier(shared::service_history_ground());
    let entry = match (jurisdiction, seller) {
        (Jurisdiction::Uk, SellerType::Dealer) => entry.modifier(shared::section_75()),
        (Jurisdiction::Uk, SellerType::Online) => entry
            .modifier(shared::section_75())
            .modifier(Modifier::CoolingOff {
                window: ElapsedBound::Days(14),
                text: "Cancel a distance purchase within 14 days of delivery for a full refund (Consumer Contracts Regulations 2013, reg. 29)",
            }),
        (Jurisdiction::Us, SellerType::Dealer | SellerType::Online) => {
            entry.modifier(shared::fair_credit_billing())
        }
        (Jurisdiction::Eu, SellerType::Online) => entry.modifier(Modifier::CoolingOff {
            window: ElapsedBound::Days(14),
            text: "Withdraw from the distance contract within 14 days without giving a reason (Directive 2011/83/EU, Art. 9)",
        }),
        (_, SellerType::Private) => entry,
        _ => entry.modifier(shared::card_scheme_chargeback()),
    };

    if seller == SellerType::Private {
        entry.modifier(shared::private_sale(jurisdiction))
    } else {
        entry
    }
}

fn uk(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Uk, category, "the dealer")
        .cite("Consumer Rights Act 2015", "ss.9-24")
        .cite("Limitation Act 1980", "s.5")
        .tiers(shared::consumer_rights_act_tiers())
        .extra_warning("Get an independent inspection before the vehicle is repaired elsewhere, or you may lose evidence of the original fault")
        .next_steps(vec![
            "Stop using the vehicle if it is unsafe and keep every invoice and report",
            "Write to {company} describing the fault and the remedy you want under the Consumer Rights Act 2015",
            "Give {company} 14 days to respond in writing",
            "If the dealer is a member, escalate to The Motor Ombudsman",
            "As a last resort, issue a small claims court claim against {company}",
        ])
}

fn us(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Us, category, "the dealer")
        .cite("Uniform Commercial Code", "§ 2-314")
        .cite("Magnuson-Moss Warranty Act", "15 U.S.C. § 2310")
        .cite("Uniform Commercial Code", "§ 2-725")
        .tiers(vec![
            TierRule::within("lemon law coverage period", ElapsedBound::Months(18))
                .eligible(EligibilityRule::Requires(vec![RepairAttempted]))
                .right(Provision::statutory(
                    "State lemon laws cover new vehicles with a substantial defect that the dealer fails to fix after a reasonable number of attempts",
                ))
                .right(Provision::statutory(
                    "Implied warranty of merchantability (UCC § 2-314)",
                ))
                .right(Provision::contractual(
                    "Written warranty terms are enforceable under the Magnuson-Moss Warranty Act",
                ))
                .remedy(
                    RemedyTemplate::statutory(
                        RemedyKind::Refund,
                        "Demand a buyback or replacement vehicle under your state lemon law",
                    )
                    .requiring(&[RepairAttempted]),
                )
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::RepairOrReplacement,
                    "Have the dealer repair the defect under the written warranty",
                ))
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::Arbitration,
                    "Use the manufacturer's dispute resolution program, which some states require before suing",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "File a breach of warranty claim in small claims court",
                ))
                .warning("Lemon law terms vary by state; most require several repair attempts or 30 or more days out of service"),
            TierRule::within("implied warranty period", ElapsedBound::Years(4))
                .right(Provision::statutory(
                    "Implied warranty of merchantability (UCC § 2-314)",
                ))
                .right(Provision::contractual(
                    "Written warranty terms are enforceable under the Magnuson-Moss Warranty Act",
                ))
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::RepairOrReplacement,
                    "Request warranty repairs if the written warranty is still active",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Sue for breach of the implied warranty in small claims court",
                ))
                .warning("Lemon law protection usually ends 12 to 24 months after delivery"),
            TierRule::beyond("time-barred").time_barred().warning(
                "Breach of warranty claims must be brought within 4 years of delivery (UCC § 2-725)",
            ),
        ])
        .extra_warning("Vehicles sold \"as is\" may exclude implied warranties; check the Buyers Guide on the window sticker")
        .next_steps(vec![
            "Keep every repair order showing the defect and the days out of service",
            "Send {company} and the manufacturer written notice of the defect",
            "Allow a final repair attempt if your state lemon law requires one",
            "File with the manufacturer's arbitration program or your state attorney general",
            "File a claim in small claims court against {company} if the dispute is not resolved",
        ])
}

fn eu(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Eu, category, "the seller")
        .cite("Directive (EU) 2019/771", "Arts. 10-16")
        .cite("Directive 2011/83/EU", "Art. 9")
        .tiers(shared::legal_guarantee_tiers())
        .extra_warning("Member states may shorten the legal guarantee on used vehicles to one year if agreed in the contract")
        .next_steps(vec![
            "Collect the sales contract, the registration documents and any repair invoices",
            "Notify {company} of the defect in writing as soon as you discover it",
            "Give {company} a reasonable time to repair or replace the vehicle",
            "Contact your national European Consumer Centre for cross-border purchases",
            "Use an ADR body or the European Small Claims Procedure if {company} refuses",
        ])
}

fn au(category: Category) -> RuleTableEntry {
    let acceptable_quality = Provision::statutory(
        "Consumer guarantee of acceptable quality (Australian Consumer Law, s 54)",
    );

    RuleTableEntry::new(Jurisdiction::Au, category, "the dealer")
        .cite("Australian Consumer Law", "ss 54-59")
        .cite("Australian Consumer Law", "ss 259-263")
        .tiers(vec![
            TierRule::within("major failure period", ElapsedBound::Months(12))
                .eligible(EligibilityRule::Always)
                .right(acceptable_quality.clone())
                .right(Provision::statutory("Goods must match their description (s 56)"))
                .right(Provision::statutory(
                    "A major failure entitles you to choose a refund or replacement (s 263)",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Refund,
                    "Reject the vehicle for a refund or replacement if the failure is major (s 263)",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::RepairOrReplacement,
                    "Require the dealer to fix a minor failure within a reasonable time (s 259)",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Compensation,
                    "Claim compensation for reasonably foreseeable losses such as towing and hire costs (s 259(4))",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::RegulatorComplaint,
                    "Lodge a complaint with your state or territory fair trading agency",
                )),
            TierRule::within("reasonable durability period", ElapsedBound::Years(3))
                .eligible(EligibilityRule::Requires(vec![RepairAttempted]))
                .right(acceptable_quality.clone())
                .right(Provision::statutory(
                    "What counts as acceptable durability depends on the price, age and mileage of the vehicle",
                ))
                .remedy(
                    RemedyTemplate::statutory(
                        RemedyKind::Refund,
                        "Reject the vehicle if repeated repairs have not fixed the fault",
                    )
                    .requiring(&[RepairAttempted]),
                )
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::RepairOrReplacement,
                    "Require the dealer to fix the failure within a reasonable time (s 259)",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Compensation,
                    "Claim compensation for reasonably foreseeable losses (s 259(4))",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::RegulatorComplaint,
                    "Lodge a complaint with your state or territory fair trading agency",
                )),
            TierRule::within("limitation period", ElapsedBound::Years(6))
                .right(acceptable_quality)
                .remedy(
                    RemedyTemplate::statutory(
                        RemedyKind::RepairOrReplacement,
                        "Request a repair supported by an independent inspection report",
                    )
                    .requiring(&[IndependentInspection]),
                )
                .remedy(
                    RemedyTemplate::statutory(
                        RemedyKind::Compensation,
                        "Claim compensation at your state civil tribunal with independent evidence of the defect",
                    )
                    .requiring(&[IndependentInspection]),
                )
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::RegulatorComplaint,
                    "Lodge a complaint with your state or territory fair trading agency",
                ))
                .warning("Consumer guarantee claims must be brought within 6 years (s 236)"),
            TierRule::beyond("time-barred").time_barred().warning(
                "More than 6 years have passed, so a consumer guarantee claim is likely time-barred",
            ),
        ])
        .next_steps(vec![
            "Gather the contract, the service book and any repair quotes",
            "Tell {company} in writing whether the failure is major or minor and what you want",
            "Give {company} a reasonable time, usually 14 days, to respond",
            "Contact your state fair trading agency for help negotiating",
            "Apply to your state civil tribunal if {company} will not resolve the problem",
        ])
}

fn ca(category: Category) -> RuleTableEntry {
    let merchantable = Provision::statutory(
        "Implied condition of merchantable quality (Sale of Goods Act, s 15)",
    );

    RuleTableEntry::new(Jurisdiction::Ca, category, "the dealer")
        .cite("Motor Vehicle Dealers Act, 2002", "O. Reg. 333/08")
        .cite("Sale of Goods Act", "s 15")
        .cite("Limitations Act, 2002", "s 4")
        .tiers(vec![
            TierRule::within("dealer disclosure rescission window", ElapsedBound::Days(90))
                .eligible(EligibilityRule::Always)
                .right(Provision::regulatory(
                    "Dealers must disclose material facts such as prior accident damage and past use (O. Reg. 333/08)",
                ))
                .right(merchantable.clone())
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::Refund,
                    "Cancel the contract within 90 days if the dealer failed to disclose required information",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::RepairOrReplacement,
                    "Ask the dealer to repair the defect at its cost",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Compensation,
                    "Claim damages for breach of the implied conditions of sale",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::RegulatorComplaint,
                    "File a complaint with OMVIC, which administers a compensation fund for dealer sales",
                )),
            TierRule::within("limitation period", ElapsedBound::Years(2))
                .right(merchantable)
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::RepairOrReplacement,
                    "Ask the dealer to repair the defect at its cost",
                ))
                .remedy(
                    RemedyTemplate::statutory(
                        RemedyKind::Compensation,
                        "Claim damages in Small Claims Court with independent evidence of the defect",
                    )
                    .requiring(&[IndependentInspection]),
                )
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::RegulatorComplaint,
                    "File a complaint with OMVIC",
                ))
                .warning("Claims must be started within 2 years of discovering the problem (Limitations Act, 2002, s 4)"),
            TierRule::beyond("time-barred").time_barred().warning(
                "More than 2 years have passed since discovery, so a court claim is likely time-barred",
            ),
        ])
        .extra_warning("Rules are based on Ontario; other provinces have similar but not identical laws")
        .next_steps(vec![
            "Keep the bill of sale and every repair invoice",
            "Write to {company} describing the defect and the remedy you want",
            "Give {company} 15 days to respond in writing",
            "File a complaint with OMVIC or your provincial dealer regulator",
            "Start a Small Claims Court action against {company} if the dispute is not resolved",
        ])
}
