use super::shared;
use super::{EligibilityRule, Modifier, Provision, RemedyTemplate, RuleTableEntry, TierRule};
use crate::workflows::rights::domain::{
    Category, EvidenceFlag, Jurisdiction, ProductCategory, RemedyKind,
};
use crate::workflows::rights::elapsed::ElapsedBound;

use EvidenceFlag::{IndependentInspection, ReceiptKept};

pub(super) fn entry(jurisdiction: Jurisdiction, product: ProductCategory) -> RuleTableEntry {
    let category = Category::Warranty(product);
    let entry = match jurisdiction {
        Jurisdiction::Uk => uk(category).modifier(shared::section_75()),
        Jurisdiction::Us => us(category).modifier(shared::fair_credit_billing()),
        Jurisdiction::Eu => eu(category),
        Jurisdiction::Au => au(category, product),
        Jurisdiction::Ca => ca(category),
    };

    let entry = entry
        .modifier(manufacturer_warranty(jurisdiction, product))
        .modifier(shared::receipt_ground());

    match product {
        ProductCategory::Clothing => entry
            .extra_warning("Normal wear and tear, misuse and accidental damage are not faults"),
        ProductCategory::Electronics => entry.extra_warning(
            "Back up your data before handing a device in for repair",
        ),
        ProductCategory::Appliances | ProductCategory::Furniture => entry,
    }
}

/// Typical manufacturer warranty lengths; Australian suppliers call it a warranty against defects.
fn manufacturer_warranty(jurisdiction: Jurisdiction, product: ProductCategory) -> Modifier {
    let (window, text) = match (jurisdiction, product) {
        (Jurisdiction::Au, ProductCategory::Electronics | ProductCategory::Clothing) => (
            ElapsedBound::Years(1),
            "Claim under the manufacturer's warranty against defects, which sits alongside the consumer guarantees",
        ),
        (Jurisdiction::Au, _) => (
            ElapsedBound::Years(2),
            "Claim under the manufacturer's warranty against defects, which sits alongside the consumer guarantees",
        ),
        (_, ProductCategory::Electronics) => (
            ElapsedBound::Years(1),
            "Claim under the manufacturer's guarantee, which typically covers electronics for 1 year",
        ),
        (_, ProductCategory::Appliances) => (
            ElapsedBound::Years(2),
            "Claim under the manufacturer's guarantee, which typically covers appliances for 2 years",
        ),
        (_, ProductCategory::Furniture) => (
            ElapsedBound::Years(1),
            "Claim under the manufacturer's guarantee, which typically covers furniture for 1 year",
        ),
        (_, ProductCategory::Clothing) => (
            ElapsedBound::Days(90),
            "Ask the brand about its quality guarantee, which typically covers clothing for 90 days",
        ),
    };

    Modifier::ManufacturerWarranty { window, text }
}

fn uk(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Uk, category, "the retailer")
        .cite("Consumer Rights Act 2015", "ss.9-24")
        .cite("Consumer Credit Act 1974", "s.75")
        .tiers(shared::consumer_rights_act_tiers())
        .extra_right(Provision::statutory(
            "Your rights are against the retailer, not the manufacturer, and any guarantee is in addition to them",
        ))
        .next_steps(vec![
            "Find your receipt or bank statement and photograph the fault",
            "Contact {company} and explain which Consumer Rights Act remedy you want",
            "Put the complaint in writing and give {company} 14 days to respond",
            "Ask whether {company} belongs to an alternative dispute resolution scheme",
            "As a last resort, make a small claims court claim against {company}",
        ])
}

fn us(category: Category) -> RuleTableEntry {
    let merchantability = Provision::statutory("Implied warranty of merchantability (UCC § 2-314)");
    let written = Provision::contractual(
        "Written warranties must be honoured as written (Magnuson-Moss Warranty Act)",
    );

    RuleTableEntry::new(Jurisdiction::Us, category, "the retailer")
        .cite("Uniform Commercial Code", "§§ 2-314, 2-725")
        .cite("Magnuson-Moss Warranty Act", "15 U.S.C. §§ 2301-2312")
        .tiers(vec![
            TierRule::within("retailer return window", ElapsedBound::Days(30))
                .eligible(EligibilityRule::Requires(vec![ReceiptKept]))
                .right(merchantability.clone())
                .right(written.clone())
                .remedy(
                    RemedyTemplate::contractual(
                        RemedyKind::Refund,
                        "Return the item for a refund under the retailer's return policy",
                    )
                    .requiring(&[ReceiptKept]),
                )
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::RepairOrReplacement,
                    "Have the item repaired or replaced under its warranty",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Sue for breach of warranty in small claims court",
                ))
                .warning("Return windows are set by each retailer; check the policy printed on your receipt"),
            TierRule::within("implied warranty period", ElapsedBound::Years(4))
                .right(merchantability)
                .right(written)
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::RepairOrReplacement,
                    "Have the item repaired or replaced under its warranty",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Sue for breach of the implied warranty in small claims court",
                ))
                .warning("Many sellers disclaim implied warranties with an \"as is\" notice; check your receipt"),
            TierRule::beyond("time-barred").time_barred().warning(
                "Breach of warranty claims must be brought within 4 years of delivery (UCC § 2-725)",
            ),
        ])
        .next_steps(vec![
            "Find your receipt and the written warranty",
            "Contact {company} or the manufacturer's warranty line and request service",
            "Send a written demand to {company} if the claim is refused",
            "File a complaint with your state attorney general or the Better Business Bureau",
            "File a claim in small claims court against {company}",
        ])
}

fn eu(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Eu, category, "the seller")
        .cite("Directive (EU) 2019/771", "Arts. 10-17")
        .tiers(shared::legal_guarantee_tiers())
        .extra_right(Provision::statutory(
            "A commercial guarantee binds the guarantor on the terms it advertises (Art. 17)",
        ))
        .next_steps(vec![
            "Keep your receipt and photograph the defect",
            "Notify {company} of the defect in writing",
            "Give {company} a reasonable time to repair or replace the item",
            "Contact your national European Consumer Centre for cross-border purchases",
            "Use an ADR body or the European Small Claims Procedure if {company} refuses",
        ])
}

fn au(category: Category, product: ProductCategory) -> RuleTableEntry {
    let durability = match product {
        ProductCategory::Electronics => ElapsedBound::Years(2),
        ProductCategory::Appliances | ProductCategory::Furniture => ElapsedBound::Years(5),
        ProductCategory::Clothing => ElapsedBound::Months(6),
    };
    let acceptable_quality = Provision::statutory(
        "Consumer guarantee of acceptable quality (Australian Consumer Law, s 54)",
    );

    RuleTableEntry::new(Jurisdiction::Au, category, "the retailer")
        .cite("Australian Consumer Law", "ss 54-64")
        .cite("Australian Consumer Law", "ss 259-263")
        .tiers(vec![
            TierRule::within("reasonable durability period", durability)
                .eligible(EligibilityRule::Always)
                .right(acceptable_quality.clone())
                .right(Provision::statutory(
                    "Consumer guarantees apply regardless of any store policy or manufacturer warranty (s 64)",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Refund,
                    "Choose a refund or replacement for a major failure (s 263)",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::RepairOrReplacement,
                    "Require the retailer to fix a minor failure within a reasonable time (s 259)",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Compensation,
                    "Claim compensation for consequential losses (s 259(4))",
                )),
            TierRule::within("limitation period", ElapsedBound::Years(6))
                .right(acceptable_quality)
                .remedy(
                    RemedyTemplate::statutory(
                        RemedyKind::RepairOrReplacement,
                        "Request a repair with an independent report showing the item failed early for its type",
                    )
                    .requiring(&[IndependentInspection]),
                )
                .remedy(
                    RemedyTemplate::statutory(
                        RemedyKind::Compensation,
                        "Claim compensation at your state civil tribunal with independent evidence",
                    )
                    .requiring(&[IndependentInspection]),
                )
                .warning("The item has outlasted the usual durability for its type, so the retailer may dispute the claim"),
            TierRule::beyond("time-barred").time_barred().warning(
                "More than 6 years have passed, so a consumer guarantee claim is likely time-barred",
            ),
        ])
        .next_steps(vec![
            "Find your receipt or bank statement",
            "Return to {company} and say whether the failure is major or minor",
            "Put the request in writing if {company} refers you to the manufacturer",
            "Contact your state fair trading agency for help",
            "Apply to your state civil tribunal if {company} will not fix the problem",
        ])
}

fn ca(category: Category) -> RuleTableEntry {
    let merchantable = Provision::statutory(
        "Implied condition of merchantable quality (Sale of Goods Act, s 15)",
    );

    RuleTableEntry::new(Jurisdiction::Ca, category, "the retailer")
        .cite("Sale of Goods Act", "s 15")
        .cite("Consumer Protection Act, 2002", "s 9")
        .tiers(vec![
            TierRule::within("early rejection window", ElapsedBound::Days(30))
                .eligible(EligibilityRule::Always)
                .right(merchantable.clone())
                .right(Provision::statutory(
                    "Goods must be reasonably fit for the purpose you made known to the seller (s 15)",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Refund,
                    "Reject the goods for a refund within a reasonable time of delivery",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::RepairOrReplacement,
                    "Ask the retailer to repair or replace the goods",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Compensation,
                    "Claim damages for breach of the implied conditions",
                )),
            TierRule::within("limitation period", ElapsedBound::Years(2))
                .right(merchantable)
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::RepairOrReplacement,
                    "Ask the retailer to repair or replace the goods",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::Compensation,
                    "Claim damages in Small Claims Court",
                ))
                .warning("Once you have kept the goods beyond a reasonable time, you can claim damages but not reject them"),
            TierRule::beyond("time-barred").time_barred().warning(
                "More than 2 years have passed since discovery, so a court claim is likely time-barred",
            ),
        ])
        .extra_warning("Rules are based on Ontario; other provinces have similar but not identical laws")
        .next_steps(vec![
            "Find your receipt and any warranty card",
            "Contact {company} and describe the defect",
            "Send {company} a written demand with a 15-day deadline",
            "File a complaint with Consumer Protection Ontario or your provincial agency",
            "Start a Small Claims Court action against {company}",
        ])
}
