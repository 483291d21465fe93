use super::{EligibilityRule, Modifier, Provision, RemedyTemplate, RuleTableEntry, TierRule};
use crate::workflows::rights::domain::{
    Category, EnergyIssue, EvidenceFlag, Jurisdiction, RemedyKind,
};
use crate::workflows::rights::elapsed::ElapsedBound;

pub(super) fn entry(jurisdiction: Jurisdiction, issue: EnergyIssue) -> RuleTableEntry {
    let category = Category::Energy(issue);
    let entry = match jurisdiction {
        Jurisdiction::Uk => uk(category),
        Jurisdiction::Us => us(category),
        Jurisdiction::Eu => eu(category),
        Jurisdiction::Au => au(category),
        Jurisdiction::Ca => ca(category),
    };

    entry
        .extra_right(Provision::regulatory(issue_right(jurisdiction, issue)))
        .modifier(Modifier::EvidenceGround {
            flag: EvidenceFlag::FinalResponseReceived,
            text: "A final response or deadlock letter lets the ombudsman or regulator accept your complaint straight away",
        })
        .modifier(Modifier::EvidenceGround {
            flag: EvidenceFlag::WrittenComplaintSent,
            text: "Your written complaint shows when the supplier's response deadline started",
        })
}

fn issue_right(jurisdiction: Jurisdiction, issue: EnergyIssue) -> &'static str {
    match (jurisdiction, issue) {
        (Jurisdiction::Uk, EnergyIssue::Billing) => {
            "Back-billing protection: suppliers cannot charge for energy used more than 12 months before they first billed you correctly (Ofgem standard licence condition 21BA)"
        }
        (Jurisdiction::Uk, EnergyIssue::SupplyInterruption) => {
            "Guaranteed Standards of Performance entitle you to automatic payments for prolonged power cuts (Electricity (Standards of Performance) Regulations 2015)"
        }
        (Jurisdiction::Uk, EnergyIssue::Metering) => {
            "You can ask for a meter accuracy test; if the meter is faulty, past bills must be corrected"
        }
        (Jurisdiction::Us, EnergyIssue::Billing) => {
            "Most states bar disconnection while a billing dispute is under review by the commission"
        }
        (Jurisdiction::Us, EnergyIssue::SupplyInterruption) => {
            "Ask for outage credits available under your utility's approved tariff"
        }
        (Jurisdiction::Us, EnergyIssue::Metering) => {
            "You can request a meter test; many states require the utility to test once a year free of charge"
        }
        (Jurisdiction::Eu, EnergyIssue::Billing) => {
            "Bills must be accurate, easy to understand and based on actual consumption at least once a year (Directive (EU) 2019/944, Annex I)"
        }
        (Jurisdiction::Eu, EnergyIssue::SupplyInterruption) => {
            "Your contract must state the compensation and refund arrangements if contracted service quality is not met (Art. 10)"
        }
        (Jurisdiction::Eu, EnergyIssue::Metering) => {
            "You have a right to accurate metering and to access your consumption data (Arts. 19-23)"
        }
        (Jurisdiction::Au, EnergyIssue::Billing) => {
            "Retailers cannot back-bill for more than 9 months where they caused the under-billing (National Energy Retail Rules, r 30)"
        }
        (Jurisdiction::Au, EnergyIssue::SupplyInterruption) => {
            "Guaranteed service level payments apply to long or frequent outages in several states"
        }
        (Jurisdiction::Au, EnergyIssue::Metering) => {
            "You can request a meter test; the fee is refunded if the meter is found faulty"
        }
        (Jurisdiction::Ca, EnergyIssue::Billing) => {
            "Utilities must correct billing errors and offer payment arrangements for any under-billing"
        }
        (Jurisdiction::Ca, EnergyIssue::SupplyInterruption) => {
            "Distributors must meet service quality standards set by the provincial regulator"
        }
        (Jurisdiction::Ca, EnergyIssue::Metering) => {
            "Measurement Canada can test a disputed meter under the Electricity and Gas Inspection Act"
        }
    }
}

fn uk(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Uk, category, "your supplier")
        .cite("Gas and Electricity (Consumer Complaints Handling Standards) Regulations 2008", "reg. 5")
        .cite("Ofgem standard licence conditions", "SLC 21BA, SLC 27")
        .tiers(vec![
            TierRule::within("Energy Ombudsman referral window", ElapsedBound::Months(12))
                .eligible(EligibilityRule::Always)
                .right(Provision::regulatory(
                    "Once your complaint reaches deadlock or has been open for 8 weeks, you can refer it to the Energy Ombudsman",
                ))
                .right(Provision::regulatory(
                    "Ombudsman decisions are binding on the supplier if you accept them",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::OmbudsmanReferral,
                    "Refer the complaint to the Energy Ombudsman free of charge",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::Compensation,
                    "Ask for a goodwill payment or account credit for the time and trouble caused",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::SupplierComplaint,
                    "Ask your supplier to review its final response",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Start a small claims court claim instead of using the ombudsman",
                ))
                .warning("Refer to the ombudsman within 12 months of the supplier's final response"),
            TierRule::within("limitation period", ElapsedBound::Years(6))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::SupplierComplaint,
                    "Raise a fresh complaint if the problem continues",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Start a small claims court claim for any overcharge",
                ))
                .warning("The ombudsman will not usually accept complaints more than 12 months after deadlock"),
            TierRule::beyond("time-barred")
                .time_barred()
                .warning("More than 6 years have passed, so a court claim is likely time-barred"),
        ])
        .next_steps(vec![
            "Take meter readings with dated photos",
            "Ask {company} for a final response letter if you do not have one",
            "Refer the complaint to the Energy Ombudsman with copies of your correspondence",
            "Contact Citizens Advice consumer service for help",
        ])
}

fn us(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Us, category, "your utility")
        .cite("State public utility commission rules", "consumer complaint procedures")
        .tiers(vec![
            TierRule::within("commission complaint window", ElapsedBound::Years(2))
                .eligible(EligibilityRule::Always)
                .right(Provision::regulatory(
                    "State public utility commissions investigate billing and service complaints against regulated utilities",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::SupplierComplaint,
                    "Escalate to a supervisor at the utility and request a written decision",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::RegulatorComplaint,
                    "File an informal complaint with your state public utility commission",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Sue for overcharges in small claims court",
                ))
                .warning("Many commissions only review billing disputes covering the last two years"),
            TierRule::beyond("outside commission window")
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Sue for overcharges within your state's limitation period",
                ))
                .warning("The commission may decline a complaint this old"),
        ])
        .next_steps(vec![
            "Gather your bills and meter readings",
            "Call {company} and ask for a supervisor; note the date and reference",
            "Confirm the dispute to {company} in writing",
            "File a complaint with your state public utility commission",
        ])
}

fn eu(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Eu, category, "your supplier")
        .cite("Directive (EU) 2019/944", "Arts. 10, 26")
        .cite("Directive 2013/11/EU", "Art. 5(4)")
        .tiers(vec![
            TierRule::within("ADR window", ElapsedBound::Months(12))
                .eligible(EligibilityRule::Always)
                .right(Provision::regulatory(
                    "Energy consumers have a right to out-of-court dispute settlement (Directive (EU) 2019/944, Art. 26)",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::OmbudsmanReferral,
                    "Refer the complaint to your national energy ombudsman or ADR body",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::SupplierComplaint,
                    "Ask your supplier to reconsider its decision",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Use the European Small Claims Procedure for cross-border claims up to EUR 5,000",
                ))
                .warning("ADR bodies may refuse complaints submitted more than a year after you complained to the supplier"),
            TierRule::beyond("outside ADR window")
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::SupplierComplaint,
                    "Raise a fresh complaint if the problem continues",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Bring a claim in the national courts within the local limitation period",
                )),
        ])
        .next_steps(vec![
            "Keep your bills, contract and meter readings",
            "Get a written final answer from {company}",
            "Refer the complaint to your national energy ombudsman",
            "Contact the European Consumer Centre if {company} is based in another member state",
        ])
}

fn au(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Au, category, "your retailer")
        .cite("National Energy Retail Rules", "rr 30, 50")
        .cite("National Energy Retail Law", "s 90")
        .tiers(vec![
            TierRule::within("ombudsman window", ElapsedBound::Months(12))
                .eligible(EligibilityRule::Always)
                .right(Provision::regulatory(
                    "State energy and water ombudsman schemes handle complaints free of charge",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::OmbudsmanReferral,
                    "Lodge a complaint with your state energy and water ombudsman (EWON, EWOV or EWOQ)",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::SupplierComplaint,
                    "Ask your retailer to escalate the complaint internally",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::Compensation,
                    "Ask for a credit under the retailer's guaranteed service level obligations",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Apply to your state civil tribunal",
                )),
            TierRule::within("limitation period", ElapsedBound::Years(6))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::SupplierComplaint,
                    "Raise a fresh complaint if the problem continues",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Apply to your state civil tribunal",
                ))
                .warning("Ombudsman schemes usually expect complaints within 12 months of the problem"),
            TierRule::beyond("time-barred")
                .time_barred()
                .warning("More than 6 years have passed, so a claim is likely time-barred"),
        ])
        .next_steps(vec![
            "Gather your bills and any correspondence",
            "Ask {company} to escalate the complaint to a supervisor",
            "Lodge a complaint with your state energy and water ombudsman",
            "Ask {company} about hardship assistance if you cannot pay while the dispute continues",
        ])
}

fn ca(category: Category) -> RuleTableEntry {
    RuleTableEntry::new(Jurisdiction::Ca, category, "your utility")
        .cite("Ontario Energy Board Act, 1998", "s 105")
        .cite("Limitations Act, 2002", "s 4")
        .tiers(vec![
            TierRule::within("limitation period", ElapsedBound::Years(2))
                .eligible(EligibilityRule::Always)
                .right(Provision::regulatory(
                    "Provincial energy regulators such as the Ontario Energy Board handle complaints against utilities and retailers",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::SupplierComplaint,
                    "Ask the utility to review the complaint and give a written decision",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::RegulatorComplaint,
                    "File a complaint with the Ontario Energy Board or your provincial regulator",
                ))
                .remedy(RemedyTemplate::statutory(
                    RemedyKind::SmallClaims,
                    "Claim overcharges in Small Claims Court",
                )),
            TierRule::beyond("time-barred")
                .time_barred()
                .warning("More than 2 years have passed since discovery, so a court claim is likely time-barred"),
        ])
        .extra_warning("Rules are based on Ontario; other provinces have similar but not identical laws")
        .next_steps(vec![
            "Gather your bills and meter readings",
            "Ask {company} for a written decision on your complaint",
            "File a complaint with the provincial energy regulator",
        ])
}
