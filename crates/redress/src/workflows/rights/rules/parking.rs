use super::{EligibilityRule, Modifier, Provision, RemedyTemplate, RuleTableEntry, TierRule};
use crate::workflows::rights::domain::{
    Category, EvidenceFlag, IssuerType, Jurisdiction, RemedyKind,
};
use crate::workflows::rights::elapsed::ElapsedBound;

use EvidenceFlag::{NoticeNotReceived, WrittenComplaintSent};

pub(super) fn entry(jurisdiction: Jurisdiction, issuer: IssuerType) -> RuleTableEntry {
    let category = Category::Parking(issuer);
    let entry = match (jurisdiction, issuer) {
        (Jurisdiction::Uk, IssuerType::Council) => uk_council(category),
        (Jurisdiction::Uk, IssuerType::PrivateOperator) => uk_private(category),
        (Jurisdiction::Us, IssuerType::Council) => municipal(
            category,
            jurisdiction,
            ElapsedBound::Days(21),
            "You can contest a citation by mail, online or in person before the deadline",
            "Request an administrative hearing if the initial review upholds the citation",
            "Deadlines vary by city; many are 21 to 30 days",
        ),
        (Jurisdiction::Eu, IssuerType::Council) => municipal(
            category,
            jurisdiction,
            ElapsedBound::Days(30),
            "You can lodge an objection with the authority that issued the penalty",
            "Take the decision to the competent administrative court or tribunal",
            "Deadlines vary by member state, from 14 to 60 days",
        ),
        (Jurisdiction::Au, IssuerType::Council) => municipal(
            category,
            jurisdiction,
            ElapsedBound::Days(28),
            "You can request an internal review of an infringement notice",
            "Elect to have the matter heard in court instead of paying",
            "Review periods vary by state; most are 28 days",
        ),
        (Jurisdiction::Ca, IssuerType::Council) => municipal(
            category,
            jurisdiction,
            ElapsedBound::Days(15),
            "You can request a screening review of a penalty notice",
            "Request a hearing before a hearing officer if the screening upholds the penalty",
            "Toronto allows 15 days to request a screening; other cities differ",
        ),
        (_, IssuerType::PrivateOperator) => private_lot(category, jurisdiction),
    };

    entry
        .modifier(Modifier::EvidenceGround {
            flag: EvidenceFlag::SignageUnclear,
            text: "Unclear, missing or obscured signage is a strong ground of appeal",
        })
        .modifier(Modifier::EvidenceGround {
            flag: EvidenceFlag::ValidPermit,
            text: "A valid permit or pay-and-display ticket shows no contravention occurred",
        })
        .modifier(Modifier::EvidenceGround {
            flag: EvidenceFlag::PhotosTaken,
            text: "Photos of the signs, markings and your vehicle support your appeal",
        })
}

fn uk_council(category: Category) -> RuleTableEntry {
    let statutory_grounds = Provision::regulatory(
        "The council must prove the contravention; you can challenge on any of the statutory grounds (Traffic Management Act 2004)",
    );

    RuleTableEntry::new(Jurisdiction::Uk, category, "the council")
        .cite("Traffic Management Act 2004", "Part 6")
        .cite("Civil Enforcement of Road Traffic Contraventions Regulations 2022", "regs. 4-6")
        .tiers(vec![
            TierRule::within("discount period", ElapsedBound::Days(14))
                .eligible(EligibilityRule::Always)
                .right(statutory_grounds.clone())
                .right(Provision::regulatory(
                    "If you challenge within 14 days, most councils re-offer the 50% discount when the challenge is rejected",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::InformalChallenge,
                    "Make an informal challenge to the council before the Notice to Owner is issued",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::FormalAppeal,
                    "Submit formal representations within 28 days of the Notice to Owner",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::IndependentAdjudication,
                    "Appeal to the Traffic Penalty Tribunal (London Tribunals in London) if the representations are rejected",
                ))
                .warning("The 50% discount ends 14 days after the charge was issued"),
            TierRule::within("formal representations window", ElapsedBound::Days(56))
                .eligible(EligibilityRule::Always)
                .right(statutory_grounds)
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::FormalAppeal,
                    "Submit formal representations within 28 days of the Notice to Owner",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::IndependentAdjudication,
                    "Appeal to the Traffic Penalty Tribunal (London Tribunals in London) if the representations are rejected",
                ))
                .warning("The discount period has ended; the full charge now applies"),
            TierRule::beyond("charge certificate stage")
                .eligible(EligibilityRule::Requires(vec![NoticeNotReceived]))
                .remedy(
                    RemedyTemplate::regulatory(
                        RemedyKind::FormalAppeal,
                        "File a witness statement with the Traffic Enforcement Centre if you never received the Notice to Owner",
                    )
                    .requiring(&[NoticeNotReceived]),
                )
                .warning("Unpaid charges increase by 50% once a charge certificate is issued"),
        ])
        .next_steps(vec![
            "Photograph the signs, road markings and where you parked",
            "Send your challenge to {company} with your grounds and evidence",
            "Keep copies of every notice and letter from {company}",
            "If {company} rejects your representations, appeal to the independent tribunal within 28 days",
        ])
}

fn uk_private(category: Category) -> RuleTableEntry {
    let invoice = Provision::regulatory(
        "Private parking charges are invoices for breach of contract, not fines",
    );

    RuleTableEntry::new(Jurisdiction::Uk, category, "the parking operator")
        .cite("Protection of Freedoms Act 2012", "Schedule 4")
        .cite("Private Parking Code of Practice", "section 10")
        .tiers(vec![
            TierRule::within("operator appeal window", ElapsedBound::Days(28))
                .eligible(EligibilityRule::Always)
                .right(invoice.clone())
                .right(Provision::regulatory(
                    "The operator must follow the Private Parking Code of Practice and offer an independent appeal",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::InformalChallenge,
                    "Appeal to the operator in writing within 28 days of the charge",
                ))
                .remedy(
                    RemedyTemplate::regulatory(
                        RemedyKind::IndependentAdjudication,
                        "Escalate to POPLA or the IAS within 28 days of the operator rejecting your appeal",
                    )
                    .requiring(&[WrittenComplaintSent]),
                )
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::SmallClaims,
                    "Defend any county court claim; the operator must prove its case",
                )),
            TierRule::within("independent appeal window", ElapsedBound::Days(56))
                .eligible(EligibilityRule::Requires(vec![WrittenComplaintSent]))
                .right(invoice.clone())
                .remedy(
                    RemedyTemplate::regulatory(
                        RemedyKind::IndependentAdjudication,
                        "Escalate to POPLA or the IAS within 28 days of the operator rejecting your appeal",
                    )
                    .requiring(&[WrittenComplaintSent]),
                )
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::SmallClaims,
                    "Defend any county court claim; the operator must prove its case",
                ))
                .warning("The operator appeal window has closed"),
            TierRule::beyond("court stage")
                .right(invoice)
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::SmallClaims,
                    "Defend any county court claim; unfair or unclear terms can defeat the charge",
                ))
                .warning("Do not ignore a Letter Before Claim; reply within 30 days"),
        ])
        .next_steps(vec![
            "Photograph the entrance signs, the terms and where you parked",
            "Appeal to {company} in writing and keep a copy",
            "If {company} rejects the appeal, use the appeal code to go to the independent appeals service",
            "Never ignore court papers; respond to any claim from {company} by the deadline",
        ])
}

fn municipal(
    category: Category,
    jurisdiction: Jurisdiction,
    window: ElapsedBound,
    right: &'static str,
    hearing: &'static str,
    warning: &'static str,
) -> RuleTableEntry {
    RuleTableEntry::new(jurisdiction, category, "the issuing authority")
        .cite("Municipal parking by-law", "penalty review procedure")
        .tiers(vec![
            TierRule::within("contest period", window)
                .eligible(EligibilityRule::Always)
                .right(Provision::regulatory(right))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::FormalAppeal,
                    "Request a review of the penalty from the issuing authority",
                ))
                .remedy(RemedyTemplate::regulatory(
                    RemedyKind::IndependentAdjudication,
                    hearing,
                ))
                .warning(warning),
            TierRule::beyond("enforcement stage")
                .eligible(EligibilityRule::Requires(vec![NoticeNotReceived]))
                .remedy(
                    RemedyTemplate::regulatory(
                        RemedyKind::FormalAppeal,
                        "Ask for a late review or to set aside enforcement because you never received the notice",
                    )
                    .requiring(&[NoticeNotReceived]),
                )
                .warning("Late penalties, registration holds or enforcement fees may now apply"),
        ])
        .next_steps(vec![
            "Photograph the signs, meters and where you parked",
            "Submit your dispute to {company} before the deadline with your evidence",
            "Keep the reference number and any confirmation from {company}",
            "Request a hearing if {company} upholds the penalty",
        ])
}

fn private_lot(category: Category, jurisdiction: Jurisdiction) -> RuleTableEntry {
    let contractual = Provision::contractual(
        "A private parking notice is a contractual demand, not a government penalty",
    );
    let defence = match jurisdiction {
        Jurisdiction::Eu => {
            "Defend any claim under national contract law; unfair terms are not binding (Directive 93/13/EEC)"
        }
        Jurisdiction::Au => {
            "Defend any claim; charges that exceed a genuine estimate of loss may be unenforceable"
        }
        _ => "Defend any collection claim; the operator must prove you agreed to its terms",
    };

    RuleTableEntry::new(jurisdiction, category, "the parking operator")
        .cite("Contract law", "formation and unfair terms")
        .tiers(vec![
            TierRule::within("operator dispute period", ElapsedBound::Days(30))
                .eligible(EligibilityRule::Always)
                .right(contractual.clone())
                .remedy(RemedyTemplate::contractual(
                    RemedyKind::InformalChallenge,
                    "Dispute the notice with the operator in writing",
                ))
                .remedy(RemedyTemplate::contractual(RemedyKind::SmallClaims, defence)),
            TierRule::beyond("collections stage")
                .right(contractual)
                .remedy(RemedyTemplate::contractual(RemedyKind::SmallClaims, defence))
                .warning("Debt collectors must verify the debt if you ask in writing"),
        ])
        .next_steps(vec![
            "Photograph the signs and terms at the entrance",
            "Dispute the notice with {company} in writing and keep a copy",
            "Do not pay under pressure from collection letters until {company} answers your dispute",
            "Respond to any court claim from {company} by the deadline",
        ])
}
