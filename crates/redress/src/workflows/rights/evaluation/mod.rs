mod modifiers;
mod tiers;

use super::domain::{Basis, ClaimInput, RemedyKind, RemedyOption, ResultRecord};
use super::rules::RuleTableEntry;

/// Stateless evaluator that maps a validated claim onto a rule table entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEvaluator;

impl EligibilityEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Pure and total: the same claim and entry always produce the same record.
    pub fn evaluate(&self, claim: &ClaimInput, entry: &RuleTableEntry) -> ResultRecord {
        let elapsed = claim.elapsed();
        let mut assessment = Assessment::default();

        let selected = tiers::select(&entry.tiers, &elapsed);
        let (tier_index, tier_name, time_barred) = match selected {
            Some((index, tier)) => {
                assessment.eligible = tier.eligibility.resolve(&claim.evidence);
                for provision in &tier.rights {
                    assessment.right(provision.text, provision.basis);
                }
                for remedy in tier.remedies.iter().filter(|r| r.available(&claim.evidence)) {
                    assessment.remedy(remedy.kind, remedy.text, remedy.basis);
                }
                for warning in &tier.warnings {
                    assessment.warning(warning);
                }
                (index, tier.name.to_string(), tier.time_barred)
            }
            None => (0, String::from("unconfigured"), true),
        };

        modifiers::apply_adjustments(&entry.modifiers, claim, &elapsed, &mut assessment);

        if !time_barred {
            for provision in &entry.extra_rights {
                assessment.right(provision.text, provision.basis);
            }
        }
        for warning in &entry.extra_warnings {
            assessment.warning(warning);
        }

        modifiers::apply_private_sale(&entry.modifiers, time_barred, &mut assessment);

        let company = claim.company_name.as_deref().unwrap_or(entry.counterparty);
        let next_steps = entry
            .next_steps
            .iter()
            .enumerate()
            .map(|(position, step)| format!("{}. {}", position + 1, step.replace("{company}", company)))
            .collect();

        ResultRecord {
            calculator: entry.calculator(),
            jurisdiction: entry.jurisdiction,
            category: entry.category,
            tier: tier_name,
            tier_index,
            elapsed,
            eligible: assessment.eligible,
            rights: assessment.rights.into_iter().map(|(text, _)| text).collect(),
            remedies: assessment
                .remedies
                .into_iter()
                .map(|(remedy, _)| remedy)
                .collect(),
            warnings: assessment.warnings,
            next_steps,
            window_label: tiers::window_label(&entry.tiers, tier_index, &elapsed),
            citations: entry.citations.clone(),
            details: claim.details.clone(),
        }
    }
}

/// Working state while a claim is assessed; the basis travels with each item until the
/// private-sale pass has run.
#[derive(Debug, Default)]
pub(super) struct Assessment {
    eligible: bool,
    rights: Vec<(String, Basis)>,
    remedies: Vec<(RemedyOption, Basis)>,
    warnings: Vec<String>,
}

impl Assessment {
    fn right(&mut self, text: &str, basis: Basis) {
        if !self.rights.iter().any(|(existing, _)| existing == text) {
            self.rights.push((text.to_string(), basis));
        }
    }

    fn remedy(&mut self, kind: RemedyKind, text: &str, basis: Basis) {
        self.remedies.push((
            RemedyOption {
                kind,
                detail: text.to_string(),
            },
            basis,
        ));
    }

    fn warning(&mut self, text: &str) {
        if !self.warnings.iter().any(|existing| existing == text) {
            self.warnings.push(text.to_string());
        }
    }
}
