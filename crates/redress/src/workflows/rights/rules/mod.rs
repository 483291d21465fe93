//! Jurisdiction rule tables.
//!
//! Each `(jurisdiction, category)` pair maps to one `RuleTableEntry`: an ascending list of
//! elapsed-time tiers plus cross-cutting modifiers. New jurisdictions are added as data in
//! the per-calculator modules; the evaluator never branches on a jurisdiction.

mod energy;
mod parking;
mod shared;
mod vehicle;
mod warranty;

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::domain::{
    Basis, CalculatorKind, Category, Citation, EvidenceFlag, EvidenceFlags, Jurisdiction,
    RemedyKind,
};
use super::elapsed::ElapsedBound;

/// Rule-table problems. These are deployment defects, never user errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no rule table for the {calculator} calculator in {jurisdiction} (category {category})")]
    Unmapped {
        calculator: CalculatorKind,
        jurisdiction: Jurisdiction,
        category: Category,
    },
    #[error("duplicate rule table for {category} in {jurisdiction}")]
    Duplicate {
        jurisdiction: Jurisdiction,
        category: Category,
    },
    #[error("rule table for {category} in {jurisdiction} has no tiers")]
    EmptyTiers {
        jurisdiction: Jurisdiction,
        category: Category,
    },
    #[error("tier '{tier}' for {category} in {jurisdiction} does not extend the previous window")]
    UnorderedTiers {
        jurisdiction: Jurisdiction,
        category: Category,
        tier: &'static str,
    },
    #[error("only the final tier for {category} in {jurisdiction} may be open-ended (found '{tier}')")]
    OpenTierNotLast {
        jurisdiction: Jurisdiction,
        category: Category,
        tier: &'static str,
    },
    #[error("final tier for {category} in {jurisdiction} must be open-ended")]
    MissingOpenTier {
        jurisdiction: Jurisdiction,
        category: Category,
    },
}

/// When a tier's primary remedy (rejection, refund, appeal, referral) is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityRule {
    Always,
    Never,
    Requires(Vec<EvidenceFlag>),
}

impl EligibilityRule {
    pub fn resolve(&self, evidence: &EvidenceFlags) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Requires(flags) => evidence.has_all(flags),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provision {
    pub text: &'static str,
    pub basis: Basis,
}

impl Provision {
    pub const fn statutory(text: &'static str) -> Self {
        Self {
            text,
            basis: Basis::Statutory,
        }
    }

    pub const fn contractual(text: &'static str) -> Self {
        Self {
            text,
            basis: Basis::Contractual,
        }
    }

    pub const fn regulatory(text: &'static str) -> Self {
        Self {
            text,
            basis: Basis::Regulatory,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemedyTemplate {
    pub kind: RemedyKind,
    pub text: &'static str,
    pub basis: Basis,
    pub requires: Vec<EvidenceFlag>,
}

impl RemedyTemplate {
    pub fn statutory(kind: RemedyKind, text: &'static str) -> Self {
        Self::new(kind, Basis::Statutory, text)
    }

    pub fn contractual(kind: RemedyKind, text: &'static str) -> Self {
        Self::new(kind, Basis::Contractual, text)
    }

    pub fn regulatory(kind: RemedyKind, text: &'static str) -> Self {
        Self::new(kind, Basis::Regulatory, text)
    }

    fn new(kind: RemedyKind, basis: Basis, text: &'static str) -> Self {
        Self {
            kind,
            text,
            basis,
            requires: Vec::new(),
        }
    }

    /// Only offer the remedy when every listed flag is held.
    pub fn requiring(mut self, flags: &[EvidenceFlag]) -> Self {
        self.requires.extend_from_slice(flags);
        self
    }

    pub fn available(&self, evidence: &EvidenceFlags) -> bool {
        evidence.has_all(&self.requires)
    }
}

/// Contiguous elapsed-time bracket with its own bundle of rights and remedies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRule {
    pub name: &'static str,
    pub bound: Option<ElapsedBound>,
    pub eligibility: EligibilityRule,
    pub rights: Vec<Provision>,
    pub remedies: Vec<RemedyTemplate>,
    pub warnings: Vec<&'static str>,
    pub time_barred: bool,
}

impl TierRule {
    pub fn within(name: &'static str, bound: ElapsedBound) -> Self {
        Self::build(name, Some(bound))
    }

    pub fn beyond(name: &'static str) -> Self {
        Self::build(name, None)
    }

    fn build(name: &'static str, bound: Option<ElapsedBound>) -> Self {
        Self {
            name,
            bound,
            eligibility: EligibilityRule::Never,
            rights: Vec::new(),
            remedies: Vec::new(),
            warnings: Vec::new(),
            time_barred: false,
        }
    }

    pub fn eligible(mut self, rule: EligibilityRule) -> Self {
        self.eligibility = rule;
        self
    }

    pub fn right(mut self, provision: Provision) -> Self {
        self.rights.push(provision);
        self
    }

    pub fn remedy(mut self, remedy: RemedyTemplate) -> Self {
        self.remedies.push(remedy);
        self
    }

    pub fn warning(mut self, warning: &'static str) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn time_barred(mut self) -> Self {
        self.time_barred = true;
        self.eligibility = EligibilityRule::Never;
        self
    }
}

/// Adjustment applied on top of whichever tier matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// Card-issuer liability once the amount reaches `minimum` (and stays within `maximum`).
    Chargeback {
        minimum: Decimal,
        maximum: Option<Decimal>,
        text: &'static str,
    },
    /// Distance-sale cancellation right while the window is open.
    CoolingOff {
        window: ElapsedBound,
        text: &'static str,
    },
    /// Typical manufacturer warranty length for the category.
    ManufacturerWarranty {
        window: ElapsedBound,
        text: &'static str,
    },
    /// Extra right surfaced when the claimant holds a piece of evidence.
    EvidenceGround {
        flag: EvidenceFlag,
        text: &'static str,
    },
    /// Private sellers owe no statutory quality duties; only misrepresentation survives.
    PrivateSale {
        right: &'static str,
        remedy: &'static str,
        warning: &'static str,
    },
}

/// Everything needed to evaluate one calculator for one jurisdiction and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTableEntry {
    pub jurisdiction: Jurisdiction,
    pub category: Category,
    pub counterparty: &'static str,
    pub citations: Vec<Citation>,
    pub tiers: Vec<TierRule>,
    pub modifiers: Vec<Modifier>,
    pub extra_rights: Vec<Provision>,
    pub extra_warnings: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
}

impl RuleTableEntry {
    pub fn new(jurisdiction: Jurisdiction, category: Category, counterparty: &'static str) -> Self {
        Self {
            jurisdiction,
            category,
            counterparty,
            citations: Vec::new(),
            tiers: Vec::new(),
            modifiers: Vec::new(),
            extra_rights: Vec::new(),
            extra_warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn calculator(&self) -> CalculatorKind {
        self.category.calculator()
    }

    pub fn cite(mut self, law: &str, section: &str) -> Self {
        self.citations.push(Citation {
            law: law.to_string(),
            section: section.to_string(),
        });
        self
    }

    pub fn tiers(mut self, tiers: Vec<TierRule>) -> Self {
        self.tiers.extend(tiers);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn extra_right(mut self, provision: Provision) -> Self {
        self.extra_rights.push(provision);
        self
    }

    pub fn extra_warning(mut self, warning: &'static str) -> Self {
        self.extra_warnings.push(warning);
        self
    }

    pub fn next_steps(mut self, steps: Vec<&'static str>) -> Self {
        self.next_steps = steps;
        self
    }

    /// Tiers must ascend strictly and end in exactly one open-ended tier.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let jurisdiction = self.jurisdiction;
        let category = self.category;

        let Some((last, bounded)) = self.tiers.split_last() else {
            return Err(ConfigurationError::EmptyTiers {
                jurisdiction,
                category,
            });
        };

        let mut previous: Option<i64> = None;
        for tier in bounded {
            let Some(bound) = tier.bound else {
                return Err(ConfigurationError::OpenTierNotLast {
                    jurisdiction,
                    category,
                    tier: tier.name,
                });
            };

            let days = bound.approx_days();
            if previous.is_some_and(|prior| days <= prior) {
                return Err(ConfigurationError::UnorderedTiers {
                    jurisdiction,
                    category,
                    tier: tier.name,
                });
            }
            previous = Some(days);
        }

        if last.bound.is_some() {
            return Err(ConfigurationError::MissingOpenTier {
                jurisdiction,
                category,
            });
        }

        Ok(())
    }
}

/// Immutable set of rule tables keyed by jurisdiction and category.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    entries: BTreeMap<(Jurisdiction, Category), RuleTableEntry>,
}

impl RuleBook {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rule tables for every supported jurisdiction, calculator, and category.
    pub fn standard() -> Result<Self, ConfigurationError> {
        let mut book = Self::empty();
        for jurisdiction in Jurisdiction::ordered() {
            for calculator in CalculatorKind::ordered() {
                for category in calculator.categories() {
                    book.insert(standard_entry(jurisdiction, category))?;
                }
            }
        }
        Ok(book)
    }

    pub fn insert(&mut self, entry: RuleTableEntry) -> Result<(), ConfigurationError> {
        entry.validate()?;

        let key = (entry.jurisdiction, entry.category);
        if self.entries.contains_key(&key) {
            return Err(ConfigurationError::Duplicate {
                jurisdiction: entry.jurisdiction,
                category: entry.category,
            });
        }

        self.entries.insert(key, entry);
        Ok(())
    }

    /// The calculator is implied by the category, so a key can never name the wrong table.
    pub fn lookup(
        &self,
        jurisdiction: Jurisdiction,
        category: Category,
    ) -> Result<&RuleTableEntry, ConfigurationError> {
        self.entries
            .get(&(jurisdiction, category))
            .ok_or(ConfigurationError::Unmapped {
                calculator: category.calculator(),
                jurisdiction,
                category,
            })
    }

    pub fn entries(&self) -> impl Iterator<Item = &RuleTableEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn standard_entry(jurisdiction: Jurisdiction, category: Category) -> RuleTableEntry {
    match category {
        Category::Vehicle(seller) => vehicle::entry(jurisdiction, seller),
        Category::Warranty(product) => warranty::entry(jurisdiction, product),
        Category::Parking(issuer) => parking::entry(jurisdiction, issuer),
        Category::Energy(issue) => energy::entry(jurisdiction, issue),
    }
}
