//! Jurisdiction-aware consumer rights calculators.
//!
//! A claim flows through intake validation, a rule-book lookup keyed by jurisdiction and
//! category, and the eligibility evaluator, which picks an elapsed-time tier and applies
//! cross-cutting modifiers such as private-sale stripping and card chargeback protection.

pub mod domain;
pub mod elapsed;
pub(crate) mod evaluation;
pub mod intake;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Basis, CalculatorKind, Category, Citation, ClaimInput, ClaimSubmission, EnergyIssue,
    EvidenceFlag, EvidenceFlags, IssuerType, Jurisdiction, ProductCategory, RemedyKind,
    RemedyOption, ResultRecord, SellerType,
};
pub use elapsed::{Elapsed, ElapsedBound};
pub use evaluation::EligibilityEvaluator;
pub use intake::{ClaimIntake, IntakeViolation};
pub use router::rights_router;
pub use rules::{
    ConfigurationError, EligibilityRule, Modifier, Provision, RemedyTemplate, RuleBook,
    RuleTableEntry, TierRule,
};
pub use service::{RightsError, RightsService};
