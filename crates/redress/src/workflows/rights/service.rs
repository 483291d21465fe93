use chrono::NaiveDate;

use super::domain::{ClaimSubmission, ResultRecord};
use super::evaluation::EligibilityEvaluator;
use super::intake::{ClaimIntake, IntakeViolation};
use super::rules::{ConfigurationError, RuleBook};

/// Service composing intake validation, rule lookup, and the eligibility evaluator.
#[derive(Debug, Clone)]
pub struct RightsService {
    intake: ClaimIntake,
    book: RuleBook,
    evaluator: EligibilityEvaluator,
}

impl RightsService {
    pub fn new(book: RuleBook) -> Self {
        Self {
            intake: ClaimIntake,
            book,
            evaluator: EligibilityEvaluator::new(),
        }
    }

    /// Service over the standard rule book; fails if any shipped table is malformed.
    pub fn standard() -> Result<Self, ConfigurationError> {
        Ok(Self::new(RuleBook::standard()?))
    }

    pub fn book(&self) -> &RuleBook {
        &self.book
    }

    /// Validate, look up, and evaluate a single claim.
    pub fn assess(
        &self,
        submission: ClaimSubmission,
        today: NaiveDate,
    ) -> Result<ResultRecord, RightsError> {
        let calculator = submission.calculator;
        let claim = self
            .intake
            .validate(submission, today)
            .inspect_err(|violation| {
                tracing::debug!(calculator = %calculator, error = %violation, "claim rejected at intake");
            })?;

        let entry = self
            .book
            .lookup(claim.jurisdiction, claim.category)
            .inspect_err(|error| tracing::error!(error = %error, "rule table lookup failed"))?;

        let record = self.evaluator.evaluate(&claim, entry);
        tracing::info!(
            calculator = %record.calculator,
            jurisdiction = %record.jurisdiction,
            category = %record.category,
            tier = %record.tier,
            eligible = record.eligible,
            remedies = record.remedies.len(),
            "rights assessment completed"
        );

        Ok(record)
    }
}

/// Error raised by the rights service.
#[derive(Debug, thiserror::Error)]
pub enum RightsError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
