use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::domain::{CalculatorKind, Category, ClaimInput, ClaimSubmission};

/// Form-level problems caught before any rule table is consulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("select the country whose consumer law applies")]
    MissingJurisdiction,
    #[error("select a category for the {0} calculator")]
    MissingCategory(CalculatorKind),
    #[error("'{value}' is not a valid category for the {calculator} calculator")]
    UnknownCategory {
        calculator: CalculatorKind,
        value: String,
    },
    #[error("enter the {0}")]
    MissingStartDate(&'static str),
    #[error("the {label} ({date}) cannot be in the future")]
    StartDateInFuture { label: &'static str, date: NaiveDate },
    #[error("the event date ({event}) cannot be before the {label} ({start})")]
    EventBeforeStart {
        label: &'static str,
        start: NaiveDate,
        event: NaiveDate,
    },
    #[error("the amount cannot be negative (found {0})")]
    NegativeAmount(Decimal),
}

/// Converts raw calculator submissions into validated claim facts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimIntake;

impl ClaimIntake {
    /// `today` stands in for a missing event date and caps the start date.
    pub fn validate(
        &self,
        submission: ClaimSubmission,
        today: NaiveDate,
    ) -> Result<ClaimInput, IntakeViolation> {
        let ClaimSubmission {
            calculator,
            jurisdiction,
            category,
            purchase_date,
            event_date,
            amount,
            evidence,
            company_name,
            details,
        } = submission;

        let jurisdiction = jurisdiction.ok_or(IntakeViolation::MissingJurisdiction)?;

        let raw_category = category
            .filter(|value| !value.trim().is_empty())
            .ok_or(IntakeViolation::MissingCategory(calculator))?;
        let category = Category::parse(calculator, &raw_category).ok_or_else(|| {
            IntakeViolation::UnknownCategory {
                calculator,
                value: raw_category.clone(),
            }
        })?;

        let label = calculator.start_date_label();
        let purchase_date = purchase_date.ok_or(IntakeViolation::MissingStartDate(label))?;
        if purchase_date > today {
            return Err(IntakeViolation::StartDateInFuture {
                label,
                date: purchase_date,
            });
        }

        let event_date = event_date.unwrap_or(today);
        if event_date < purchase_date {
            return Err(IntakeViolation::EventBeforeStart {
                label,
                start: purchase_date,
                event: event_date,
            });
        }

        if let Some(value) = amount {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(IntakeViolation::NegativeAmount(value));
            }
        }

        let company_name = company_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(ClaimInput {
            jurisdiction,
            category,
            purchase_date,
            event_date,
            amount,
            evidence,
            company_name,
            details: details.unwrap_or_default(),
        })
    }
}
