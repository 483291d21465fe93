use rust_decimal::Decimal;

use super::common::*;
use crate::workflows::rights::domain::{
    CalculatorKind, Category, IssuerType, Jurisdiction, SellerType,
};
use crate::workflows::rights::intake::{ClaimIntake, IntakeViolation};

fn today() -> chrono::NaiveDate {
    date(2025, 6, 1)
}

#[test]
fn accepts_complete_submission() {
    let mut submission = submission(CalculatorKind::Vehicle);
    submission.company_name = Some("  Acme Motors ".to_string());
    submission.details = Some("Clutch slips".to_string());

    let claim = ClaimIntake.validate(submission, today()).expect("valid claim");

    assert_eq!(claim.jurisdiction, Jurisdiction::Uk);
    assert_eq!(claim.category, Category::Vehicle(SellerType::Dealer));
    assert_eq!(claim.elapsed().days, 10);
    assert_eq!(claim.company_name.as_deref(), Some("Acme Motors"));
    assert_eq!(claim.details, "Clutch slips");
}

#[test]
fn missing_event_date_defaults_to_today() {
    let mut submission = submission(CalculatorKind::Vehicle);
    submission.event_date = None;

    let claim = ClaimIntake.validate(submission, today()).expect("valid claim");
    assert_eq!(claim.event_date, today());
}

#[test]
fn blank_company_name_is_dropped() {
    let mut submission = submission(CalculatorKind::Vehicle);
    submission.company_name = Some("   ".to_string());

    let claim = ClaimIntake.validate(submission, today()).expect("valid claim");
    assert!(claim.company_name.is_none());
}

#[test]
fn category_accepts_hyphens_and_spaces() {
    for raw in ["private_operator", "private-operator", "Private Operator"] {
        let mut submission = submission(CalculatorKind::Parking);
        submission.category = Some(raw.to_string());

        let claim = ClaimIntake.validate(submission, today()).expect("valid claim");
        assert_eq!(claim.category, Category::Parking(IssuerType::PrivateOperator));
    }
}

#[test]
fn rejects_missing_jurisdiction() {
    let mut submission = submission(CalculatorKind::Vehicle);
    submission.jurisdiction = None;

    assert_eq!(
        ClaimIntake.validate(submission, today()),
        Err(IntakeViolation::MissingJurisdiction)
    );
}

#[test]
fn rejects_missing_or_blank_category() {
    for category in [None, Some("  ".to_string())] {
        let mut submission = submission(CalculatorKind::Warranty);
        submission.category = category;

        assert_eq!(
            ClaimIntake.validate(submission, today()),
            Err(IntakeViolation::MissingCategory(CalculatorKind::Warranty))
        );
    }
}

#[test]
fn rejects_category_from_another_calculator() {
    let submission = submission(CalculatorKind::Energy);

    let error = ClaimIntake
        .validate(submission, today())
        .expect_err("dealer is not an energy issue");
    assert_eq!(
        error,
        IntakeViolation::UnknownCategory {
            calculator: CalculatorKind::Energy,
            value: "dealer".to_string(),
        }
    );
    assert!(error.to_string().contains("energy calculator"));
}

#[test]
fn rejects_missing_start_date_with_calculator_wording() {
    let mut submission = submission(CalculatorKind::Parking);
    submission.category = Some("council".to_string());
    submission.purchase_date = None;

    let error = ClaimIntake
        .validate(submission, today())
        .expect_err("missing date");
    assert_eq!(
        error,
        IntakeViolation::MissingStartDate("date the charge was issued")
    );
}

#[test]
fn rejects_start_date_in_the_future() {
    let mut submission = submission(CalculatorKind::Vehicle);
    submission.purchase_date = Some(date(2025, 6, 2));
    submission.event_date = None;

    assert!(matches!(
        ClaimIntake.validate(submission, today()),
        Err(IntakeViolation::StartDateInFuture { .. })
    ));
}

#[test]
fn rejects_event_before_start() {
    let mut submission = submission(CalculatorKind::Vehicle);
    submission.event_date = Some(date(2023, 12, 31));

    assert!(matches!(
        ClaimIntake.validate(submission, today()),
        Err(IntakeViolation::EventBeforeStart { .. })
    ));
}

#[test]
fn rejects_negative_amount_but_allows_zero() {
    let mut negative = submission(CalculatorKind::Vehicle);
    negative.amount = Some(Decimal::new(-5, 0));
    assert_eq!(
        ClaimIntake.validate(negative, today()),
        Err(IntakeViolation::NegativeAmount(Decimal::new(-5, 0)))
    );

    let mut zero = submission(CalculatorKind::Vehicle);
    zero.amount = Some(Decimal::ZERO);
    assert!(ClaimIntake.validate(zero, today()).is_ok());
}
