use axum::response::Response;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::workflows::rights::domain::{
    CalculatorKind, Category, ClaimInput, ClaimSubmission, EvidenceFlag, EvidenceFlags,
    Jurisdiction, ResultRecord,
};
use crate::workflows::rights::evaluation::EligibilityEvaluator;
use crate::workflows::rights::rules::RuleBook;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn purchase_date() -> NaiveDate {
    date(2024, 1, 1)
}

pub(super) fn standard_book() -> RuleBook {
    RuleBook::standard().expect("standard rule book validates")
}

pub(super) fn evidence(flags: &[EvidenceFlag]) -> EvidenceFlags {
    flags.iter().copied().collect()
}

pub(super) fn claim(
    jurisdiction: Jurisdiction,
    category: Category,
    elapsed_days: i64,
    evidence: EvidenceFlags,
) -> ClaimInput {
    ClaimInput {
        jurisdiction,
        category,
        purchase_date: purchase_date(),
        event_date: purchase_date() + Duration::days(elapsed_days),
        amount: None,
        evidence,
        company_name: None,
        details: String::new(),
    }
}

pub(super) fn with_amount(mut claim: ClaimInput, amount: i64) -> ClaimInput {
    claim.amount = Some(Decimal::new(amount, 0));
    claim
}

pub(super) fn evaluate(book: &RuleBook, claim: &ClaimInput) -> ResultRecord {
    let entry = book
        .lookup(claim.jurisdiction, claim.category)
        .expect("entry present");
    EligibilityEvaluator::new().evaluate(claim, entry)
}

pub(super) fn submission(calculator: CalculatorKind) -> ClaimSubmission {
    ClaimSubmission {
        calculator,
        jurisdiction: Some(Jurisdiction::Uk),
        category: Some("dealer".to_string()),
        purchase_date: Some(purchase_date()),
        event_date: Some(date(2024, 1, 11)),
        amount: None,
        evidence: EvidenceFlags::new(),
        company_name: None,
        details: None,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
