//! Integration specifications for the rights calculators.
//!
//! Claims go through the public `RightsService` facade and the HTTP router so intake,
//! rule-book lookup, and tier evaluation are exercised together.

mod common {
    use chrono::{Duration, NaiveDate};
    use redress::workflows::rights::{
        CalculatorKind, ClaimSubmission, EvidenceFlags, Jurisdiction,
    };

    pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    pub(super) fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    pub(super) fn submission(
        calculator: CalculatorKind,
        jurisdiction: Jurisdiction,
        category: &str,
        elapsed_days: i64,
    ) -> ClaimSubmission {
        let purchase_date = date(2024, 1, 1);
        ClaimSubmission {
            calculator,
            jurisdiction: Some(jurisdiction),
            category: Some(category.to_string()),
            purchase_date: Some(purchase_date),
            event_date: Some(purchase_date + Duration::days(elapsed_days)),
            amount: None,
            evidence: EvidenceFlags::new(),
            company_name: None,
            details: None,
        }
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::*;
use redress::workflows::rights::{
    rights_router, CalculatorKind, EvidenceFlag, IntakeViolation, Jurisdiction, RemedyKind,
    RightsError, RightsService,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

#[test]
fn every_supported_combination_is_assessable() {
    let service = RightsService::standard().expect("standard rule book");

    for calculator in CalculatorKind::ordered() {
        for jurisdiction in Jurisdiction::ordered() {
            for category in calculator.categories() {
                let record = service
                    .assess(
                        submission(calculator, jurisdiction, category.code(), 45),
                        today(),
                    )
                    .unwrap_or_else(|err| {
                        panic!("{calculator}/{jurisdiction}/{category} failed: {err}")
                    });

                assert_eq!(record.calculator, calculator);
                assert_eq!(record.jurisdiction, jurisdiction);
                assert_eq!(record.category, category);
                assert!(!record.tier.is_empty());
                assert!(!record.window_label.is_empty());
                assert!(!record.next_steps.is_empty());
                assert!(!record.citations.is_empty());
            }
        }
    }
}

#[test]
fn dealer_claim_with_credit_card_amount_gets_refund_and_chargeback() {
    let service = RightsService::standard().expect("standard rule book");
    let mut claim = submission(CalculatorKind::Vehicle, Jurisdiction::Uk, "dealer", 10);
    claim.amount = Some(Decimal::new(8_500, 0));
    claim.evidence = [EvidenceFlag::PaidByCreditCard].into_iter().collect();
    claim.company_name = Some("Acme Motors".to_string());
    claim.details = Some("Gearbox grinds in third gear.".to_string());

    let record = service.assess(claim, today()).expect("assessment");

    assert!(record.eligible);
    assert!(record.offers(RemedyKind::Refund));
    assert!(record.offers(RemedyKind::Chargeback));
    assert_eq!(record.details, "Gearbox grinds in third gear.");
    assert!(record
        .next_steps
        .iter()
        .any(|step| step.contains("Acme Motors")));
    assert!(record.next_steps[0].starts_with("1. "));
}

#[test]
fn private_vehicle_sale_is_never_statutorily_eligible() {
    let service = RightsService::standard().expect("standard rule book");

    for jurisdiction in Jurisdiction::ordered() {
        let record = service
            .assess(
                submission(CalculatorKind::Vehicle, jurisdiction, "private", 10),
                today(),
            )
            .expect("assessment");

        assert!(!record.eligible, "{jurisdiction}");
        assert!(!record.offers(RemedyKind::Refund), "{jurisdiction}");
        assert!(record.offers(RemedyKind::Misrepresentation), "{jurisdiction}");
    }
}

#[test]
fn intake_problems_surface_as_intake_errors() {
    let service = RightsService::standard().expect("standard rule book");

    let mut backwards = submission(CalculatorKind::Energy, Jurisdiction::Uk, "billing", 0);
    backwards.event_date = Some(date(2023, 12, 1));
    assert!(matches!(
        service.assess(backwards, today()),
        Err(RightsError::Intake(IntakeViolation::EventBeforeStart { .. }))
    ));

    let wrong_category = submission(CalculatorKind::Parking, Jurisdiction::Uk, "dealer", 3);
    assert!(matches!(
        service.assess(wrong_category, today()),
        Err(RightsError::Intake(IntakeViolation::UnknownCategory { .. }))
    ));
}

#[test]
fn missing_event_date_is_measured_to_today() {
    let service = RightsService::standard().expect("standard rule book");
    let mut claim = submission(CalculatorKind::Warranty, Jurisdiction::Uk, "electronics", 0);
    claim.event_date = None;
    claim.purchase_date = Some(date(2026, 10, 8));

    let record = service.assess(claim, today()).expect("assessment");

    assert_eq!(record.elapsed.days, 10);
}

async fn post(router: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::post("/api/v1/rights/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).expect("json payload"))
}

#[tokio::test]
async fn council_parking_notice_inside_discount_period() {
    let router = rights_router(Arc::new(
        RightsService::standard().expect("standard rule book"),
    ));

    let (status, body) = post(
        router,
        json!({
            "calculator": "parking",
            "jurisdiction": "uk",
            "category": "council",
            "purchase_date": "2024-03-01",
            "event_date": "2024-03-08",
            "evidence": ["signage_unclear", "photos_taken"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tier"], json!("discount period"));
    assert_eq!(
        body["window_label"],
        json!("7 days left in 14-day window (discount period)")
    );
    assert!(body["rights"]
        .as_array()
        .expect("rights array")
        .iter()
        .any(|right| right.as_str().unwrap_or_default().contains("signage")));
}

#[tokio::test]
async fn negative_amount_is_unprocessable() {
    let router = rights_router(Arc::new(
        RightsService::standard().expect("standard rule book"),
    ));

    let (status, body) = post(
        router,
        json!({
            "calculator": "vehicle",
            "jurisdiction": "us",
            "category": "online",
            "purchase_date": "2024-03-01",
            "amount": "-12.00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("negative"));
}
