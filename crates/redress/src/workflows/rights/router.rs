use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::ClaimSubmission;
use super::service::{RightsError, RightsService};

/// Router builder exposing the rights calculators over HTTP.
pub fn rights_router(service: Arc<RightsService>) -> Router {
    Router::new()
        .route("/api/v1/rights/evaluate", post(evaluate_handler))
        .with_state(service)
}

/// Unreadable forms, including out-of-range enum values, are user errors and share the
/// intake error shape.
pub(crate) async fn evaluate_handler(
    State(service): State<Arc<RightsService>>,
    payload: Result<axum::Json<ClaimSubmission>, JsonRejection>,
) -> Response {
    let axum::Json(submission) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "claim form rejected");
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let today = Local::now().date_naive();
    match service.assess(submission, today) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(RightsError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
