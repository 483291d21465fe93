use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;

use super::domain::{GenerateLetterTypeRequest, LetterErrorResponse};
use super::service::LetterService;

/// Router builder exposing the letter-generation endpoint.
pub fn letter_router(service: Arc<LetterService>) -> Router {
    Router::new()
        .route("/api/generate/letter-type", post(generate_handler))
        .with_state(service)
}

/// Every failure, including an unreadable body, answers 500 with the empty-letter shape.
pub(crate) async fn generate_handler(
    State(service): State<Arc<LetterService>>,
    payload: Result<axum::Json<GenerateLetterTypeRequest>, JsonRejection>,
) -> Response {
    let axum::Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "letter request rejected");
            return error_response(format!("invalid letter request: {}", rejection.body_text()));
        }
    };

    let today = Local::now().date_naive();
    match service.generate(request, today).await {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome.into_response())).into_response(),
        Err(error) => error_response(error.to_string()),
    }
}

fn error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(LetterErrorResponse::new(message)),
    )
        .into_response()
}
