use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::letters::LetterError;
use crate::workflows::rights::{ConfigurationError, RightsError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    RuleBook(ConfigurationError),
    Rights(RightsError),
    Letter(LetterError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::RuleBook(err) => write!(f, "rule book error: {}", err),
            AppError::Rights(err) => write!(f, "rights assessment error: {}", err),
            AppError::Letter(err) => write!(f, "letter error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::RuleBook(err) => Some(err),
            AppError::Rights(err) => Some(err),
            AppError::Letter(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Rights(RightsError::Intake(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::RuleBook(_)
            | AppError::Rights(RightsError::Configuration(_))
            | AppError::Letter(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(value: ConfigurationError) -> Self {
        Self::RuleBook(value)
    }
}

impl From<RightsError> for AppError {
    fn from(value: RightsError) -> Self {
        Self::Rights(value)
    }
}

impl From<LetterError> for AppError {
    fn from(value: LetterError) -> Self {
        Self::Letter(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::rights::{Category, IntakeViolation, IssuerType, Jurisdiction};

    #[test]
    fn intake_errors_map_to_unprocessable_entity() {
        let error = AppError::from(RightsError::Intake(IntakeViolation::MissingJurisdiction));
        assert_eq!(error.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn rule_book_errors_map_to_server_error() {
        let error = AppError::from(ConfigurationError::EmptyTiers {
            jurisdiction: Jurisdiction::Uk,
            category: Category::Parking(IssuerType::Council),
        });
        assert!(error.to_string().starts_with("rule book error"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
