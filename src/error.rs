//! Error types for the marketplace service.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("No screen at {0}")]
    UnknownRoute(String),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures to locate the session a request belongs to.
///
/// Reading role or onboarding state without a session is a programming
/// error on the client side, so these are surfaced loudly instead of
/// defaulting to an empty session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session context missing: send the x-session-id header")]
    MissingContext,

    #[error("Malformed session id: {0}")]
    Malformed(String),

    #[error("Session {0} not found")]
    NotFound(String),
}

/// Onboarding wizard errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("No onboarding wizard is active for this session")]
    NotActive,

    #[error("Unknown onboarding field: {0}")]
    UnknownField(String),

    #[error("Field {0} is not a multi-select field")]
    NotAListField(String),

    #[error("Field {0} is a multi-select field; use toggle")]
    NotAScalarField(String),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Session(SessionError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Session(_) => StatusCode::BAD_REQUEST,
            Self::Wizard(WizardError::NotActive) => StatusCode::CONFLICT,
            Self::Wizard(_) => StatusCode::BAD_REQUEST,
            Self::UnknownRoute(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        Error::from(self).into_response()
    }
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            Error::from(SessionError::MissingContext).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::from(SessionError::NotFound("abc".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::from(WizardError::NotActive).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            Error::from(WizardError::UnknownField("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn unknown_route_is_not_found() {
        let err = Error::UnknownRoute("/admin".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "No screen at /admin");
    }

    #[test]
    fn messages_name_the_field() {
        let err = WizardError::UnknownField("favorite_color".into());
        assert!(err.to_string().contains("favorite_color"));
    }
}
