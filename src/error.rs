//! Error type shared by services and handlers
//!
//! Every failure leaves the API as an error envelope whose `data` carries a
//! stable machine code, plus field details for validation failures.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::{models::DecisionError, response::Envelope};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // 401
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // 403
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // 400
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation failed")]
    Fields(ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // 404 / 409
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // 500, never shown to clients verbatim
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// `data` of an error envelope
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("{} not found", resource))
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) | Self::Fields(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) | Self::Fields(_) | Self::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) | Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand to the client; server faults are logged instead.
    fn public_message(&self) -> String {
        match self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Internal error");
                "An internal error occurred".to_string()
            }
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "A database error occurred".to_string()
            }
            other => other.to_string(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Fields(errors) => serde_json::to_value(errors.field_errors()).ok(),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Envelope::error(
            self.public_message(),
            ErrorDetails {
                code: self.error_code(),
                details: self.details(),
            },
        );

        (self.status_code(), body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let db_err = match err {
            sqlx::Error::Database(db_err) => db_err,
            sqlx::Error::RowNotFound => return Self::not_found("Resource"),
            other => return Self::Database(other.to_string()),
        };

        if db_err.is_unique_violation() {
            Self::AlreadyExists("Resource already exists".to_string())
        } else if db_err.is_foreign_key_violation() {
            Self::InvalidInput("Referenced resource does not exist".to_string())
        } else if db_err.is_check_violation() {
            Self::Validation(db_err.message().to_string())
        } else {
            Self::Database(db_err.to_string())
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        Self::Fields(err)
    }
}

impl From<DecisionError> for AppError {
    fn from(err: DecisionError) -> Self {
        match err {
            DecisionError::InvalidDecision(_) => Self::Validation(err.to_string()),
            DecisionError::AlreadyDecided(_) => Self::Conflict(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct SignupForm {
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::not_found("Condidat").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_decision_errors() {
        let err: AppError = DecisionError::AlreadyDecided("accepted".into()).into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err: AppError = DecisionError::InvalidDecision("maybe".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_errors_carry_details() {
        let form = SignupForm {
            email: "nope".to_string(),
        };
        let err: AppError = form.validate().unwrap_err().into();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        let details = err.details().unwrap();
        assert!(details.get("email").is_some());
    }

    #[test]
    fn test_internal_message_is_masked() {
        let err = AppError::Internal(anyhow::anyhow!("secret path /etc/x"));
        assert_eq!(err.public_message(), "An internal error occurred");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            AppError::not_found("Intern").to_string(),
            "Not found: Intern not found"
        );
    }
}
