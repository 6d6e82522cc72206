//! Service-wide error type and its HTTP mapping
//!
//! Every handler returns `Result<T>`; the error turns into a JSON body of the
//! form `{"error": {"code": "...", "message": "..."}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A unique name is already in use; reported as 422
    #[error("Already taken: {0}")]
    AlreadyTaken(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status and stable machine-readable code
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Authentication(_) => (StatusCode::UNAUTHORIZED, "AUTHENTICATION_ERROR"),
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Error::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Error::AlreadyTaken(_) => (StatusCode::UNPROCESSABLE_ENTITY, "ALREADY_TAKEN"),
            Error::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UNEXPECTED_ERROR"),
            Error::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    pub fn error_code(&self) -> &'static str {
        self.classify().1
    }

    /// Message returned to clients; server-side failures are reported generically
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Something went wrong".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        }

        let body = json!({
            "error": {
                "code": code,
                "message": self.public_message(),
            }
        });

        (status, Json(body)).into_response()
    }
}
