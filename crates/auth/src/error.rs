//! Auth gate and token errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Why a request could not be authenticated, or a token could not be issued
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingAuthorization,

    /// Not text, not the Bearer scheme, or no token after the scheme
    #[error("malformed authorization header")]
    InvalidAuthorizationFormat,

    /// Bad signature, malformed payload, expired, or no subject
    #[error("invalid token")]
    InvalidToken,

    #[error("invalid user id in token")]
    InvalidUserId,

    #[error("failed to issue token")]
    TokenIssueFailed,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::TokenIssueFailed => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AuthError::InvalidAuthorizationFormat => "INVALID_AUTHORIZATION",
            AuthError::InvalidToken | AuthError::InvalidUserId => "INVALID_TOKEN",
            AuthError::TokenIssueFailed => "AUTH_ERROR",
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "Authorization header required",
            AuthError::InvalidAuthorizationFormat => "Expected 'Authorization: Bearer <token>'",
            AuthError::InvalidToken => "Invalid or expired token",
            AuthError::InvalidUserId => "Invalid user ID in token",
            AuthError::TokenIssueFailed => "Something went wrong",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.client_message(),
            }
        });

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<AuthError> for cerebrum_common::Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenIssueFailed => cerebrum_common::Error::Internal(err.to_string()),
            other => cerebrum_common::Error::Authentication(other.to_string()),
        }
    }
}
