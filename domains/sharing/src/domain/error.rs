//! Sharing errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::share_path;

#[derive(Error, Debug)]
pub enum ShareError {
    /// The caller already has a link; carries its hash
    #[error("Share link already exists")]
    AlreadyShared { hash: String },

    #[error("Share link not found")]
    NotFound,

    /// A link whose owner no longer exists
    #[error("Share link owner {user_id} not found")]
    OwnerMissing { user_id: Uuid },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShareError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShareError::AlreadyShared { .. } => StatusCode::CONFLICT,
            ShareError::NotFound | ShareError::OwnerMissing { .. } => StatusCode::NOT_FOUND,
            ShareError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ShareError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ShareError::AlreadyShared { hash } => json!({
                "error": {
                    "code": "ALREADY_SHARED",
                    "message": "A share link already exists for this user",
                },
                "link": share_path(hash),
            }),
            ShareError::NotFound => not_found_body(),
            ShareError::OwnerMissing { user_id } => {
                tracing::warn!(user_id = %user_id, "Share link points at a missing user");
                not_found_body()
            }
            ShareError::Internal(msg) => {
                tracing::error!(error = %msg, "Sharing request failed");
                json!({
                    "error": {
                        "code": "INTERNAL_ERROR",
                        "message": "Something went wrong",
                    }
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

fn not_found_body() -> serde_json::Value {
    json!({
        "error": {
            "code": "NOT_FOUND",
            "message": "Link doesn't exist or is invalid",
        }
    })
}
