//! Share link handlers
//!
//! Implements:
//! - POST /api/v1/brain/share       - Enable or disable the caller's share link
//! - GET /api/v1/brain/{share_link} - Public, read-only view of a shared brain

use axum::{
    extract::{Path, State},
    Json,
};
use cerebrum_auth::AuthUser;
use cerebrum_common::ValidatedJson;
use cerebrum_content::ContentResponse;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::SharingState;
use crate::domain::error::ShareError;

// ============================================================
// DTOs
// ============================================================

/// Request to toggle sharing
#[derive(Debug, Deserialize, Validate)]
pub struct ShareRequest {
    pub share: bool,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub message: String,
    /// Absolute URL of the new link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SharedBrainResponse {
    pub username: String,
    pub content: Vec<ContentResponse>,
}

// ============================================================
// Handlers
// ============================================================

/// POST /api/v1/brain/share - `{"share": true}` creates a link, `false` removes it
pub async fn update_share(
    AuthUser(auth_context): AuthUser,
    State(state): State<SharingState>,
    ValidatedJson(request): ValidatedJson<ShareRequest>,
) -> Result<Json<ShareResponse>, ShareError> {
    if request.share {
        let link = state.sharing.enable(auth_context.user_id).await?;

        return Ok(Json(ShareResponse {
            message: "Share link created".to_string(),
            link: Some(format!("{}{}", state.public_base_url, link.path())),
            hash: Some(link.hash),
            removed: None,
        }));
    }

    let removed = state.sharing.disable(auth_context.user_id).await?;
    let message = if removed {
        "Link removed"
    } else {
        "No link to remove"
    };

    Ok(Json(ShareResponse {
        message: message.to_string(),
        link: None,
        hash: None,
        removed: Some(removed),
    }))
}

/// GET /api/v1/brain/{share_link} - No authentication
pub async fn get_shared_brain(
    State(state): State<SharingState>,
    Path(share_link): Path<String>,
) -> Result<Json<SharedBrainResponse>, ShareError> {
    let shared = state.sharing.resolve(&share_link).await?;

    Ok(Json(SharedBrainResponse {
        username: shared.username,
        content: shared
            .content
            .into_iter()
            .map(ContentResponse::from)
            .collect(),
    }))
}
