//! Content handlers
//!
//! Implements:
//! - POST /api/v1/content   - Save a link for the caller
//! - GET /api/v1/content    - List the caller's content
//! - DELETE /api/v1/content - Delete one of the caller's items

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use cerebrum_auth::AuthUser;
use cerebrum_common::{Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ContentState;
use crate::domain::entities::Content;

// ============================================================
// DTOs
// ============================================================

/// Content as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub link: String,
    pub title: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        Self {
            id: content.id,
            user_id: content.user_id,
            link: content.link,
            title: content.title,
            tags: content.tags,
            created_at: content.created_at,
        }
    }
}

/// Request to save a link
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContentRequest {
    #[validate(length(min = 1, message = "Link is required"))]
    pub link: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct CreateContentResponse {
    pub message: String,
    pub content: ContentResponse,
}

#[derive(Debug, Serialize)]
pub struct ListContentResponse {
    pub content: Vec<ContentResponse>,
}

/// Request to delete a saved item
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteContentRequest {
    #[serde(alias = "contentId")]
    pub content_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================
// Handlers
// ============================================================

/// POST /api/v1/content - Save a link owned by the caller
pub async fn create_content(
    AuthUser(auth_context): AuthUser,
    State(state): State<ContentState>,
    ValidatedJson(request): ValidatedJson<CreateContentRequest>,
) -> Result<Json<CreateContentResponse>> {
    let content = state
        .content
        .create(auth_context.user_id, request.link, request.title)
        .await?;

    Ok(Json(CreateContentResponse {
        message: "Content added".to_string(),
        content: ContentResponse::from(content),
    }))
}

/// GET /api/v1/content - List everything the caller has saved
pub async fn list_content(
    AuthUser(auth_context): AuthUser,
    State(state): State<ContentState>,
) -> Result<Json<ListContentResponse>> {
    let content = state.content.list(auth_context.user_id).await?;

    Ok(Json(ListContentResponse {
        content: content.into_iter().map(ContentResponse::from).collect(),
    }))
}

/// DELETE /api/v1/content - Delete an item the caller owns
pub async fn delete_content(
    AuthUser(auth_context): AuthUser,
    State(state): State<ContentState>,
    ValidatedJson(request): ValidatedJson<DeleteContentRequest>,
) -> Result<Json<MessageResponse>> {
    state
        .content
        .delete(auth_context.user_id, request.content_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Content deleted successfully".to_string(),
    }))
}
