//! Route definitions for the content domain API

use axum::{routing::get, Router};

use super::handlers::content;
use super::middleware::ContentState;

/// Create all content domain API routes
pub fn routes() -> Router<ContentState> {
    Router::new().route(
        "/api/v1/content",
        get(content::list_content)
            .post(content::create_content)
            .delete(content::delete_content),
    )
}
