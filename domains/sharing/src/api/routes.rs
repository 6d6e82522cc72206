//! Route definitions for the sharing domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::share;
use super::middleware::SharingState;

/// Create all sharing domain API routes
pub fn routes() -> Router<SharingState> {
    Router::new()
        .route("/api/v1/brain/share", post(share::update_share))
        .route("/api/v1/brain/{share_link}", get(share::get_shared_brain))
}
