//! Route definitions for the accounts domain API

use axum::{routing::post, Router};

use super::handlers::auth;
use super::middleware::AccountsState;

/// Create all accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/v1/signup", post(auth::signup))
        .route("/api/v1/signin", post(auth::signin))
}
