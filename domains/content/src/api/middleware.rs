//! Content domain state and auth backend integration

use crate::domain::service::ContentService;
use axum::extract::FromRef;
use cerebrum_auth::AuthBackend;

/// Application state for the content domain
#[derive(Clone)]
pub struct ContentState {
    pub content: ContentService,
    pub auth: AuthBackend,
}

impl FromRef<ContentState> for AuthBackend {
    fn from_ref(state: &ContentState) -> Self {
        state.auth.clone()
    }
}
