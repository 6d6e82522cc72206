//! Sharing domain state and auth backend integration

use crate::domain::service::ShareService;
use axum::extract::FromRef;
use cerebrum_auth::AuthBackend;

/// Application state for the sharing domain
#[derive(Clone)]
pub struct SharingState {
    pub sharing: ShareService,
    pub auth: AuthBackend,
    /// Absolute origin prepended to share paths, without a trailing slash
    pub public_base_url: String,
}

impl SharingState {
    pub fn new(sharing: ShareService, auth: AuthBackend, public_base_url: &str) -> Self {
        Self {
            sharing,
            auth,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl FromRef<SharingState> for AuthBackend {
    fn from_ref(state: &SharingState) -> Self {
        state.auth.clone()
    }
}
