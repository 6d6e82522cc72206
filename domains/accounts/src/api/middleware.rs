//! Accounts domain state and auth backend integration

use crate::repository::UserStore;
use axum::extract::FromRef;
use cerebrum_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: Arc<dyn UserStore>,
    pub auth: AuthBackend,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
