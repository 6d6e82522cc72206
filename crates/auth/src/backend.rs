//! Concrete authentication backend
//!
//! Owns the process-wide auth configuration and exposes token issuing,
//! token verification, and password hashing. Holds no per-request state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cerebrum_common::Result;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;

/// A freshly signed token and its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: Arc<AuthConfig>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Issue a signed identity token for `user_id`
    pub fn issue_token(&self, user_id: Uuid) -> std::result::Result<IssuedToken, AuthError> {
        let (token, expires_at) = crate::jwt::encode_token(user_id, &self.config, Utc::now())?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and resolve the identity it binds
    pub fn authenticate(&self, token: &str) -> std::result::Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_token(token, &self.config)?;
        AuthContext::try_from(claims)
    }

    /// Hash a password with the configured work factor
    pub async fn hash_password(&self, password: &str) -> Result<String> {
        crate::password::hash_password(password.to_string(), self.config.password_cost).await
    }

    /// Check a password against a stored hash
    pub async fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        crate::password::verify_password(password.to_string(), hash.to_string()).await
    }
}
