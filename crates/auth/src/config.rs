//! Authentication configuration

use chrono::Duration;
use cerebrum_common::Config;

/// Authentication configuration
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub token_ttl: Duration,
    /// bcrypt work factor for password hashes
    pub password_cost: u32,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            issuer: None,
            token_ttl: Duration::seconds(cerebrum_common::config::DEFAULT_JWT_TTL_SECONDS),
            password_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Lower the bcrypt work factor (tests and local development only)
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            token_ttl: Duration::seconds(config.jwt_ttl_seconds),
            password_cost: bcrypt::DEFAULT_COST,
        }
    }
}
