//! Request context for authenticated callers

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::claims::TokenClaims;
use crate::error::AuthError;

/// Identity bound to a request by the auth gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl AuthContext {
    pub fn new(user_id: Uuid, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            expires_at,
        }
    }
}

impl TryFrom<TokenClaims> for AuthContext {
    type Error = AuthError;

    fn try_from(claims: TokenClaims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;
        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(AuthError::InvalidToken)?;

        Ok(Self::new(user_id, expires_at))
    }
}
