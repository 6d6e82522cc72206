//! Domain entities for the accounts domain

use chrono::{DateTime, Utc};
use cerebrum_common::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum username length in characters
pub const MAX_USERNAME_LENGTH: usize = 64;

/// User entity
///
/// Usernames are case-sensitive and stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with validation
    ///
    /// `password_hash` must already be a bcrypt hash.
    pub fn new(username: String, password_hash: String) -> Result<Self> {
        if username.trim().is_empty() {
            return Err(Error::Validation("Username is required".to_string()));
        }

        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(Error::Validation(format!(
                "Username must be at most {} characters",
                MAX_USERNAME_LENGTH
            )));
        }

        if password_hash.is_empty() {
            return Err(Error::Internal("Password hash is empty".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: Utc::now(),
        })
    }
}
