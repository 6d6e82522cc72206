//! Domain entities for the sharing domain

use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of a generated share hash
pub const SHARE_HASH_LENGTH: usize = 10;

/// Public link granting anonymous read access to one user's content.
///
/// A user has at most one link at a time and each hash belongs to exactly one
/// user; both are enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShareLink {
    pub user_id: Uuid,
    pub hash: String,
    pub created_at: DateTime<Utc>,
}

impl ShareLink {
    /// New link for `user_id` with a freshly generated hash
    pub fn generate(user_id: Uuid) -> Self {
        Self {
            user_id,
            hash: generate_share_hash(),
            created_at: Utc::now(),
        }
    }

    /// Path the link is served under
    pub fn path(&self) -> String {
        share_path(&self.hash)
    }
}

/// Random alphanumeric hash of `SHARE_HASH_LENGTH` characters
pub fn generate_share_hash() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SHARE_HASH_LENGTH)
        .map(char::from)
        .collect()
}

/// Public path for a share hash, relative to the service root
pub fn share_path(hash: &str) -> String {
    format!("/api/v1/brain/{}", hash)
}
