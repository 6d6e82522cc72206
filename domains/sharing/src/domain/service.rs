//! Share link lifecycle and public resolution

use std::sync::Arc;

use cerebrum_accounts::UserStore;
use cerebrum_content::{Content, ContentStore};
use uuid::Uuid;

use crate::domain::entities::ShareLink;
use crate::domain::error::ShareError;
use crate::repository::{InsertOutcome, ShareLinkStore};

/// Attempts at finding an unused hash before giving up
const MAX_HASH_ATTEMPTS: usize = 5;

/// Everything an anonymous visitor sees through a share link
#[derive(Debug, Clone, PartialEq)]
pub struct SharedBrain {
    pub username: String,
    pub content: Vec<Content>,
}

#[derive(Clone)]
pub struct ShareService {
    links: Arc<dyn ShareLinkStore>,
    users: Arc<dyn UserStore>,
    content: Arc<dyn ContentStore>,
}

impl ShareService {
    pub fn new(
        links: Arc<dyn ShareLinkStore>,
        users: Arc<dyn UserStore>,
        content: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            links,
            users,
            content,
        }
    }

    /// Create a share link for `user_id`.
    ///
    /// Fails with `AlreadyShared` carrying the existing hash if the user
    /// already has one.
    pub async fn enable(&self, user_id: Uuid) -> Result<ShareLink, ShareError> {
        for attempt in 1..=MAX_HASH_ATTEMPTS {
            let candidate = ShareLink::generate(user_id);

            let outcome = self
                .links
                .insert(&candidate)
                .await
                .map_err(|e| ShareError::Internal(format!("Failed to create share link: {}", e)))?;

            match outcome {
                InsertOutcome::Created(link) => {
                    tracing::info!(user_id = %user_id, "Share link created");
                    return Ok(link);
                }
                InsertOutcome::AlreadyShared(existing) => {
                    return Err(ShareError::AlreadyShared {
                        hash: existing.hash,
                    });
                }
                InsertOutcome::Retry => {
                    tracing::debug!(user_id = %user_id, attempt, "Retrying share link insert");
                }
            }
        }

        Err(ShareError::Internal(format!(
            "No free share hash after {} attempts",
            MAX_HASH_ATTEMPTS
        )))
    }

    /// Remove `user_id`'s share link; `false` when there was none
    pub async fn disable(&self, user_id: Uuid) -> Result<bool, ShareError> {
        let removed = self
            .links
            .delete_by_user(user_id)
            .await
            .map_err(|e| ShareError::Internal(format!("Failed to remove share link: {}", e)))?;

        if removed {
            tracing::info!(user_id = %user_id, "Share link removed");
        }

        Ok(removed)
    }

    /// Resolve a public hash to its owner's username and current content
    pub async fn resolve(&self, hash: &str) -> Result<SharedBrain, ShareError> {
        let link = self
            .links
            .find_by_hash(hash)
            .await
            .map_err(|e| ShareError::Internal(format!("Failed to load share link: {}", e)))?
            .ok_or(ShareError::NotFound)?;

        let owner = self
            .users
            .get_by_id(link.user_id)
            .await
            .map_err(|e| ShareError::Internal(format!("Failed to load user: {}", e)))?
            .ok_or(ShareError::OwnerMissing {
                user_id: link.user_id,
            })?;

        let content = self
            .content
            .list_by_owner(owner.id)
            .await
            .map_err(|e| ShareError::Internal(format!("Failed to list content: {}", e)))?;

        Ok(SharedBrain {
            username: owner.username,
            content,
        })
    }
}
