//! Repository implementations for the sharing domain

pub mod links;
pub mod memory;

use cerebrum_common::StoreResult;
use uuid::Uuid;

use crate::domain::entities::ShareLink;

pub use links::PgShareLinkStore;
pub use memory::MemoryShareLinkStore;

/// Result of an atomic share link insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The link was stored as given
    Created(ShareLink),
    /// The owner already has a link; nothing was written
    AlreadyShared(ShareLink),
    /// Lost a race (hash collision, or the owner's link vanished mid-insert);
    /// nothing was written and a fresh attempt may succeed
    Retry,
}

/// Share link repository
///
/// One link per user and one user per hash are enforced by the store, never by
/// a separate lookup before the write.
#[async_trait::async_trait]
pub trait ShareLinkStore: Send + Sync {
    /// Insert `link` unless its owner already has one or its hash is taken
    async fn insert(&self, link: &ShareLink) -> StoreResult<InsertOutcome>;

    /// Remove the link owned by `user_id`; returns whether one was removed
    async fn delete_by_user(&self, user_id: Uuid) -> StoreResult<bool>;

    /// Find a link by its public hash
    async fn find_by_hash(&self, hash: &str) -> StoreResult<Option<ShareLink>>;

    /// Find the link owned by `user_id`
    async fn find_by_user(&self, user_id: Uuid) -> StoreResult<Option<ShareLink>>;
}
