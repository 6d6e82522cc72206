//! Repository implementations for the content domain

pub mod content;
pub mod memory;

use cerebrum_common::StoreResult;
use uuid::Uuid;

use crate::domain::entities::Content;

pub use content::PgContentStore;
pub use memory::MemoryContentStore;

/// Content repository
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Persist new content
    async fn insert(&self, content: &Content) -> StoreResult<Content>;

    /// All content owned by `user_id`, oldest first
    async fn list_by_owner(&self, user_id: Uuid) -> StoreResult<Vec<Content>>;

    /// Delete `content_id` only if it is owned by `user_id`; returns whether a row was removed
    async fn delete_owned(&self, user_id: Uuid, content_id: Uuid) -> StoreResult<bool>;
}
