//! In-memory content store, kept in insertion order

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cerebrum_common::StoreResult;
use uuid::Uuid;

use super::ContentStore;
use crate::domain::entities::Content;

#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    items: Arc<Mutex<Vec<Content>>>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up content regardless of owner
    pub fn get(&self, content_id: Uuid) -> Option<Content> {
        self.lock().iter().find(|c| c.id == content_id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Content>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl ContentStore for MemoryContentStore {
    async fn insert(&self, content: &Content) -> StoreResult<Content> {
        self.lock().push(content.clone());
        Ok(content.clone())
    }

    async fn list_by_owner(&self, user_id: Uuid) -> StoreResult<Vec<Content>> {
        Ok(self
            .lock()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_owned(&self, user_id: Uuid, content_id: Uuid) -> StoreResult<bool> {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|c| !(c.id == content_id && c.user_id == user_id));
        Ok(items.len() < before)
    }
}
