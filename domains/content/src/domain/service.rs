//! Owner-scoped content operations
//!
//! Every operation takes the caller's user id; content owned by anyone else
//! is invisible, including to `delete`, which reports it as not found.

use std::sync::Arc;

use cerebrum_common::{Error, Result};
use uuid::Uuid;

use crate::domain::entities::Content;
use crate::repository::ContentStore;

#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Save a new link for `owner_id`. Duplicate links are allowed.
    pub async fn create(&self, owner_id: Uuid, link: String, title: String) -> Result<Content> {
        let content = Content::new(owner_id, link, title)?;

        let created = self
            .store
            .insert(&content)
            .await
            .map_err(|e| Error::Internal(format!("Failed to save content: {}", e)))?;

        tracing::info!(user_id = %owner_id, content_id = %created.id, "Content added");

        Ok(created)
    }

    /// All content owned by `owner_id`, in creation order
    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<Content>> {
        self.store
            .list_by_owner(owner_id)
            .await
            .map_err(|e| Error::Internal(format!("Failed to list content: {}", e)))
    }

    /// Delete `content_id` if `owner_id` owns it
    pub async fn delete(&self, owner_id: Uuid, content_id: Uuid) -> Result<()> {
        let removed = self
            .store
            .delete_owned(owner_id, content_id)
            .await
            .map_err(|e| Error::Internal(format!("Failed to delete content: {}", e)))?;

        if !removed {
            return Err(Error::NotFound("Content not found".to_string()));
        }

        tracing::info!(user_id = %owner_id, content_id = %content_id, "Content deleted");

        Ok(())
    }
}
