//! In-memory share link store
//!
//! Both uniqueness checks and the insert happen under one lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cerebrum_common::StoreResult;
use uuid::Uuid;

use super::{InsertOutcome, ShareLinkStore};
use crate::domain::entities::ShareLink;

#[derive(Debug, Clone, Default)]
pub struct MemoryShareLinkStore {
    by_user: Arc<Mutex<HashMap<Uuid, ShareLink>>>,
}

impl MemoryShareLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, ShareLink>> {
        self.by_user.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl ShareLinkStore for MemoryShareLinkStore {
    async fn insert(&self, link: &ShareLink) -> StoreResult<InsertOutcome> {
        let mut links = self.lock();

        if let Some(existing) = links.get(&link.user_id) {
            return Ok(InsertOutcome::AlreadyShared(existing.clone()));
        }

        if links.values().any(|l| l.hash == link.hash) {
            return Ok(InsertOutcome::Retry);
        }

        links.insert(link.user_id, link.clone());
        Ok(InsertOutcome::Created(link.clone()))
    }

    async fn delete_by_user(&self, user_id: Uuid) -> StoreResult<bool> {
        Ok(self.lock().remove(&user_id).is_some())
    }

    async fn find_by_hash(&self, hash: &str) -> StoreResult<Option<ShareLink>> {
        Ok(self.lock().values().find(|l| l.hash == hash).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> StoreResult<Option<ShareLink>> {
        Ok(self.lock().get(&user_id).cloned())
    }
}
