//! In-memory user store
//!
//! Used by tests and by `STORE_BACKEND=memory`. The username check and the
//! insert happen under one lock, matching the unique-constraint semantics of
//! the PostgreSQL store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cerebrum_common::{RepositoryError, StoreResult};
use uuid::Uuid;

use super::UserStore;
use crate::domain::entities::User;

#[derive(Debug, Default)]
struct Users {
    by_id: HashMap<Uuid, User>,
    id_by_username: HashMap<String, Uuid>,
}

/// In-memory credential store
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    inner: Arc<Mutex<Users>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.lock().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove a user record, leaving anything that references it in place
    pub fn remove(&self, id: Uuid) -> Option<User> {
        let mut users = self.lock();
        let user = users.by_id.remove(&id)?;
        users.id_by_username.remove(&user.username);
        Some(user)
    }

    fn lock(&self) -> MutexGuard<'_, Users> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &User) -> StoreResult<User> {
        let mut users = self.lock();

        if users.id_by_username.contains_key(&user.username) || users.by_id.contains_key(&user.id)
        {
            return Err(RepositoryError::AlreadyExists);
        }

        users
            .id_by_username
            .insert(user.username.clone(), user.id);
        users.by_id.insert(user.id, user.clone());

        Ok(user.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.lock().by_id.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.lock();
        Ok(users
            .id_by_username
            .get(username)
            .and_then(|id| users.by_id.get(id))
            .cloned())
    }
}
