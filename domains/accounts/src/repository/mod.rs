//! Repository implementations for the accounts domain

pub mod memory;
pub mod users;

use cerebrum_common::StoreResult;
use uuid::Uuid;

use crate::domain::entities::User;

pub use memory::MemoryUserStore;
pub use users::PgUserStore;

/// Credential store
///
/// Username uniqueness is enforced by the store itself so that concurrent
/// signups for the same name cannot both succeed.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user; `RepositoryError::AlreadyExists` if the username is taken
    async fn create(&self, user: &User) -> StoreResult<User>;

    /// Get user by ID
    async fn get_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Find user by exact (case-sensitive) username
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;
}
