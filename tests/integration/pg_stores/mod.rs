//! Postgres-backed store tests and their database fixture

mod content;
mod sharing;

use std::env;
use std::sync::Once;

use anyhow::Result;
use cerebrum_accounts::{PgUserStore, User, UserStore};
use sqlx::PgPool;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Database URL for store tests, if one is configured
pub fn database_url() -> Option<String> {
    INIT.call_once(|| {
        dotenvy::from_filename(".env.test").ok();
        dotenvy::dotenv().ok();
    });

    env::var("TEST_DATABASE_URL")
        .or_else(|_| env::var("DATABASE_URL"))
        .ok()
        .filter(|url| !url.is_empty())
}

/// Connected, migrated pool plus the users each test creates
pub struct TestDb {
    pub pool: PgPool,
    created_users: Vec<Uuid>,
}

impl TestDb {
    /// `None` when no database is configured
    pub async fn connect() -> Result<Option<Self>> {
        let Some(url) = database_url() else {
            eprintln!("TEST_DATABASE_URL not set; skipping Postgres store test");
            return Ok(None);
        };

        let pool = PgPool::connect(&url).await?;
        sqlx::migrate!("../../migrations").run(&pool).await?;

        Ok(Some(Self {
            pool,
            created_users: Vec::new(),
        }))
    }

    /// Insert a user with a unique name derived from `prefix`
    pub async fn create_user(&mut self, prefix: &str) -> Result<User> {
        let username = format!("{}-{}", prefix, Uuid::new_v4().simple());
        let user = User::new(username, "$2b$04$not-a-real-hash".to_string())?;
        let user = PgUserStore::new(self.pool.clone()).create(&user).await?;
        self.created_users.push(user.id);
        Ok(user)
    }

    /// Track a user inserted outside `create_user`
    pub fn track(&mut self, user_id: Uuid) {
        self.created_users.push(user_id);
    }

    /// Remove tracked users; content and share links cascade
    pub async fn cleanup(self) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = ANY($1)")
            .bind(&self.created_users)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Share hash that is unique per call and matches the stored format
pub fn unique_hash() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_string()
}
