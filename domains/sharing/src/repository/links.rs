//! PostgreSQL share link repository

use cerebrum_common::{unique_violation, StoreResult};
use sqlx::PgPool;
use uuid::Uuid;

use super::{InsertOutcome, ShareLinkStore};
use crate::domain::entities::ShareLink;

#[derive(Clone)]
pub struct PgShareLinkStore {
    pool: PgPool,
}

impl PgShareLinkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ShareLinkStore for PgShareLinkStore {
    async fn insert(&self, link: &ShareLink) -> StoreResult<InsertOutcome> {
        // A taken user_id is absorbed by ON CONFLICT; a taken hash still raises.
        let inserted: Option<ShareLink> = match sqlx::query_as(
            r#"
            INSERT INTO share_links (user_id, hash, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING user_id, hash, created_at
            "#,
        )
        .bind(link.user_id)
        .bind(&link.hash)
        .bind(link.created_at)
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row,
            Err(e) => {
                if let Some(constraint) = unique_violation(&e) {
                    tracing::debug!(constraint = %constraint, "Share hash collision");
                    return Ok(InsertOutcome::Retry);
                }
                return Err(e.into());
            }
        };

        if let Some(created) = inserted {
            return Ok(InsertOutcome::Created(created));
        }

        Ok(match self.find_by_user(link.user_id).await? {
            Some(existing) => InsertOutcome::AlreadyShared(existing),
            None => InsertOutcome::Retry,
        })
    }

    async fn delete_by_user(&self, user_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM share_links WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_hash(&self, hash: &str) -> StoreResult<Option<ShareLink>> {
        let link = sqlx::query_as(
            r#"
            SELECT user_id, hash, created_at
            FROM share_links
            WHERE hash = $1
            "#,
        )
        .bind(hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    async fn find_by_user(&self, user_id: Uuid) -> StoreResult<Option<ShareLink>> {
        let link = sqlx::query_as(
            r#"
            SELECT user_id, hash, created_at
            FROM share_links
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }
}
