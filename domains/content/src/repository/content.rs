//! PostgreSQL content repository

use cerebrum_common::StoreResult;
use sqlx::PgPool;
use uuid::Uuid;

use super::ContentStore;
use crate::domain::entities::Content;

#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ContentStore for PgContentStore {
    async fn insert(&self, content: &Content) -> StoreResult<Content> {
        let created: Content = sqlx::query_as(
            r#"
            INSERT INTO content (id, user_id, link, title, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, link, title, tags, created_at
            "#,
        )
        .bind(content.id)
        .bind(content.user_id)
        .bind(&content.link)
        .bind(&content.title)
        .bind(&content.tags)
        .bind(content.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_by_owner(&self, user_id: Uuid) -> StoreResult<Vec<Content>> {
        let content = sqlx::query_as(
            r#"
            SELECT id, user_id, link, title, tags, created_at
            FROM content
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(content)
    }

    async fn delete_owned(&self, user_id: Uuid, content_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM content WHERE id = $1 AND user_id = $2")
            .bind(content_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
