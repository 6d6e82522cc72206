//! Domain entities for the content domain

use chrono::{DateTime, Utc};
use cerebrum_common::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved link owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Content {
    pub id: Uuid,
    pub user_id: Uuid,
    pub link: String,
    pub title: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Content {
    /// Create new content for `user_id` with an empty tag set
    pub fn new(user_id: Uuid, link: String, title: String) -> Result<Self> {
        if link.trim().is_empty() {
            return Err(Error::Validation("Link is required".to_string()));
        }

        if title.trim().is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            link,
            title,
            tags: Vec::new(),
            created_at: Utc::now(),
        })
    }
}
