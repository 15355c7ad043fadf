use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::{MessageRow, UserProfileRow, UserRow};

/// Read access to users and the messages they own.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRow>, sqlx::Error>;
    async fn find_user(&self, id: i32) -> Result<Option<UserProfileRow>, sqlx::Error>;
    async fn list_messages(&self, user_id: i32) -> Result<Vec<MessageRow>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> Result<Vec<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, type
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
    }

    async fn find_user(&self, id: i32) -> Result<Option<UserProfileRow>, sqlx::Error> {
        sqlx::query_as::<_, UserProfileRow>(
            r#"
            SELECT name, type
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    async fn list_messages(&self, user_id: i32) -> Result<Vec<MessageRow>, sqlx::Error> {
        sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, msg
            FROM messages
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
    }
}
