use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use shared::{User, UserRole};

use crate::storage::connection::DbConnection;
use crate::storage::traits::UserStorage;

/// Repository for user operations
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_user(row: &SqliteRow) -> Result<User> {
        let role: String = row.get("role");
        Ok(User {
            id: row.get("id"),
            username: row.get("username"),
            password: row.get("password"),
            role: role.parse::<UserRole>().map_err(|e| anyhow!(e))?,
        })
    }
}

#[async_trait]
impl UserStorage for UserRepository {
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password, role
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_credentials(&self, username: &str, password: &str, role: UserRole) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password, role
            FROM users
            WHERE username = ? AND password = ? AND role = ?
            "#,
        )
        .bind(username)
        .bind(password)
        .bind(role.display())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn store_user(&self, username: &str, password: &str, role: UserRole) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password, role)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(username)
        .bind(password)
        .bind(role.display())
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }
}
