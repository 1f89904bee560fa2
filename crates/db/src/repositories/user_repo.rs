//! Repository for the `users` table.

use async_trait::async_trait;
use cardvault_core::types::DbId;

use super::UserRepository;
use crate::error::RepoError;
use crate::models::user::{CreateUser, User};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, remember_token, created_at, updated_at";

/// PostgreSQL-backed [`UserRepository`].
#[derive(Debug, Clone)]
pub struct UserRepo {
    pool: DbPool,
}

impl UserRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepo {
    async fn all(&self) -> Result<Vec<User>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE deleted_at IS NULL ORDER BY id");
        Ok(sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Insert a new user. A duplicate email violates `uq_users_email`.
    async fn create(&self, input: &CreateUser) -> Result<User, RepoError> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, remember_token)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.remember_token)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn find_or_fail(&self, id: DbId) -> Result<User, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound { entity: "User", id })
    }
}
