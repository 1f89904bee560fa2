//! Repository for the `subtypes` table.

use async_trait::async_trait;
use cardvault_core::types::DbId;

use super::SubtypeRepository;
use crate::error::RepoError;
use crate::models::subtype::{CreateSubtype, Subtype, UpdateSubtype};
use crate::DbPool;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// PostgreSQL-backed [`SubtypeRepository`].
#[derive(Debug, Clone)]
pub struct SubtypeRepo {
    pool: DbPool,
}

impl SubtypeRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubtypeRepository for SubtypeRepo {
    async fn all(&self) -> Result<Vec<Subtype>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM subtypes WHERE deleted_at IS NULL ORDER BY id");
        Ok(sqlx::query_as::<_, Subtype>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn create(&self, input: &CreateSubtype) -> Result<Subtype, RepoError> {
        let query = format!("INSERT INTO subtypes (name) VALUES ($1) RETURNING {COLUMNS}");
        Ok(sqlx::query_as::<_, Subtype>(&query)
            .bind(&input.name)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn find_or_fail(&self, id: DbId) -> Result<Subtype, RepoError> {
        let query =
            format!("SELECT {COLUMNS} FROM subtypes WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Subtype>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound {
                entity: "Subtype",
                id,
            })
    }

    async fn update(&self, input: &UpdateSubtype, id: DbId) -> Result<Subtype, RepoError> {
        let query = format!(
            "UPDATE subtypes SET name = COALESCE($2, name)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subtype>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound {
                entity: "Subtype",
                id,
            })
    }

    async fn delete(&self, id: DbId) -> Result<u64, RepoError> {
        let result = sqlx::query(
            "UPDATE subtypes SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
