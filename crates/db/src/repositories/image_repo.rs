//! Repository for the `images` table.

use async_trait::async_trait;
use cardvault_core::types::DbId;

use super::ImageRepository;
use crate::error::RepoError;
use crate::models::image::{CreateImage, Image, UpdateImage};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, extension, file, created_at, updated_at";

/// PostgreSQL-backed [`ImageRepository`].
#[derive(Debug, Clone)]
pub struct ImageRepo {
    pool: DbPool,
}

impl ImageRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for ImageRepo {
    async fn all(&self) -> Result<Vec<Image>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE deleted_at IS NULL ORDER BY id");
        Ok(sqlx::query_as::<_, Image>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn create(&self, input: &CreateImage) -> Result<Image, RepoError> {
        let query = format!(
            "INSERT INTO images (name, extension, file)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Image>(&query)
            .bind(&input.name)
            .bind(input.extension)
            .bind(&input.file)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn find_or_fail(&self, id: DbId) -> Result<Image, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound { entity: "Image", id })
    }

    async fn update(&self, input: &UpdateImage, id: DbId) -> Result<Image, RepoError> {
        let query = format!(
            "UPDATE images SET
                name = COALESCE($2, name),
                extension = COALESCE($3, extension),
                file = COALESCE($4, file)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.extension)
            .bind(&input.file)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound { entity: "Image", id })
    }

    async fn delete(&self, id: DbId) -> Result<u64, RepoError> {
        let result = sqlx::query(
            "UPDATE images SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
