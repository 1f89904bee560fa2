//! Repository for the `cards` table.

use async_trait::async_trait;
use cardvault_core::types::DbId;

use super::CardRepository;
use crate::error::RepoError;
use crate::models::card::{Card, CreateCard, UpdateCard};
use crate::DbPool;

/// Card columns plus the joined subtype and image, aliased for [`Card`]'s `FromRow`.
const COLUMNS: &str = "c.id, c.name, c.description, c.first_edition, c.serial_code, \
     c.card_type, c.attack, c.defense, c.star, c.amount::text AS amount, \
     c.subtype_id, c.image_id, c.created_at, c.updated_at, \
     s.name AS subtype_name, s.created_at AS subtype_created_at, \
     s.updated_at AS subtype_updated_at, \
     i.name AS image_name, i.extension AS image_extension, i.file AS image_file, \
     i.created_at AS image_created_at, i.updated_at AS image_updated_at";

/// `SELECT` over `source` (a table or CTE aliased `c`) with relations joined.
fn select_from(source: &str) -> String {
    format!(
        "SELECT {COLUMNS} FROM {source} c
         LEFT JOIN subtypes s ON s.id = c.subtype_id AND s.deleted_at IS NULL
         LEFT JOIN images i ON i.id = c.image_id AND i.deleted_at IS NULL"
    )
}

/// PostgreSQL-backed [`CardRepository`].
#[derive(Debug, Clone)]
pub struct CardRepo {
    pool: DbPool,
}

impl CardRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for CardRepo {
    async fn all(&self) -> Result<Vec<Card>, RepoError> {
        let query = format!(
            "{} WHERE c.deleted_at IS NULL ORDER BY c.id",
            select_from("cards")
        );
        Ok(sqlx::query_as::<_, Card>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn create(&self, input: &CreateCard) -> Result<Card, RepoError> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO cards (name, description, first_edition, serial_code, card_type,
                                   attack, defense, star, amount, subtype_id, image_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::numeric, $10, $11)
                RETURNING *
             )
             {}",
            select_from("inserted")
        );
        Ok(sqlx::query_as::<_, Card>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.first_edition)
            .bind(&input.serial_code)
            .bind(input.card_type)
            .bind(input.attack)
            .bind(input.defense)
            .bind(input.star)
            .bind(&input.amount)
            .bind(input.subtype_id)
            .bind(input.image_id)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn find_or_fail(&self, id: DbId) -> Result<Card, RepoError> {
        let query = format!(
            "{} WHERE c.id = $1 AND c.deleted_at IS NULL",
            select_from("cards")
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound { entity: "Card", id })
    }

    async fn update(&self, input: &UpdateCard, id: DbId) -> Result<Card, RepoError> {
        let query = format!(
            "WITH updated AS (
                UPDATE cards SET
                    name = COALESCE($2, name),
                    description = COALESCE($3, description),
                    first_edition = COALESCE($4, first_edition),
                    serial_code = COALESCE($5, serial_code),
                    card_type = COALESCE($6, card_type),
                    attack = COALESCE($7, attack),
                    defense = COALESCE($8, defense),
                    star = COALESCE($9, star),
                    amount = COALESCE($10::numeric, amount),
                    subtype_id = COALESCE($11, subtype_id),
                    image_id = COALESCE($12, image_id)
                WHERE id = $1 AND deleted_at IS NULL
                RETURNING *
             )
             {}",
            select_from("updated")
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.first_edition)
            .bind(&input.serial_code)
            .bind(input.card_type)
            .bind(input.attack)
            .bind(input.defense)
            .bind(input.star)
            .bind(&input.amount)
            .bind(input.subtype_id)
            .bind(input.image_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound { entity: "Card", id })
    }

    async fn delete(&self, id: DbId) -> Result<u64, RepoError> {
        let result =
            sqlx::query("UPDATE cards SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }
}
