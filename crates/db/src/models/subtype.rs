//! Subtype entity model and DTOs.

use cardvault_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A subtype row from the `subtypes` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Subtype {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new subtype.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubtype {
    pub name: String,
}

/// DTO for updating an existing subtype. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubtype {
    pub name: Option<String>,
}
