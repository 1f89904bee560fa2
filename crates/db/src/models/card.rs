//! Card entity model and DTOs.
//!
//! Card reads join the owning subtype and image so callers get the nested
//! entities in one row. A relation that has been soft-deleted reads as `None`.

use cardvault_core::types::{DbId, Timestamp};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::image::Image;
use crate::models::subtype::Subtype;

/// Card categories, backed by the `card_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "card_type")]
pub enum CardType {
    Monster,
    Magic,
    Trap,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Monster => "Monster",
            CardType::Magic => "Magic",
            CardType::Trap => "Trap",
        }
    }
}

/// A card row from the `cards` table with its relations resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub first_edition: bool,
    pub serial_code: String,
    pub card_type: CardType,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub star: Option<i32>,
    /// Two-decimal text rendering of the `NUMERIC(8, 2)` column.
    pub amount: String,
    pub subtype_id: DbId,
    pub image_id: DbId,
    pub subtype: Option<Subtype>,
    pub image: Option<Image>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for Card {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let subtype_id: DbId = row.try_get("subtype_id")?;
        let image_id: DbId = row.try_get("image_id")?;

        let subtype = match row.try_get::<Option<String>, _>("subtype_name")? {
            Some(name) => Some(Subtype {
                id: subtype_id,
                name,
                created_at: row.try_get("subtype_created_at")?,
                updated_at: row.try_get("subtype_updated_at")?,
            }),
            None => None,
        };

        let image = match row.try_get::<Option<String>, _>("image_name")? {
            Some(name) => Some(Image {
                id: image_id,
                name,
                extension: row.try_get("image_extension")?,
                file: row.try_get("image_file")?,
                created_at: row.try_get("image_created_at")?,
                updated_at: row.try_get("image_updated_at")?,
            }),
            None => None,
        };

        Ok(Card {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            first_edition: row.try_get("first_edition")?,
            serial_code: row.try_get("serial_code")?,
            card_type: row.try_get("card_type")?,
            attack: row.try_get("attack")?,
            defense: row.try_get("defense")?,
            star: row.try_get("star")?,
            amount: row.try_get("amount")?,
            subtype_id,
            image_id,
            subtype,
            image,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// DTO for creating a new card.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCard {
    pub name: String,
    pub description: String,
    pub first_edition: bool,
    pub serial_code: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub star: Option<i32>,
    #[serde(deserialize_with = "amount_text")]
    pub amount: String,
    pub subtype_id: DbId,
    pub image_id: DbId,
}

/// DTO for updating an existing card. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCard {
    pub name: Option<String>,
    pub description: Option<String>,
    pub first_edition: Option<bool>,
    pub serial_code: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<CardType>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub star: Option<i32>,
    #[serde(default, deserialize_with = "optional_amount_text")]
    pub amount: Option<String>,
    pub subtype_id: Option<DbId>,
    pub image_id: Option<DbId>,
}

/// Accept an amount sent either as a JSON string or a JSON number.
fn amount_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("invalid amount: {other}"))),
    }
}

fn optional_amount_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("invalid amount: {other}"))),
    }
}
