//! Image entity model and DTOs.
//!
//! The file content is kept as the base64 text the client sent.

use cardvault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Allowed image formats, backed by the `image_extension` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "image_extension", rename_all = "lowercase")]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    Png,
}

impl ImageExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::Png => "png",
        }
    }
}

/// An image row from the `images` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Image {
    pub id: DbId,
    pub name: String,
    pub extension: ImageExtension,
    pub file: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new image.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub name: String,
    pub extension: ImageExtension,
    pub file: String,
}

/// DTO for updating an existing image. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateImage {
    pub name: Option<String>,
    pub extension: Option<ImageExtension>,
    pub file: Option<String>,
}
