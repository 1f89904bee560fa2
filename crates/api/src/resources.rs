//! Public JSON shapes for entities.
//!
//! Each resource is a fixed allowlist of fields built from a borrowed model.
//! Foreign keys, timestamps, and credentials never leave the server. Error
//! bodies are rendered by [`crate::error::AppError`].

use cardvault_core::types::DbId;
use cardvault_db::models::card::{Card, CardType};
use cardvault_db::models::image::{Image, ImageExtension};
use cardvault_db::models::subtype::Subtype;
use cardvault_db::models::user::User;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtypeResource {
    pub id: DbId,
    pub name: String,
}

impl From<&Subtype> for SubtypeResource {
    fn from(subtype: &Subtype) -> Self {
        Self {
            id: subtype.id,
            name: subtype.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageResource {
    pub id: DbId,
    pub name: String,
    pub extension: ImageExtension,
    pub file: String,
}

impl From<&Image> for ImageResource {
    fn from(image: &Image) -> Self {
        Self {
            id: image.id,
            name: image.name.clone(),
            extension: image.extension,
            file: image.file.clone(),
        }
    }
}

/// A card with its subtype and image nested. A soft-deleted relation
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardResource {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub first_edition: bool,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub star: Option<i32>,
    pub amount: String,
    pub subtype: Option<SubtypeResource>,
    pub image: Option<ImageResource>,
}

impl From<&Card> for CardResource {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            description: card.description.clone(),
            first_edition: card.first_edition,
            card_type: card.card_type,
            attack: card.attack,
            defense: card.defense,
            star: card.star,
            amount: card.amount.clone(),
            subtype: card.subtype.as_ref().map(SubtypeResource::from),
            image: card.image.as_ref().map(ImageResource::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResource {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResource {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Response to a token request.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResource {
    pub access_token: String,
}

/// Acknowledgment for a destroy request; `count` is the rows affected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteResource {
    pub deleted: bool,
    pub count: u64,
}

impl From<u64> for DeleteResource {
    fn from(count: u64) -> Self {
        Self {
            deleted: count > 0,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn subtype() -> Subtype {
        Subtype {
            id: 1,
            name: "Regular Monster".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn image() -> Image {
        Image {
            id: 2,
            name: "dark magician".into(),
            extension: ImageExtension::Png,
            file: "aGVsbG8=".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn card(subtype: Option<Subtype>, image: Option<Image>) -> Card {
        Card {
            id: 7,
            name: "Dark Magician".into(),
            description: "The ultimate wizard".into(),
            first_edition: true,
            serial_code: "190124914710293".into(),
            card_type: CardType::Monster,
            attack: Some(2500),
            defense: Some(2100),
            star: None,
            amount: "1500.00".into(),
            subtype_id: 1,
            image_id: 2,
            subtype,
            image,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn card_nests_relations_and_hides_internal_fields() {
        let value = serde_json::to_value(CardResource::from(&card(Some(subtype()), Some(image()))))
            .unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Dark Magician",
                "description": "The ultimate wizard",
                "first_edition": true,
                "type": "Monster",
                "attack": 2500,
                "defense": 2100,
                "star": null,
                "amount": "1500.00",
                "subtype": {"id": 1, "name": "Regular Monster"},
                "image": {"id": 2, "name": "dark magician", "extension": "png", "file": "aGVsbG8="}
            })
        );
    }

    #[test]
    fn missing_relation_serializes_as_null() {
        let value = serde_json::to_value(CardResource::from(&card(Some(subtype()), None))).unwrap();
        assert!(value["image"].is_null());
        assert_eq!(value["subtype"]["id"], 1);
    }

    #[test]
    fn user_never_exposes_credentials() {
        let user = User {
            id: 3,
            name: "Yugi Muto".into(),
            email: "yugi@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            remember_token: "heart of the cards".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(UserResource::from(&user)).unwrap();
        assert_eq!(value, json!({"id": 3, "name": "Yugi Muto", "email": "yugi@example.com"}));
    }

    #[test]
    fn delete_acknowledges_count() {
        assert_eq!(DeleteResource::from(1), DeleteResource { deleted: true, count: 1 });
        assert_eq!(DeleteResource::from(0), DeleteResource { deleted: false, count: 0 });
    }
}
