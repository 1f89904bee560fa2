//! In-memory implementation of every repository trait.
//!
//! Mirrors the PostgreSQL semantics that callers can observe: per-table id
//! sequences, soft delete, foreign-key and unique-email checks against all
//! rows (deleted or not), two-decimal amounts, and relations that read as
//! `None` once soft-deleted. Used by HTTP tests that run without a database.

use std::sync::Arc;

use async_trait::async_trait;
use cardvault_core::catalog::{normalize_amount, AMOUNT_MAX_WHOLE_DIGITS};
use cardvault_core::error::CoreError;
use cardvault_core::types::{DbId, Timestamp};
use cardvault_core::validation::{RecordLookup, Table};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::RepoError;
use crate::models::card::{Card, CreateCard, UpdateCard};
use crate::models::image::{CreateImage, Image, UpdateImage};
use crate::models::subtype::{CreateSubtype, Subtype, UpdateSubtype};
use crate::models::user::{CreateUser, User};
use crate::repositories::{
    CardRepository, HealthCheck, ImageRepository, Repositories, SubtypeRepository,
    UserRepository,
};

trait Keyed {
    fn id(&self) -> DbId;
}

impl Keyed for Card {
    fn id(&self) -> DbId {
        self.id
    }
}

impl Keyed for Image {
    fn id(&self) -> DbId {
        self.id
    }
}

impl Keyed for Subtype {
    fn id(&self) -> DbId {
        self.id
    }
}

impl Keyed for User {
    fn id(&self) -> DbId {
        self.id
    }
}

/// One table: rows in insertion order, each with its `deleted_at`.
#[derive(Debug)]
struct Rows<T> {
    next_id: DbId,
    rows: Vec<(T, Option<Timestamp>)>,
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T: Keyed> Rows<T> {
    fn allocate_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn live(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows
            .iter()
            .filter(|(_, deleted_at)| deleted_at.is_none())
            .map(|(row, _)| row)
    }

    fn find(&self, id: DbId) -> Option<&T> {
        self.live().find(|row| row.id() == id)
    }

    fn find_mut(&mut self, id: DbId) -> Option<&mut T> {
        self.rows
            .iter_mut()
            .find(|(row, deleted_at)| deleted_at.is_none() && row.id() == id)
            .map(|(row, _)| row)
    }

    /// Whether the id was ever allocated, ignoring soft deletes (FK semantics).
    fn has_row(&self, id: DbId) -> bool {
        self.rows.iter().any(|(row, _)| row.id() == id)
    }

    fn insert(&mut self, row: T) {
        self.rows.push((row, None));
    }

    fn soft_delete(&mut self, id: DbId, now: Timestamp) -> u64 {
        match self
            .rows
            .iter_mut()
            .find(|(row, deleted_at)| deleted_at.is_none() && row.id() == id)
        {
            Some((_, deleted_at)) => {
                *deleted_at = Some(now);
                1
            }
            None => 0,
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    cards: Rows<Card>,
    images: Rows<Image>,
    subtypes: Rows<Subtype>,
    users: Rows<User>,
}

impl Tables {
    /// Attach the live subtype and image to a stored card.
    fn hydrate(&self, card: &Card) -> Card {
        Card {
            subtype: self.subtypes.find(card.subtype_id).cloned(),
            image: self.images.find(card.image_id).cloned(),
            ..card.clone()
        }
    }

    fn check_subtype(&self, id: DbId) -> Result<(), RepoError> {
        if self.subtypes.has_row(id) {
            Ok(())
        } else {
            Err(RepoError::Constraint(format!(
                "subtype {id} is not present (fk_cards_subtype_id)"
            )))
        }
    }

    fn check_image(&self, id: DbId) -> Result<(), RepoError> {
        if self.images.has_row(id) {
            Ok(())
        } else {
            Err(RepoError::Constraint(format!(
                "image {id} is not present (fk_cards_image_id)"
            )))
        }
    }
}

/// Render an amount the way `NUMERIC(8, 2)` would store it.
fn stored_amount(raw: &str) -> Result<String, RepoError> {
    let amount = normalize_amount(raw).ok_or_else(|| {
        RepoError::Constraint(format!("invalid input syntax for type numeric: \"{raw}\""))
    })?;
    let whole_digits = amount.split('.').next().map_or(0, str::len);
    if whole_digits > AMOUNT_MAX_WHOLE_DIGITS {
        return Err(RepoError::Constraint("numeric field overflow".into()));
    }
    Ok(amount)
}

/// Shared in-memory tables. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trait-object handles that all read and write this store.
    pub fn repositories(&self) -> Repositories {
        let store = Arc::new(self.clone());
        Repositories {
            cards: store.clone(),
            images: store.clone(),
            subtypes: store.clone(),
            users: store.clone(),
            lookup: store.clone(),
            health: store,
        }
    }
}

impl Repositories {
    /// Repositories over a fresh, empty [`MemoryStore`].
    pub fn in_memory() -> Self {
        MemoryStore::new().repositories()
    }
}

#[async_trait]
impl CardRepository for MemoryStore {
    async fn all(&self) -> Result<Vec<Card>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.cards.live().map(|c| tables.hydrate(c)).collect())
    }

    async fn create(&self, input: &CreateCard) -> Result<Card, RepoError> {
        let mut tables = self.tables.lock().await;
        tables.check_subtype(input.subtype_id)?;
        tables.check_image(input.image_id)?;
        let amount = stored_amount(&input.amount)?;

        let now = Utc::now();
        let card = Card {
            id: tables.cards.allocate_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            first_edition: input.first_edition,
            serial_code: input.serial_code.clone(),
            card_type: input.card_type,
            attack: input.attack,
            defense: input.defense,
            star: input.star,
            amount,
            subtype_id: input.subtype_id,
            image_id: input.image_id,
            subtype: None,
            image: None,
            created_at: now,
            updated_at: now,
        };
        tables.cards.insert(card.clone());
        Ok(tables.hydrate(&card))
    }

    async fn find_or_fail(&self, id: DbId) -> Result<Card, RepoError> {
        let tables = self.tables.lock().await;
        tables
            .cards
            .find(id)
            .map(|c| tables.hydrate(c))
            .ok_or(RepoError::NotFound { entity: "Card", id })
    }

    async fn update(&self, input: &UpdateCard, id: DbId) -> Result<Card, RepoError> {
        let mut tables = self.tables.lock().await;
        if tables.cards.find(id).is_none() {
            return Err(RepoError::NotFound { entity: "Card", id });
        }
        if let Some(subtype_id) = input.subtype_id {
            tables.check_subtype(subtype_id)?;
        }
        if let Some(image_id) = input.image_id {
            tables.check_image(image_id)?;
        }
        let amount = input.amount.as_deref().map(stored_amount).transpose()?;

        let Some(card) = tables.cards.find_mut(id) else {
            return Err(RepoError::NotFound { entity: "Card", id });
        };
        if let Some(name) = &input.name {
            card.name = name.clone();
        }
        if let Some(description) = &input.description {
            card.description = description.clone();
        }
        if let Some(first_edition) = input.first_edition {
            card.first_edition = first_edition;
        }
        if let Some(serial_code) = &input.serial_code {
            card.serial_code = serial_code.clone();
        }
        if let Some(card_type) = input.card_type {
            card.card_type = card_type;
        }
        card.attack = input.attack.or(card.attack);
        card.defense = input.defense.or(card.defense);
        card.star = input.star.or(card.star);
        if let Some(amount) = amount {
            card.amount = amount;
        }
        if let Some(subtype_id) = input.subtype_id {
            card.subtype_id = subtype_id;
        }
        if let Some(image_id) = input.image_id {
            card.image_id = image_id;
        }
        card.updated_at = Utc::now();

        let card = card.clone();
        Ok(tables.hydrate(&card))
    }

    async fn delete(&self, id: DbId) -> Result<u64, RepoError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.cards.soft_delete(id, Utc::now()))
    }
}

#[async_trait]
impl ImageRepository for MemoryStore {
    async fn all(&self) -> Result<Vec<Image>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.images.live().cloned().collect())
    }

    async fn create(&self, input: &CreateImage) -> Result<Image, RepoError> {
        let mut tables = self.tables.lock().await;
        let now = Utc::now();
        let image = Image {
            id: tables.images.allocate_id(),
            name: input.name.clone(),
            extension: input.extension,
            file: input.file.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.images.insert(image.clone());
        Ok(image)
    }

    async fn find_or_fail(&self, id: DbId) -> Result<Image, RepoError> {
        let tables = self.tables.lock().await;
        tables
            .images
            .find(id)
            .cloned()
            .ok_or(RepoError::NotFound { entity: "Image", id })
    }

    async fn update(&self, input: &UpdateImage, id: DbId) -> Result<Image, RepoError> {
        let mut tables = self.tables.lock().await;
        let image = tables
            .images
            .find_mut(id)
            .ok_or(RepoError::NotFound { entity: "Image", id })?;
        if let Some(name) = &input.name {
            image.name = name.clone();
        }
        if let Some(extension) = input.extension {
            image.extension = extension;
        }
        if let Some(file) = &input.file {
            image.file = file.clone();
        }
        image.updated_at = Utc::now();
        Ok(image.clone())
    }

    async fn delete(&self, id: DbId) -> Result<u64, RepoError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.images.soft_delete(id, Utc::now()))
    }
}

#[async_trait]
impl SubtypeRepository for MemoryStore {
    async fn all(&self) -> Result<Vec<Subtype>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.subtypes.live().cloned().collect())
    }

    async fn create(&self, input: &CreateSubtype) -> Result<Subtype, RepoError> {
        let mut tables = self.tables.lock().await;
        let now = Utc::now();
        let subtype = Subtype {
            id: tables.subtypes.allocate_id(),
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.subtypes.insert(subtype.clone());
        Ok(subtype)
    }

    async fn find_or_fail(&self, id: DbId) -> Result<Subtype, RepoError> {
        let tables = self.tables.lock().await;
        tables.subtypes.find(id).cloned().ok_or(RepoError::NotFound {
            entity: "Subtype",
            id,
        })
    }

    async fn update(&self, input: &UpdateSubtype, id: DbId) -> Result<Subtype, RepoError> {
        let mut tables = self.tables.lock().await;
        let subtype = tables.subtypes.find_mut(id).ok_or(RepoError::NotFound {
            entity: "Subtype",
            id,
        })?;
        if let Some(name) = &input.name {
            subtype.name = name.clone();
        }
        subtype.updated_at = Utc::now();
        Ok(subtype.clone())
    }

    async fn delete(&self, id: DbId) -> Result<u64, RepoError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.subtypes.soft_delete(id, Utc::now()))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn all(&self) -> Result<Vec<User>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.live().cloned().collect())
    }

    async fn create(&self, input: &CreateUser) -> Result<User, RepoError> {
        let mut tables = self.tables.lock().await;
        if tables.users.rows.iter().any(|(u, _)| u.email == input.email) {
            return Err(RepoError::Constraint(
                "duplicate key value violates unique constraint (uq_users_email)".into(),
            ));
        }
        let now = Utc::now();
        let user = User {
            id: tables.users.allocate_id(),
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            remember_token: input.remember_token.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.clone());
        Ok(user)
    }

    async fn find_or_fail(&self, id: DbId) -> Result<User, RepoError> {
        let tables = self.tables.lock().await;
        tables
            .users
            .find(id)
            .cloned()
            .ok_or(RepoError::NotFound { entity: "User", id })
    }
}

#[async_trait]
impl RecordLookup for MemoryStore {
    async fn exists(&self, table: Table, id: DbId) -> Result<bool, CoreError> {
        let tables = self.tables.lock().await;
        Ok(match table {
            Table::Cards => tables.cards.find(id).is_some(),
            Table::Images => tables.images.find(id).is_some(),
            Table::Subtypes => tables.subtypes.find(id).is_some(),
            Table::Users => tables.users.find(id).is_some(),
        })
    }

    async fn is_taken(
        &self,
        table: Table,
        column: &'static str,
        value: &str,
    ) -> Result<bool, CoreError> {
        let tables = self.tables.lock().await;
        match (table, column) {
            (Table::Users, "email") => Ok(tables.users.rows.iter().any(|(u, _)| u.email == value)),
            _ => Err(CoreError::Internal(format!(
                "unsupported lookup column {}.{column}",
                table.as_str()
            ))),
        }
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
