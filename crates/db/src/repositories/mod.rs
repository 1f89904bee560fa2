//! Repository layer.
//!
//! One capability trait per entity, a PostgreSQL implementation of each
//! (a small struct holding the pool), and the [`Repositories`] bundle of
//! trait objects that handlers receive through application state. Every
//! read excludes soft-deleted rows.

use std::sync::Arc;

use async_trait::async_trait;
use cardvault_core::types::DbId;
use cardvault_core::validation::RecordLookup;

use crate::error::RepoError;
use crate::models::card::{Card, CreateCard, UpdateCard};
use crate::models::image::{CreateImage, Image, UpdateImage};
use crate::models::subtype::{CreateSubtype, Subtype, UpdateSubtype};
use crate::models::user::{CreateUser, User};
use crate::DbPool;

pub mod card_repo;
pub mod image_repo;
pub mod lookup_repo;
pub mod subtype_repo;
pub mod user_repo;

pub use card_repo::CardRepo;
pub use image_repo::ImageRepo;
pub use lookup_repo::LookupRepo;
pub use subtype_repo::SubtypeRepo;
pub use user_repo::UserRepo;

#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Every non-deleted card in insertion order.
    async fn all(&self) -> Result<Vec<Card>, RepoError>;
    async fn create(&self, input: &CreateCard) -> Result<Card, RepoError>;
    /// The card with `id`, or [`RepoError::NotFound`].
    async fn find_or_fail(&self, id: DbId) -> Result<Card, RepoError>;
    /// Apply the supplied fields, or fail with [`RepoError::NotFound`].
    async fn update(&self, input: &UpdateCard, id: DbId) -> Result<Card, RepoError>;
    /// Soft-delete; returns the number of rows affected (0 or 1).
    async fn delete(&self, id: DbId) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<Image>, RepoError>;
    async fn create(&self, input: &CreateImage) -> Result<Image, RepoError>;
    async fn find_or_fail(&self, id: DbId) -> Result<Image, RepoError>;
    async fn update(&self, input: &UpdateImage, id: DbId) -> Result<Image, RepoError>;
    async fn delete(&self, id: DbId) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait SubtypeRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<Subtype>, RepoError>;
    async fn create(&self, input: &CreateSubtype) -> Result<Subtype, RepoError>;
    async fn find_or_fail(&self, id: DbId) -> Result<Subtype, RepoError>;
    async fn update(&self, input: &UpdateSubtype, id: DbId) -> Result<Subtype, RepoError>;
    async fn delete(&self, id: DbId) -> Result<u64, RepoError>;
}

/// Users are created and read only.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<User>, RepoError>;
    async fn create(&self, input: &CreateUser) -> Result<User, RepoError>;
    async fn find_or_fail(&self, id: DbId) -> Result<User, RepoError>;
}

/// Storage liveness probe for the health endpoint.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), RepoError>;
}

/// Trait-object handles for every repository, cheap to clone.
#[derive(Clone)]
pub struct Repositories {
    pub cards: Arc<dyn CardRepository>,
    pub images: Arc<dyn ImageRepository>,
    pub subtypes: Arc<dyn SubtypeRepository>,
    pub users: Arc<dyn UserRepository>,
    pub lookup: Arc<dyn RecordLookup>,
    pub health: Arc<dyn HealthCheck>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: DbPool) -> Self {
        let lookup = Arc::new(LookupRepo::new(pool.clone()));
        Self {
            cards: Arc::new(CardRepo::new(pool.clone())),
            images: Arc::new(ImageRepo::new(pool.clone())),
            subtypes: Arc::new(SubtypeRepo::new(pool.clone())),
            users: Arc::new(UserRepo::new(pool)),
            lookup: lookup.clone(),
            health: lookup,
        }
    }
}
