//! Entity rows and request DTOs, one module per table.

pub mod card;
pub mod image;
pub mod subtype;
pub mod user;
