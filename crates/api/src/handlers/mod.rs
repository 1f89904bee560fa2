//! Controllers: validate, call one repository operation, serialize.
//!
//! Validation failures become 400, missing records 404, anything else 500
//! (see [`crate::error::AppError`]).

pub mod auth;
pub mod card;
pub mod image;
pub mod subtype;
pub mod user;
