//! Database-free domain primitives for the card catalog.
//!
//! - [`types`] -- id and timestamp aliases shared by every crate.
//! - [`error`] -- the [`error::CoreError`] taxonomy.
//! - [`catalog`] -- allowed card types, image extensions, amount formatting.
//! - [`validation`] -- field validators and declarative request schemas.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
