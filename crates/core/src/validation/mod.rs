//! Request validation.
//!
//! Pure field validators, the rule vocabulary, declarative per-operation
//! schemas, and an evaluator that aggregates every field failure into one
//! [`FieldErrors`] map. Existence and uniqueness rules are answered through
//! the [`RecordLookup`] capability so this module stays database-free.

pub mod evaluator;
pub mod lookup;
pub mod rules;
pub mod schemas;
pub mod validators;

pub use evaluator::{FieldSpec, Schema};
pub use lookup::{RecordLookup, Table};
pub use rules::{FieldErrors, Rule};
