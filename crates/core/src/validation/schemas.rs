//! Per-operation request schemas.
//!
//! Update schemas reuse the create rules with every field optional.

use super::evaluator::{FieldSpec, Schema};
use super::lookup::Table;
use super::rules::Rule;
use crate::catalog::CARD_TYPES;

pub const CARD_CREATE: Schema = Schema::new(&[
    FieldSpec::new("name", &[Rule::Required, Rule::AlphaSpace]),
    FieldSpec::new("description", &[Rule::Required, Rule::AlphaSpace]),
    FieldSpec::new("first_edition", &[Rule::Required, Rule::Boolean]),
    FieldSpec::new("serial_code", &[Rule::Required, Rule::AlphaNum]),
    FieldSpec::new("type", &[Rule::Required, Rule::In(CARD_TYPES)]),
    FieldSpec::new("attack", &[Rule::Int32]),
    FieldSpec::new("defense", &[Rule::Int32]),
    FieldSpec::new("star", &[Rule::Int32]),
    FieldSpec::new("amount", &[Rule::Required, Rule::Decimal]),
    FieldSpec::new(
        "subtype_id",
        &[Rule::Required, Rule::Integer, Rule::Exists(Table::Subtypes)],
    ),
    FieldSpec::new(
        "image_id",
        &[Rule::Required, Rule::Integer, Rule::Exists(Table::Images)],
    ),
]);

pub const CARD_UPDATE: Schema = CARD_CREATE.partial();

pub const IMAGE_CREATE: Schema = Schema::new(&[
    FieldSpec::new("name", &[Rule::Required, Rule::AlphaSpace]),
    FieldSpec::new("extension", &[Rule::Required, Rule::ImageExtension]),
    FieldSpec::new("file", &[Rule::Required, Rule::Base64]),
]);

pub const IMAGE_UPDATE: Schema = IMAGE_CREATE.partial();

pub const SUBTYPE_CREATE: Schema =
    Schema::new(&[FieldSpec::new("name", &[Rule::Required, Rule::AlphaSpace])]);

pub const SUBTYPE_UPDATE: Schema = SUBTYPE_CREATE.partial();

pub const USER_CREATE: Schema = Schema::new(&[
    FieldSpec::new("name", &[Rule::Required, Rule::AlphaSpace]),
    FieldSpec::new(
        "email",
        &[Rule::Required, Rule::Email, Rule::Unique(Table::Users, "email")],
    ),
    FieldSpec::new("password", &[Rule::Required, Rule::AlphaDash]),
    FieldSpec::new("remember_token", &[Rule::Required, Rule::AlphaSpace]),
]);

pub const TOKEN_ISSUE: Schema = Schema::new(&[
    FieldSpec::new(
        "user_id",
        &[Rule::Required, Rule::Integer, Rule::Exists(Table::Users)],
    ),
    FieldSpec::new("token_name", &[Rule::Required, Rule::AlphaSpace]),
]);
