//! Request body and path extraction.

use axum::extract::{FromRequest, FromRequestParts};
use cardvault_core::types::DbId;
use cardvault_core::validation::{RecordLookup, Schema};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// A JSON object request body, not yet validated.
///
/// Malformed JSON, a missing content type, or a non-object body is rejected
/// as a 400 in the standard error shape.
#[derive(Debug, Deserialize, FromRequest)]
#[serde(transparent)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload(pub Map<String, Value>);

/// The `{id}` path segment. A non-integer id is a 400 in the standard shape.
#[derive(Debug, Clone, Copy, Deserialize, FromRequestParts)]
#[serde(transparent)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Id(pub DbId);

impl Payload {
    /// Run `schema` over the body, then deserialize it into `T`.
    ///
    /// Fields the schema does not name are ignored by the DTOs.
    pub async fn validated<T: DeserializeOwned>(
        self,
        schema: &Schema,
        lookup: &dyn RecordLookup,
    ) -> AppResult<T> {
        schema.validate(&self.0, lookup).await?;
        serde_json::from_value(Value::Object(self.0))
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}
