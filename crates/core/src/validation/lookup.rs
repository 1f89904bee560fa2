//! Cross-entity checks required by [`super::Rule::Exists`] and [`super::Rule::Unique`].

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

/// Tables a rule may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Cards,
    Images,
    Subtypes,
    Users,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Cards => "cards",
            Table::Images => "images",
            Table::Subtypes => "subtypes",
            Table::Users => "users",
        }
    }
}

/// Read-only record probes used while validating a request.
///
/// Implementations report storage failures as [`CoreError::Internal`].
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Whether a non-deleted row with `id` exists in `table`.
    async fn exists(&self, table: Table, id: DbId) -> Result<bool, CoreError>;

    /// Whether any row in `table` (deleted or not) already holds `value` in `column`.
    async fn is_taken(
        &self,
        table: Table,
        column: &'static str,
        value: &str,
    ) -> Result<bool, CoreError>;
}
