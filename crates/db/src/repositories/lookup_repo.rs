//! Existence and uniqueness probes used by request validation.

use async_trait::async_trait;
use cardvault_core::error::CoreError;
use cardvault_core::types::DbId;
use cardvault_core::validation::{RecordLookup, Table};

use super::HealthCheck;
use crate::error::RepoError;
use crate::DbPool;

/// PostgreSQL-backed [`RecordLookup`] and [`HealthCheck`].
///
/// Table names come from [`Table::as_str`] and columns from the static
/// schema definitions, so interpolating them into SQL is safe.
#[derive(Debug, Clone)]
pub struct LookupRepo {
    pool: DbPool,
}

impl LookupRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordLookup for LookupRepo {
    async fn exists(&self, table: Table, id: DbId) -> Result<bool, CoreError> {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1 AND deleted_at IS NULL)",
            table.as_str()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))
    }

    async fn is_taken(
        &self,
        table: Table,
        column: &'static str,
        value: &str,
    ) -> Result<bool, CoreError> {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE {column} = $1)",
            table.as_str()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))
    }
}

#[async_trait]
impl HealthCheck for LookupRepo {
    async fn ping(&self) -> Result<(), RepoError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
