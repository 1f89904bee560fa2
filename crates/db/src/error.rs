use cardvault_core::error::CoreError;
use cardvault_core::types::DbId;

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Failure raised by every repository method.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// No non-deleted row with the requested id.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A uniqueness or foreign-key invariant rejected the write.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(code) = db_err.code() {
                if code == UNIQUE_VIOLATION || code == FOREIGN_KEY_VIOLATION {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    return RepoError::Constraint(format!(
                        "{} ({constraint})",
                        db_err.message()
                    ));
                }
            }
        }
        RepoError::Database(err)
    }
}

impl From<RepoError> for CoreError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity, id } => CoreError::NotFound { entity, id },
            other => CoreError::Internal(other.to_string()),
        }
    }
}
