//! Database error types for conductor-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The endpoint could not be opened, reached, or authenticated against.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Schema bootstrap failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error (constraint violations, missing tables, ...).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// Whether the failure happened before any statement could run.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
