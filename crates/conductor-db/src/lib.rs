//! # conductor-db
//!
//! libSQL persistence for Conductor.
//!
//! Stores the three linked rows written by a save run: a project, a spec
//! holding the document's markdown, and an `architecture_spec` artifact that
//! references both. The connection stays in autocommit mode, so every INSERT
//! is committed on its own and no statement is ever wrapped in a transaction.
//!
//! Works against a local database file or a remote libSQL server.

pub mod error;
pub mod helpers;
mod migrations;
pub mod pipeline;
pub mod repos;

use conductor_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

/// Tables owned by this crate, in foreign-key dependency order.
pub const TABLES: [&str; 3] = ["projects", "specs", "artifacts"];

/// Central database handle for Conductor persistence.
///
/// Wraps a libSQL database and a single connection used serially.
pub struct ConductorDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ConductorDb {
    /// Open the endpoint described by `config`: a remote server when
    /// `config.url` is set, otherwise the local file at `config.path`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Connection` if the endpoint cannot be opened or
    /// reached, or `DatabaseError::Migration` if schema bootstrap fails.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.path).await
        }
    }

    /// Open a local database file, or `":memory:"` for tests.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Connection(format!("{path}: {e}")))?;
        Self::connect(db, path).await
    }

    /// Open a remote libSQL server (e.g., `sqld` listening on host and port).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Connection` if the server is unreachable or
    /// rejects `auth_token`.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await
            .map_err(|e| DatabaseError::Connection(format!("{url}: {e}")))?;
        Self::connect(db, url).await
    }

    async fn connect(db: libsql::Database, endpoint: &str) -> Result<Self, DatabaseError> {
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Connection(format!("{endpoint}: {e}")))?;

        // Remote connections are lazy; the first round-trip surfaces
        // unreachable hosts and rejected credentials.
        conn.query("SELECT 1", ())
            .await
            .map_err(|e| DatabaseError::Connection(format!("{endpoint}: {e}")))?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Connection(format!("PRAGMA foreign_keys: {e}")))?;

        let conductor_db = Self { db, conn };
        conductor_db.run_migrations().await?;
        tracing::debug!(endpoint, "database opened");
        Ok(conductor_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether each statement commits on its own (no open transaction).
    #[must_use]
    pub fn is_autocommit(&self) -> bool {
        self.conn.is_autocommit()
    }

    /// Count the rows of one of the [`TABLES`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` for a table this crate does not own.
    pub async fn count_rows(&self, table: &str) -> Result<i64, DatabaseError> {
        if !TABLES.iter().any(|known| *known == table) {
            return Err(DatabaseError::Query(format!("unknown table '{table}'")));
        }
        let mut rows = self
            .conn
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> ConductorDb {
        ConductorDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in &TABLES {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[rstest]
    #[case("projects")]
    #[case("specs")]
    #[case("artifacts")]
    #[tokio::test]
    async fn fresh_tables_are_empty(#[case] table: &str) {
        let db = test_db().await;
        assert_eq!(db.count_rows(table).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again — should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn existing_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conductor.db");
        let path = path.to_str().unwrap();

        let db = ConductorDb::open_local(path).await.unwrap();
        db.insert_project("Conductor MVP").await.unwrap();
        drop(db);

        let db = ConductorDb::open_local(path).await.unwrap();
        assert_eq!(db.count_rows("projects").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn connection_is_autocommit() {
        let db = test_db().await;
        assert!(db.is_autocommit());
    }

    #[tokio::test]
    async fn unopenable_path_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("nested").join("conductor.db");

        let err = ConductorDb::open_local(path.to_str().unwrap())
            .await
            .err()
            .expect("opening inside a missing directory should fail");
        assert!(err.is_connection(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn refused_remote_is_connection_error() {
        let err = ConductorDb::open_remote("http://127.0.0.1:9", "")
            .await
            .err()
            .expect("nothing listens on the discard port");
        assert!(err.is_connection(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn foreign_keys_enforced() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO specs (project_id, version, source_model, content_markdown) VALUES (999, '0.1', 'm', 'x')",
                (),
            )
            .await;
        assert!(result.is_err(), "spec with unknown project should be rejected");
    }

    #[tokio::test]
    async fn count_rows_rejects_unknown_table() {
        let db = test_db().await;
        assert!(matches!(
            db.count_rows("sqlite_master").await,
            Err(DatabaseError::Query(_))
        ));
        assert_eq!(db.count_rows("artifacts").await.unwrap(), 0);
    }
}
