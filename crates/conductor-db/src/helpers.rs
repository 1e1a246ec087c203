//! Row-to-entity parsing helpers.
//!
//! `SQLite`'s `datetime('now')` default produces `"2026-02-09 14:30:00"`, while
//! rows written by other tools may carry RFC 3339. Both are accepted.

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all conductor-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read the `id` returned by an `INSERT ... RETURNING id` statement.
///
/// Only the first row is read. `rows` drops when this returns, which
/// finalizes the statement and completes its autocommit before the caller
/// issues the next one.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the statement produced no row.
pub async fn returned_id(mut rows: libsql::Rows) -> Result<i64, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;
    use conductor_core::enums::{ArtifactType, SpecStatus};

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn parses_rfc3339() {
        let dt = parse_datetime("2026-02-09T14:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn parses_stored_enums() {
        assert_eq!(parse_enum::<SpecStatus>("draft").unwrap(), SpecStatus::Draft);
        assert_eq!(
            parse_enum::<ArtifactType>("architecture_spec").unwrap(),
            ArtifactType::ArchitectureSpec
        );
        assert!(parse_enum::<SpecStatus>("published").is_err());
    }
}
