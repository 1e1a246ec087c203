//! Spec repository.

use conductor_core::entities::Spec;
use conductor_core::enums::SpecStatus;

use crate::ConductorDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum, returned_id};

/// Column values for a spec row. The id and `created_at` come from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpec<'a> {
    pub project_id: i64,
    pub version: &'a str,
    pub source_model: &'a str,
    pub content_markdown: &'a str,
    pub status: SpecStatus,
}

fn row_to_spec(row: &libsql::Row) -> Result<Spec, DatabaseError> {
    Ok(Spec {
        id: row.get::<i64>(0)?,
        project_id: row.get::<i64>(1)?,
        version: row.get::<String>(2)?,
        source_model: row.get::<String>(3)?,
        content_markdown: row.get::<String>(4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl ConductorDb {
    /// Insert a spec and return its database-assigned id.
    ///
    /// The content is bound as-is; no trimming or normalization happens.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails (e.g., unknown project).
    pub async fn insert_spec(&self, spec: &NewSpec<'_>) -> Result<i64, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "INSERT INTO specs (project_id, version, source_model, content_markdown, status)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id",
                libsql::params![
                    spec.project_id,
                    spec.version,
                    spec.source_model,
                    spec.content_markdown,
                    spec.status.as_str()
                ],
            )
            .await?;
        returned_id(rows).await
    }

    pub async fn get_spec(&self, id: i64) -> Result<Option<Spec>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, project_id, version, source_model, content_markdown, status, created_at
                 FROM specs WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_spec(&row)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft(project_id: i64, content: &str) -> NewSpec<'_> {
        NewSpec {
            project_id,
            version: "0.1",
            source_model: "Qwen3-Max",
            content_markdown: content,
            status: SpecStatus::Draft,
        }
    }

    #[tokio::test]
    async fn insert_and_get_spec() {
        let db = ConductorDb::open_local(":memory:").await.unwrap();
        let project_id = db.insert_project("Conductor MVP").await.unwrap();
        let id = db.insert_spec(&draft(project_id, "# Title\n")).await.unwrap();

        let spec = db.get_spec(id).await.unwrap().unwrap();
        assert_eq!(spec.project_id, project_id);
        assert_eq!(spec.version, "0.1");
        assert_eq!(spec.source_model, "Qwen3-Max");
        assert_eq!(spec.content_markdown, "# Title\n");
        assert_eq!(spec.status, SpecStatus::Draft);
    }

    #[tokio::test]
    async fn unknown_project_is_rejected() {
        let db = ConductorDb::open_local(":memory:").await.unwrap();
        let result = db.insert_spec(&draft(7, "body")).await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
        assert_eq!(db.count_rows("specs").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_content_is_stored() {
        let db = ConductorDb::open_local(":memory:").await.unwrap();
        let project_id = db.insert_project("p").await.unwrap();
        let id = db.insert_spec(&draft(project_id, "")).await.unwrap();
        assert_eq!(db.get_spec(id).await.unwrap().unwrap().content_markdown, "");
    }
}
