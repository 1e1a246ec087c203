//! Artifact repository.

use conductor_core::entities::Artifact;
use conductor_core::enums::ArtifactType;

use crate::ConductorDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum, returned_id};

fn row_to_artifact(row: &libsql::Row) -> Result<Artifact, DatabaseError> {
    Ok(Artifact {
        id: row.get::<i64>(0)?,
        project_id: row.get::<i64>(1)?,
        spec_id: row.get::<i64>(2)?,
        artifact_type: parse_enum(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl ConductorDb {
    /// Insert an artifact linked to a project and spec, returning its id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn insert_artifact(
        &self,
        project_id: i64,
        spec_id: i64,
        artifact_type: ArtifactType,
    ) -> Result<i64, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "INSERT INTO artifacts (project_id, spec_id, type)
                 VALUES (?1, ?2, ?3)
                 RETURNING id",
                libsql::params![project_id, spec_id, artifact_type.as_str()],
            )
            .await?;
        returned_id(rows).await
    }

    pub async fn get_artifact(&self, id: i64) -> Result<Option<Artifact>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, project_id, spec_id, type, created_at FROM artifacts WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_artifact(&row)?)),
            None => Ok(None),
        }
    }
}
