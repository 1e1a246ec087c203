//! Project repository.

use conductor_core::entities::Project;

use crate::ConductorDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, returned_id};

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl ConductorDb {
    /// Insert a project and return its database-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn insert_project(&self, name: &str) -> Result<i64, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "INSERT INTO projects (name) VALUES (?1) RETURNING id",
                [name],
            )
            .await?;
        returned_id(rows).await
    }

    pub async fn get_project(&self, id: i64) -> Result<Option<Project>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, name, created_at FROM projects WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_project(&row)?)),
            None => Ok(None),
        }
    }
}
