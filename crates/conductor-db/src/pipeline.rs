//! The save run: read a spec file, then write project, spec, and artifact rows.
//!
//! Steps run strictly in order and stop at the first error:
//! 1. Read the whole file as UTF-8 text
//! 2. Open the database
//! 3. Insert the project
//! 4. Insert the spec (status `draft`) under that project
//! 5. Insert an `architecture_spec` artifact under both
//!
//! Each INSERT autocommits. A failure in step 4 or 5 leaves the rows of the
//! earlier steps committed; nothing is rolled back.

use std::path::{Path, PathBuf};

use conductor_config::{ConductorConfig, DatabaseConfig};
use conductor_core::enums::{ArtifactType, SpecStatus};
use conductor_core::responses::SaveReceipt;
use thiserror::Error;

use crate::ConductorDb;
use crate::error::DatabaseError;
use crate::repos::spec::NewSpec;

/// Errors from a save run.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The input file is missing, unreadable, or not UTF-8.
    #[error("Cannot read spec file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Connection, constraint, or query failure.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// What one save run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub file: PathBuf,
    pub project_name: String,
    pub version: String,
    pub source_model: String,
}

impl SaveRequest {
    /// Build a request from the `[spec]` config section.
    #[must_use]
    pub fn from_config(config: &ConductorConfig) -> Self {
        Self {
            file: PathBuf::from(&config.spec.file),
            project_name: config.spec.project_name.clone(),
            version: config.spec.version.clone(),
            source_model: config.spec.source_model.clone(),
        }
    }
}

/// Read the entire spec file as text, byte for byte.
///
/// # Errors
///
/// Returns `SaveError::FileAccess` if the file cannot be read as UTF-8.
pub fn read_spec_file(path: &Path) -> Result<String, SaveError> {
    std::fs::read_to_string(path).map_err(|source| SaveError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

impl ConductorDb {
    /// Insert the project, spec, and artifact rows for one document.
    ///
    /// # Errors
    ///
    /// Returns the first `DatabaseError`. Rows inserted before it stay committed.
    pub async fn save_spec(
        &self,
        request: &SaveRequest,
        content: &str,
    ) -> Result<SaveReceipt, DatabaseError> {
        let project_id = self.insert_project(&request.project_name).await?;
        tracing::info!(project_id, name = %request.project_name, "project inserted");

        let spec_id = self
            .insert_spec(&NewSpec {
                project_id,
                version: &request.version,
                source_model: &request.source_model,
                content_markdown: content,
                status: SpecStatus::Draft,
            })
            .await?;
        tracing::info!(spec_id, project_id, "spec inserted");

        let artifact_id = self
            .insert_artifact(project_id, spec_id, ArtifactType::ArchitectureSpec)
            .await?;
        tracing::info!(artifact_id, spec_id, project_id, "artifact inserted");

        Ok(SaveReceipt {
            project_id,
            spec_id,
            artifact_id,
        })
    }
}

/// Run a full save: read the file first, then open the database and insert.
///
/// No connection is attempted when the file cannot be read.
///
/// # Errors
///
/// Returns `SaveError::FileAccess` for input problems and
/// `SaveError::Database` for connection or statement failures.
pub async fn run(
    database: &DatabaseConfig,
    request: &SaveRequest,
) -> Result<SaveReceipt, SaveError> {
    let content = read_spec_file(&request.file)?;
    tracing::debug!(path = %request.file.display(), bytes = content.len(), "spec file read");

    let db = ConductorDb::open(database).await?;
    tracing::debug!(endpoint = database.endpoint(), "connected");

    Ok(db.save_spec(request, &content).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_from_default_config() {
        let request = SaveRequest::from_config(&ConductorConfig::default());
        assert_eq!(request.file, PathBuf::from("pasted.txt"));
        assert_eq!(request.project_name, "Conductor MVP");
        assert_eq!(request.version, "0.1");
        assert_eq!(request.source_model, "Qwen3-Max");
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_spec_file(&path).unwrap_err();
        assert!(
            matches!(err, SaveError::FileAccess { path: ref p, .. } if *p == path),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn non_utf8_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        assert!(matches!(
            read_spec_file(&path),
            Err(SaveError::FileAccess { .. })
        ));
    }

    #[tokio::test]
    async fn save_spec_links_rows() {
        let db = ConductorDb::open_local(":memory:").await.unwrap();
        let request = SaveRequest::from_config(&ConductorConfig::default());
        let receipt = db.save_spec(&request, "# Spec\n").await.unwrap();

        let spec = db.get_spec(receipt.spec_id).await.unwrap().unwrap();
        assert_eq!(spec.project_id, receipt.project_id);
        let artifact = db.get_artifact(receipt.artifact_id).await.unwrap().unwrap();
        assert_eq!(artifact.project_id, receipt.project_id);
        assert_eq!(artifact.spec_id, receipt.spec_id);
    }
}
