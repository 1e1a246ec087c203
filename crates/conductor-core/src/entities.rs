//! Entity structs for the persisted Conductor rows.
//!
//! Each entity maps to one table in the database. Identifiers are assigned by
//! the database on insert and are never chosen by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ArtifactType, SpecStatus};

/// Top-level grouping record under which specs and artifacts are filed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A versioned textual specification document tied to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Spec {
    pub id: i64,
    pub project_id: i64,
    pub version: String,
    /// Label of the model that produced the document, e.g. `Qwen3-Max`.
    pub source_model: String,
    pub content_markdown: String,
    pub status: SpecStatus,
    pub created_at: DateTime<Utc>,
}

/// A typed output record referencing both a project and a spec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artifact {
    pub id: i64,
    pub project_id: i64,
    pub spec_id: i64,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    pub created_at: DateTime<Utc>,
}
