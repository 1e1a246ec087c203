//! Status and type enums for Conductor entities.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the form stored in SQL text columns.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SpecStatus
// ---------------------------------------------------------------------------

/// Review status of a spec document.
///
/// ```text
/// draft → approved → superseded
/// ```
///
/// Newly saved specs always start as `draft`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecStatus {
    #[default]
    Draft,
    Approved,
    Superseded,
}

impl SpecStatus {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Superseded => "superseded",
        }
    }
}

impl fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArtifactType
// ---------------------------------------------------------------------------

/// Kind of output recorded in the `artifacts` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    ArchitectureSpec,
    FeasibilityAnalysis,
    ExecutionPlan,
}

impl ArtifactType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArchitectureSpec => "architecture_spec",
            Self::FeasibilityAnalysis => "feasibility_analysis",
            Self::ExecutionPlan => "execution_plan",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
