//! Response types printed by `save-spec`.

use serde::{Deserialize, Serialize};

/// Identifiers generated by one save run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveReceipt {
    pub project_id: i64,
    pub spec_id: i64,
    pub artifact_id: i64,
}
