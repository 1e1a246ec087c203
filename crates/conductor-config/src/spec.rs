//! Values written into the project, spec, and artifact rows.

use serde::{Deserialize, Serialize};

fn default_file() -> String {
    "pasted.txt".to_string()
}

fn default_project_name() -> String {
    "Conductor MVP".to_string()
}

fn default_version() -> String {
    "0.1".to_string()
}

fn default_source_model() -> String {
    "Qwen3-Max".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SpecConfig {
    /// Text file whose full content becomes the spec's markdown.
    #[serde(default = "default_file")]
    pub file: String,

    /// Name of the project row created for each run.
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Version label of the spec row.
    #[serde(default = "default_version")]
    pub version: String,

    /// Label of the model that produced the spec.
    #[serde(default = "default_source_model")]
    pub source_model: String,
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            project_name: default_project_name(),
            version: default_version(),
            source_model: default_source_model(),
        }
    }
}
