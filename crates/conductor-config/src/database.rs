//! Database endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default local database file.
fn default_path() -> String {
    "conductor_db.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Local database file, or `":memory:"`. Used when `url` is empty.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote libSQL server URL (e.g., `http://localhost:55432`).
    #[serde(default)]
    pub url: String,

    /// Auth token presented to the remote server.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the endpoint is a remote server rather than a local file.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty()
    }

    /// Endpoint description safe for logs (never includes the token).
    #[must_use]
    pub fn endpoint(&self) -> &str {
        if self.is_remote() { &self.url } else { &self.path }
    }
}
