//! # conductor-config
//!
//! Layered configuration loading for Conductor using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CONDUCTOR_*` prefix, `__` as separator)
//! 2. Project-level `.conductor/config.toml`
//! 3. User-level `~/.config/conductor/config.toml`
//! 4. Built-in defaults
//!
//! The built-in defaults reproduce a plain `save-spec` run: read `pasted.txt`,
//! write to the local `conductor_db.db` file, name the project `Conductor MVP`.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CONDUCTOR_DATABASE__URL` -> `database.url`,
//! `CONDUCTOR_SPEC__FILE` -> `spec.file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use conductor_config::ConductorConfig;
//!
//! let config = ConductorConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.endpoint());
//! ```

mod database;
mod error;
mod spec;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use spec::SpecConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConductorConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub spec: SpecConfig,
}

impl ConductorConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::figment())
    }

    /// Extract and validate a config from an already-built figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if present) before building
    /// the figment, so its values act as environment variables.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_global(Self::global_config_path())
    }

    /// Build the provider chain with an explicit user-global config file
    /// (`None` skips that layer).
    #[must_use]
    pub fn figment_with_global(global_path: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = global_path
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".conductor/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority).
        // Every field is text, so values are merged verbatim: `Env` as a
        // provider would turn `0.1` into a float and `1.0` into `1`.
        for (key, value) in Env::prefixed("CONDUCTOR_").split("__").iter() {
            let key = key.as_str().to_ascii_lowercase();
            figment = figment.merge(Serialized::default(&key, value));
        }
        figment
    }

    /// Reject values that would make the run meaningless.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("spec.file", &self.spec.file),
            ("spec.project_name", &self.spec.project_name),
            ("spec.version", &self.spec.version),
            ("spec.source_model", &self.spec.source_model),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }
        if !self.database.is_remote() && self.database.path.trim().is_empty() {
            return Err(invalid(
                "database.path",
                "must not be empty when database.url is unset",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("conductor").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ConductorConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.database.is_remote());
    }

    #[test]
    fn empty_project_name_is_rejected() {
        let mut config = ConductorConfig::default();
        config.spec.project_name = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "spec.project_name"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn empty_path_allowed_for_remote() {
        let mut config = ConductorConfig::default();
        config.database.path = String::new();
        assert!(config.validate().is_err());

        config.database.url = "http://localhost:55432".into();
        assert!(config.validate().is_ok());
    }
}
