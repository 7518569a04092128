//! # stg-config
//!
//! Layered configuration loading for Stagecraft using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STAGECRAFT_*` prefix, `__` as separator)
//! 2. `PORT` (mapped to `server.port`)
//! 3. Project-level `stagecraft.toml` in the working directory
//! 4. User-level `~/.config/stagecraft/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STAGECRAFT_SERVER__PORT` -> `server.port`,
//! `STAGECRAFT_VALIDATION__DUPLICATE_ATTRIBUTION` ->
//! `validation.duplicate_attribution`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use stg_config::StagecraftConfig;
//!
//! let config = StagecraftConfig::load_with_dotenv().expect("config");
//! println!("content root: {}", config.content.root.display());
//! ```

mod content;
mod error;
mod server;
mod validation;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "stagecraft.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StagecraftConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl StagecraftConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory (if any), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&["PORT"])
                    .map(|_| "server.port".into()),
            )
            .merge(Env::prefixed("STAGECRAFT_").split("__"))
    }

    /// Reject values that would make every scan fail in confusing ways.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.metadata_marker.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "content.metadata_marker".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let descriptor = &self.content.descriptor_file;
        if descriptor.is_empty() || descriptor.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "content.descriptor_file".to_string(),
                reason: "must be a plain file name".to_string(),
            });
        }

        if let Err(error) = globset::Glob::new(&self.content.index_glob) {
            return Err(ConfigError::InvalidValue {
                field: "content.index_glob".to_string(),
                reason: error.to_string(),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stagecraft").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = StagecraftConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3333);
    }

    #[test]
    fn empty_marker_is_rejected() {
        let mut config = StagecraftConfig::default();
        config.content.metadata_marker = "  ".to_string();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("content.metadata_marker"));
    }

    #[test]
    fn nested_descriptor_path_is_rejected() {
        let mut config = StagecraftConfig::default();
        config.content.descriptor_file = "meta/project.json".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn broken_index_glob_is_rejected() {
        let mut config = StagecraftConfig::default();
        config.content.index_glob = "project_[*.html".to_string();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("content.index_glob"));
    }
}
