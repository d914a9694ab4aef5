use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ENERCLANG_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}'")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the default path to the configuration file.
    ///
    /// Uses `~/.config/enerclang/config.toml` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("enerclang").join("config.toml")
    }

    /// Loads configuration for this process.
    ///
    /// A file named by `ENERCLANG_CONFIG` is opt-in, so any problem with
    /// it is an error. The default file never stops a compile; see
    /// [`Config::load_or_default`].
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Ok(Self::load_or_default(&Self::config_path())),
        }
    }

    /// Loads `path` if it exists, otherwise the built-in layout.
    ///
    /// A file that cannot be read, parsed or validated is reported with
    /// `warn!` and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                match std::error::Error::source(&e) {
                    Some(cause) => tracing::warn!("{}: {}; using built-in layout", e, cause),
                    None => tracing::warn!("{}; using built-in layout", e),
                }
                Config::default()
            }
        }
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The type-checker plugin action name is not empty
    /// - Every extra rule has a flag-shaped prefix and a carrier token
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plugins.type_checker_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "plugins.type_checker_name must not be empty".to_string(),
            });
        }

        for rule in &self.rules {
            if !rule.prefix.starts_with('-') || rule.prefix.len() < 2 {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Rule prefix '{}' must be a flag prefix such as '-accept-'",
                        rule.prefix
                    ),
                });
            }
            if rule.carrier.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Rule '{}' has an empty carrier", rule.prefix),
                });
            }
        }

        Ok(())
    }
}
