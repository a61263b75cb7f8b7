//! Configuration System
//!
//! Client configuration read from TOML with explicit overrides on top.
//! In the browser build the TOML file is embedded at compile time and the
//! overrides come from build-time environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default records API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Records API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive: trace, debug, info, warn, error, or a full
    /// `target=level` list
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            error: e.to_string(),
        })
    }

    /// Apply overrides; blank values are ignored
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(level) = overrides.log_level.filter(|l| !l.trim().is_empty()) {
            self.logging.level = level;
        }
    }

    /// Base URL with any trailing slash removed
    pub fn api_base(&self) -> String {
        self.api.base_url.trim_end_matches('/').to_string()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {path:?}: {error}")]
    Parse {
        path: Option<PathBuf>,
        error: String,
    },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Reelbase Configuration
#
# Build-time environment variables override these settings:
# - REELBASE_API_URL
# - REELBASE_LOG_LEVEL

[api]
# Records API base URL
base_url = "{}"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#,
        DEFAULT_API_BASE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str("[api]\nbase_url = \"https://films.example/api/\"\n")
            .unwrap();
        assert_eq!(config.api.base_url, "https://films.example/api/");
        assert_eq!(config.api_base(), "https://films.example/api");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_round_trips() {
        let config = Config::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(ConfigOverrides {
            base_url: Some("http://records:9000".to_string()),
            log_level: Some("  ".to_string()),
        });
        assert_eq!(config.api.base_url, "http://records:9000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/reelbase.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
