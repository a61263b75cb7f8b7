//! UI configuration
//!
//! The TOML file is compiled into the bundle; build-time environment
//! variables take precedence over it.

use reelbase::config::{Config, ConfigError, ConfigOverrides};

const EMBEDDED_CONFIG: &str = include_str!("../reelbase.toml");

/// Load the embedded configuration with build-time overrides applied
///
/// Falls back to defaults if the embedded file does not parse; the error is
/// handed back so it can be logged once logging is up.
pub fn load_config() -> (Config, Option<ConfigError>) {
    let (mut config, error) = match Config::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    config.apply_overrides(build_overrides());
    (config, error)
}

fn build_overrides() -> ConfigOverrides {
    ConfigOverrides {
        base_url: option_env!("REELBASE_API_URL").map(str::to_string),
        log_level: option_env!("REELBASE_LOG_LEVEL").map(str::to_string),
    }
}
