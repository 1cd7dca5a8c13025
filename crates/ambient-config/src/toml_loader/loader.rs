//! Core TOML config loading: read from path or platform default.

use crate::schema::AmbientConfig;
use crate::validation;
use ambient_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. A config that parses but fails
/// validation is replaced by defaults, with a warning.
pub fn load_from_path(path: &Path) -> Result<AmbientConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("cannot read {}: {e}", path.display())),
    })?;

    let config: AmbientConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{e}; using defaults instead of {}", path.display());
        return Ok(AmbientConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/ambient/config.toml`
/// On Linux: `~/.config/ambient/config.toml`
///
/// If the file does not exist, writes a documented default and returns defaults.
pub fn load_default() -> Result<AmbientConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(AmbientConfig::default())
        }
        Err(e) => Err(e),
    }
}
