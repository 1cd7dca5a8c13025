//! Where the config lives, and writing the first-run default.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use ambient_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "ambient";
const FILE_NAME: &str = "config.toml";

/// `<os config dir>/ambient/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the documented default to `path`, creating parent directories.
///
/// An existing file is left untouched, so a config written between the
/// failed load and this call is never clobbered.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!("config appeared at {}, keeping it", path.display());
            return Ok(());
        }
        Err(e) => return Err(write_failed(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_failed)?;

    tracing::info!("wrote default config to {}", path.display());
    Ok(())
}
