//! Ambient background host configuration.
//!
//! TOML-based configuration for the host window, GPU surface, and logging.
//! All sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ambient_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("vsync: {}", config.rendering.vsync);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::AmbientConfig;

use std::path::Path;

use ambient_common::ConfigError;

/// Load `config.toml` from the OS config directory, creating a default
/// if none exists.
pub fn load_config() -> Result<AmbientConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<AmbientConfig, ConfigError> {
    toml_loader::load_from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[rendering]\nvsync = false\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert!(!config.rendering.vsync);
    }
}
