//! Configuration validation.
//!
//! Each section has its own check; errors are collected into a single
//! `ConfigError`.

mod helpers;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::AmbientConfig;
use ambient_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AmbientConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
