//! Window configuration validation.

use crate::schema::AmbientConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &AmbientConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}
