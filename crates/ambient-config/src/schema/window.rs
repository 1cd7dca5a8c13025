//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Host window settings.
///
/// In backdrop mode the window sits below every other window and lets
/// clicks fall through to whatever is underneath it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 320-7680).
    pub width: u32,
    /// Initial logical height (valid range: 240-4320).
    pub height: u32,
    pub startup_mode: StartupMode,
    pub backdrop: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ambient".into(),
            width: 1280,
            height: 800,
            startup_mode: StartupMode::Windowed,
            backdrop: false,
        }
    }
}
