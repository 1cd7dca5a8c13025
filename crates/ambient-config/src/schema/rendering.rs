//! GPU surface configuration types.

use serde::{Deserialize, Serialize};

/// Adapter selection preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PowerPreference {
    #[default]
    High,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Present in lockstep with the display refresh.
    pub vsync: bool,
    pub power_preference: PowerPreference,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            vsync: true,
            power_preference: PowerPreference::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_defaults() {
        let config = RenderingConfig::default();
        assert!(config.vsync);
        assert_eq!(config.power_preference, PowerPreference::High);
    }

    #[test]
    fn power_preference_serialization() {
        let json = serde_json::to_string(&PowerPreference::Low).unwrap();
        assert_eq!(json, "\"low\"");
    }
}
