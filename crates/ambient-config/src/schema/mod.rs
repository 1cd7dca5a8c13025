//! Configuration schema types for the ambient background host.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! The scene itself (particle count, palette, motion) is fixed and has no
//! config surface; these sections only shape the host window, the GPU
//! surface, and logging.

mod rendering;
mod system;
mod window;

pub use rendering::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AmbientConfig {
    pub window: WindowConfig,
    pub rendering: RenderingConfig,
    pub logging: LoggingConfig,
}
