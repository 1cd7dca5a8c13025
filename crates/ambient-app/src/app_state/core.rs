//! AmbientApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use ambient_config::schema::AmbientConfig;

use crate::lifecycle::{AmbientBackground, AttachCounter, ListenerRegistry, RenderSurface};

use super::host::WinitSurface;

/// Top-level application state.
///
/// Generic over the surface so event routing can run against an
/// in-memory host; the event loop drives the winit one.
pub struct AmbientApp<S: RenderSurface = WinitSurface> {
    pub(super) config: AmbientConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Host-side bookkeeping shared with every mount
    pub(super) listeners: ListenerRegistry,
    pub(super) surfaces: AttachCounter,

    // The mounted background, if any
    pub(super) background: Option<AmbientBackground<S>>,

    // Set when mounting failed; the window stays up and draws nothing
    pub(super) mount_failed: bool,
}

impl AmbientApp {
    pub fn new(config: AmbientConfig) -> Self {
        Self::with_config(config)
    }
}

impl<S: RenderSurface> AmbientApp<S> {
    /// No window yet and nothing mounted.
    pub(super) fn with_config(config: AmbientConfig) -> Self {
        Self {
            config,
            window: None,
            listeners: ListenerRegistry::new(),
            surfaces: AttachCounter::new(),
            background: None,
            mount_failed: false,
        }
    }
}
