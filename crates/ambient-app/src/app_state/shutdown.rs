//! Teardown: unmount the background, then drop the window.

use crate::lifecycle::RenderSurface;

use super::core::AmbientApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl<S: RenderSurface> AmbientApp<S> {
    /// Unmount the background if one is mounted.
    pub(super) fn unmount_background(&mut self) {
        if let Some(bg) = self.background.take() {
            bg.unmount();
        }
    }

    /// Release everything in order.
    ///
    /// 1. Unmount the background (cancel frames, drop listeners, detach surface)
    /// 2. Drop the window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");

        self.unmount_background();
        self.window = None;

        tracing::info!(
            listeners = self.listeners.len(),
            surfaces = self.surfaces.count(),
            "Shutdown complete"
        );
    }
}

// =============================================================================
// TESTS
// =============================================================================
