//! Window creation and background mounting.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes, WindowLevel};

use ambient_config::schema::{StartupMode, WindowConfig};
use ambient_renderer::SurfaceOptions;

use crate::lifecycle::{AmbientBackground, MountError};

use super::core::AmbientApp;
use super::host::WinitHost;

// =============================================================================
// WINDOW ATTRIBUTES
// =============================================================================

/// Build the host window attributes from `[window]`.
///
/// The window is always transparent so the cleared surface shows the
/// desktop through. A backdrop window also drops its decorations and
/// sits below every other window.
pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_transparent(true)
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

    let attrs = match config.startup_mode {
        StartupMode::Windowed => attrs,
        StartupMode::Maximized => attrs.with_maximized(true),
        StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
    };

    if config.backdrop {
        attrs
            .with_decorations(false)
            .with_window_level(WindowLevel::AlwaysOnBottom)
    } else {
        attrs
    }
}

// =============================================================================
// INITIALIZATION
// =============================================================================

impl AmbientApp {
    /// Create the host window.
    /// Returns `false` if the window could not be created and the event loop
    /// should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = window_attributes(&self.config.window);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.window = Some(window);
        tracing::info!(
            backdrop = self.config.window.backdrop,
            "Window created"
        );
        true
    }

    /// Mount the background into the current window and start its frame
    /// chain.
    pub(super) fn mount_background(&mut self) -> Result<(), MountError> {
        let window = self.window.clone().ok_or(MountError::NoWindow)?;

        let mut host = WinitHost::new(
            window.clone(),
            SurfaceOptions::from_config(&self.config.rendering),
            self.config.window.backdrop,
            self.listeners.clone(),
            self.surfaces.clone(),
        );
        let background = AmbientBackground::mount(&mut host)?;

        self.background = Some(background);
        window.request_redraw();
        Ok(())
    }

    /// Mount once per window; a failure is logged and not retried.
    pub(super) fn ensure_mounted(&mut self) {
        if self.background.is_some() || self.mount_failed {
            return;
        }
        if let Err(e) = self.mount_background() {
            tracing::warn!("Background unavailable, window will stay empty: {e}");
            self.mount_failed = true;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn default_window_is_transparent_and_decorated() {
        let attrs = window_attributes(&WindowConfig::default());
        assert_eq!(attrs.title, "Ambient");
        assert!(attrs.transparent);
        assert!(attrs.decorations);
        assert!(!attrs.maximized);
        assert!(attrs.fullscreen.is_none());
        assert_eq!(attrs.window_level, WindowLevel::Normal);
        assert!(matches!(
            attrs.inner_size,
            Some(Size::Logical(size)) if size.width == 1280.0 && size.height == 800.0
        ));
    }

    #[test]
    fn startup_modes_map_to_attributes() {
        let maximized = window_attributes(&WindowConfig {
            startup_mode: StartupMode::Maximized,
            ..Default::default()
        });
        assert!(maximized.maximized);

        let fullscreen = window_attributes(&WindowConfig {
            startup_mode: StartupMode::Fullscreen,
            ..Default::default()
        });
        assert!(matches!(
            fullscreen.fullscreen,
            Some(Fullscreen::Borderless(None))
        ));
    }

    #[test]
    fn backdrop_sits_below_everything_undecorated() {
        let attrs = window_attributes(&WindowConfig {
            backdrop: true,
            ..Default::default()
        });
        assert_eq!(attrs.window_level, WindowLevel::AlwaysOnBottom);
        assert!(!attrs.decorations);
        assert!(attrs.transparent);
    }

    #[test]
    fn mount_without_window_fails_cleanly() {
        let mut app = AmbientApp::new(Default::default());
        assert!(matches!(app.mount_background(), Err(MountError::NoWindow)));
        assert!(app.background.is_none());
        assert!(app.listeners.is_empty());
    }

    #[test]
    fn failed_mount_is_not_retried() {
        let mut app = AmbientApp::new(Default::default());
        app.ensure_mounted();
        assert!(app.mount_failed);
        assert!(app.background.is_none());
        // Second call returns early.
        app.ensure_mounted();
        assert!(app.mount_failed);
    }
}
