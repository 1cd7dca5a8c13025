//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use ambient_scene::Viewport;

use crate::lifecycle::{FrameOutcome, ListenerKind, RenderSurface};

use super::core::AmbientApp;

impl ApplicationHandler for AmbientApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() && !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }
        self.ensure_mounted();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // The surface cannot outlive a suspend on mobile targets.
        self.unmount_background();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.handle_resize(Viewport::new(size.width, size.height));
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.handle_resize(Viewport::new(size.width, size.height));
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_pointer_move(position.x, position.y);
            }

            WindowEvent::RedrawRequested => {
                self.run_frame();
            }

            _ => {}
        }
    }
}

impl<S: RenderSurface> AmbientApp<S> {
    fn handle_pointer_move(&mut self, x: f64, y: f64) {
        if !self.listeners.is_listening(ListenerKind::PointerMove) {
            return;
        }
        if let Some(bg) = &mut self.background {
            bg.on_pointer_move(x, y);
        }
    }

    fn handle_resize(&mut self, viewport: Viewport) {
        if !self.listeners.is_listening(ListenerKind::Resize) {
            return;
        }
        let scale_factor = self
            .window
            .as_ref()
            .map(|w| w.scale_factor())
            .unwrap_or(1.0);
        if let Some(bg) = &mut self.background {
            bg.on_resize(viewport, scale_factor);
        }
    }

    /// Run one frame and schedule the next, or tear down on `Stop`.
    fn run_frame(&mut self) {
        let Some(bg) = &mut self.background else {
            return;
        };
        if bg.cancellation_token().is_cancelled() {
            return;
        }

        match bg.frame() {
            FrameOutcome::Continue => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            FrameOutcome::Stop => self.unmount_background(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::testing::{FakeHost, FakeSurface};
    use crate::lifecycle::AmbientBackground;
    use ambient_config::schema::AmbientConfig;
    use ambient_renderer::RendererError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// App with a background mounted into a fake host that shares the
    /// app's listener registry and surface counter.
    fn mounted_app() -> (AmbientApp<FakeSurface>, FakeHost) {
        let mut app = AmbientApp::<FakeSurface>::with_config(AmbientConfig::default());
        let mut host = FakeHost::new(800, 600);
        host.listeners = app.listeners.clone();
        host.surfaces = app.surfaces.clone();
        let bg = AmbientBackground::mount_with(&mut host, &mut StdRng::seed_from_u64(4)).unwrap();
        app.background = Some(bg);
        (app, host)
    }

    /// Mounted, but the app's registry never saw the subscriptions.
    fn unsubscribed_app() -> (AmbientApp<FakeSurface>, FakeHost) {
        let mut app = AmbientApp::<FakeSurface>::with_config(AmbientConfig::default());
        let mut host = FakeHost::new(800, 600);
        let bg = AmbientBackground::mount_with(&mut host, &mut StdRng::seed_from_u64(4)).unwrap();
        app.background = Some(bg);
        (app, host)
    }

    fn camera_x(app: &AmbientApp<FakeSurface>) -> f32 {
        app.background.as_ref().unwrap().scene().camera.position[0]
    }

    #[test]
    fn run_frame_draws_and_keeps_running() {
        let (mut app, host) = mounted_app();
        app.run_frame();
        app.run_frame();
        assert_eq!(host.log.borrow().draws, 2);
        assert!(app.background.is_some());
    }

    #[test]
    fn fatal_frame_unmounts_background() {
        let (mut app, host) = mounted_app();
        host.log.borrow_mut().next_error = Some(RendererError::OutOfMemory);

        app.run_frame();

        assert!(app.background.is_none());
        assert!(app.listeners.is_empty());
        assert_eq!(app.surfaces.count(), 0);
    }

    #[test]
    fn recoverable_frame_error_keeps_background() {
        let (mut app, host) = mounted_app();
        host.log.borrow_mut().next_error = Some(RendererError::SurfaceLost);

        app.run_frame();
        assert!(app.background.is_some());
        app.run_frame();
        assert_eq!(host.log.borrow().draws, 1);
    }

    #[test]
    fn pointer_moves_reach_the_camera() {
        let (mut app, _host) = mounted_app();
        // Top-right corner maps to (+1, +1).
        app.handle_pointer_move(800.0, 0.0);
        app.run_frame();
        assert!(camera_x(&app) > 0.0);
    }

    #[test]
    fn pointer_ignored_without_subscription() {
        let (mut app, _host) = unsubscribed_app();
        app.handle_pointer_move(800.0, 0.0);
        app.run_frame();
        assert_eq!(camera_x(&app), 0.0);
    }

    #[test]
    fn pointer_after_unmount_is_dropped() {
        let (mut app, host) = mounted_app();
        app.unmount_background();

        app.handle_pointer_move(800.0, 0.0);
        app.run_frame();

        assert!(app.background.is_none());
        assert!(!app.listeners.is_listening(ListenerKind::PointerMove));
        assert_eq!(host.log.borrow().draws, 0);
    }

    #[test]
    fn resize_reaches_surface_without_window_scale() {
        let (mut app, host) = mounted_app();
        app.handle_resize(Viewport::new(1024, 768));
        assert_eq!(
            host.log.borrow().resizes,
            vec![(Viewport::new(1024, 768), 1.0)]
        );
        let aspect = app.background.as_ref().unwrap().scene().camera.aspect;
        assert!((aspect - 1024.0 / 768.0).abs() < 1e-6);
    }

    #[test]
    fn resize_ignored_without_subscription() {
        let (mut app, host) = unsubscribed_app();
        app.handle_resize(Viewport::new(1024, 768));
        assert!(host.log.borrow().resizes.is_empty());
    }
}
