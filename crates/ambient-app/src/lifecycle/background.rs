use rand::Rng;
use tokio_util::sync::CancellationToken;

use ambient_scene::{advance_frame, FrameClock, InputTracker, Scene, SceneBuilder, Viewport};

use super::host::{Host, MountError, RenderSurface, BACKGROUND_LAYER};
use super::listeners::{ListenerGuard, ListenerKind};

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule the next frame.
    Continue,
    /// Do not schedule again; the background is finished.
    Stop,
}

/// The mounted background.
///
/// Field order is drop order: listeners go before the surface.
pub struct AmbientBackground<S: RenderSurface> {
    scene: Scene,
    input: InputTracker,
    clock: FrameClock,
    viewport: Viewport,
    cancel: CancellationToken,
    listeners: [ListenerGuard; 2],
    surface: S,
}

impl<S: RenderSurface> AmbientBackground<S> {
    /// Mount into `host` with a freshly seeded scene.
    pub fn mount<H>(host: &mut H) -> Result<Self, MountError>
    where
        H: Host<Surface = S>,
    {
        Self::mount_with(host, &mut rand::thread_rng())
    }

    /// Mount into `host`, drawing the scene's randomness from `rng`.
    ///
    /// Nothing is registered if the surface cannot be attached.
    pub fn mount_with<H, R>(host: &mut H, rng: &mut R) -> Result<Self, MountError>
    where
        H: Host<Surface = S>,
        R: Rng + ?Sized,
    {
        let viewport = host.viewport();
        let scene = SceneBuilder::build(viewport, rng);
        let surface = host.attach_surface(&scene, BACKGROUND_LAYER)?;

        let registry = host.listeners();
        let listeners = [
            registry.register(ListenerKind::PointerMove),
            registry.register(ListenerKind::Resize),
        ];

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            "Ambient background mounted"
        );

        Ok(Self {
            scene,
            input: InputTracker::new(),
            clock: FrameClock::new(),
            viewport,
            cancel: CancellationToken::new(),
            listeners,
            surface,
        })
    }

    /// Token that is cancelled once this background stops for good.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    #[cfg(test)]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[cfg(test)]
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|guard| guard.kind() == kind)
    }

    /// Record a pointer position in physical window coordinates.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.input.on_pointer_move(x, y, self.viewport);
    }

    /// Track a new window size. Only the camera aspect and the surface
    /// change; no object transform is touched.
    pub fn on_resize(&mut self, viewport: Viewport, scale_factor: f64) {
        self.viewport = viewport;
        if !self.scene.camera.set_viewport(viewport) {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "zero-sized viewport, keeping aspect"
            );
        }
        self.surface.resize(viewport, scale_factor);
    }

    /// Run one frame at the current clock time.
    pub fn frame(&mut self) -> FrameOutcome {
        if self.cancel.is_cancelled() {
            return FrameOutcome::Stop;
        }
        let elapsed = self.clock.elapsed();
        self.frame_at(elapsed)
    }

    /// Run one frame at `elapsed` seconds since the first frame.
    pub fn frame_at(&mut self, elapsed: f64) -> FrameOutcome {
        if self.cancel.is_cancelled() {
            return FrameOutcome::Stop;
        }

        advance_frame(&mut self.scene, elapsed, self.input.pointer());

        match self.surface.draw(&self.scene) {
            Ok(()) => FrameOutcome::Continue,
            Err(e) if e.is_fatal() => {
                tracing::error!("Render failed, stopping animation: {e}");
                self.cancel.cancel();
                FrameOutcome::Stop
            }
            Err(e) => {
                tracing::debug!("Frame skipped: {e}");
                FrameOutcome::Continue
            }
        }
    }

    /// Stop the animation and release every acquired resource.
    pub fn unmount(self) {
        let Self {
            cancel,
            listeners,
            surface,
            ..
        } = self;

        cancel.cancel();
        drop(listeners);
        drop(surface);

        tracing::info!("Ambient background unmounted");
    }
}
