//! The seam between the background and whatever hosts it.
//!
//! The winit window implements [`Host`] in the binary; tests use an
//! in-memory host with no GPU behind it.

use std::cell::Cell;
use std::rc::Rc;

use ambient_renderer::RendererError;
use ambient_scene::{Scene, Viewport};

use super::listeners::ListenerRegistry;

/// Where the render surface sits relative to the host's other content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfacePlacement {
    /// Pinned to the top-left and sized to 100% × 100% of the viewport.
    pub fill_viewport: bool,
    /// Stacking order; 0 sits below interactive content.
    pub z_index: i32,
    /// Pointer input passes through to whatever is underneath.
    pub click_through: bool,
}

/// Fixed, full-viewport, bottom-most, click-through.
pub const BACKGROUND_LAYER: SurfacePlacement = SurfacePlacement {
    fill_viewport: true,
    z_index: 0,
    click_through: true,
};

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("render surface unavailable: {0}")]
    Surface(#[from] RendererError),

    #[error("host has no window to attach to")]
    NoWindow,
}

/// A drawable surface attached to the host.
///
/// Dropping it detaches it and releases its GPU resources.
pub trait RenderSurface {
    /// Match a new viewport size or pixel density.
    fn resize(&mut self, viewport: Viewport, scale_factor: f64);

    /// Draw one frame of `scene`.
    fn draw(&mut self, scene: &Scene) -> Result<(), RendererError>;
}

/// The page-like environment the background mounts into.
pub trait Host {
    type Surface: RenderSurface;

    /// Current viewport in physical pixels.
    fn viewport(&self) -> Viewport;

    /// Create and attach a render surface at `placement`.
    ///
    /// The scene is passed so static geometry can be uploaded once.
    fn attach_surface(
        &mut self,
        scene: &Scene,
        placement: SurfacePlacement,
    ) -> Result<Self::Surface, MountError>;

    /// Global input subscriptions for this host.
    fn listeners(&self) -> &ListenerRegistry;
}

/// Counts surfaces currently attached to a host.
#[derive(Debug, Clone, Default)]
pub struct AttachCounter {
    attached: Rc<Cell<usize>>,
}

impl AttachCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self) -> Attachment {
        self.attached.set(self.attached.get() + 1);
        Attachment {
            attached: Rc::clone(&self.attached),
        }
    }

    pub fn count(&self) -> usize {
        self.attached.get()
    }
}

/// Proof that a surface is attached; detaches on drop.
#[derive(Debug)]
pub struct Attachment {
    attached: Rc<Cell<usize>>,
}

impl Drop for Attachment {
    fn drop(&mut self) {
        self.attached.set(self.attached.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_layer_sits_under_everything() {
        assert!(BACKGROUND_LAYER.fill_viewport);
        assert_eq!(BACKGROUND_LAYER.z_index, 0);
        assert!(BACKGROUND_LAYER.click_through);
    }

    #[test]
    fn attachments_count_up_and_down() {
        let counter = AttachCounter::new();
        let a = counter.attach();
        let b = counter.attach();
        assert_eq!(counter.count(), 2);
        drop(a);
        assert_eq!(counter.count(), 1);
        drop(b);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn mount_error_display() {
        let err = MountError::from(RendererError::AdapterNotFound);
        assert_eq!(
            err.to_string(),
            "render surface unavailable: no suitable GPU adapter found"
        );
        assert_eq!(
            MountError::NoWindow.to_string(),
            "host has no window to attach to"
        );
    }
}
