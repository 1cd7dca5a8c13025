//! The winit window as a [`Host`] for the background.

use std::sync::Arc;

use winit::window::Window;

use ambient_renderer::{RenderState, RendererError, SurfaceOptions};
use ambient_scene::{Scene, Viewport};

use crate::lifecycle::{
    AttachCounter, Attachment, Host, ListenerRegistry, MountError, RenderSurface,
    SurfacePlacement,
};

pub(crate) struct WinitHost {
    window: Arc<Window>,
    options: SurfaceOptions,
    backdrop: bool,
    listeners: ListenerRegistry,
    surfaces: AttachCounter,
}

impl WinitHost {
    pub(crate) fn new(
        window: Arc<Window>,
        options: SurfaceOptions,
        backdrop: bool,
        listeners: ListenerRegistry,
        surfaces: AttachCounter,
    ) -> Self {
        Self {
            window,
            options,
            backdrop,
            listeners,
            surfaces,
        }
    }
}

impl Host for WinitHost {
    type Surface = WinitSurface;

    fn viewport(&self) -> Viewport {
        let size = self.window.inner_size();
        Viewport::new(size.width, size.height)
    }

    fn attach_surface(
        &mut self,
        scene: &Scene,
        placement: SurfacePlacement,
    ) -> Result<WinitSurface, MountError> {
        let state = pollster::block_on(RenderState::new(
            self.window.clone(),
            scene,
            self.options,
        ))?;

        // The surface is the window's whole content, so it always fills
        // the viewport and has nothing beneath it inside the window. Only a
        // backdrop window can hand clicks to the desktop below.
        if placement.click_through && self.backdrop {
            if let Err(e) = self.window.set_cursor_hittest(false) {
                tracing::warn!("Click-through unavailable on this platform: {e}");
            }
        }

        Ok(WinitSurface {
            state,
            _attachment: self.surfaces.attach(),
        })
    }

    fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}

pub(crate) struct WinitSurface {
    state: RenderState,
    _attachment: Attachment,
}

impl RenderSurface for WinitSurface {
    fn resize(&mut self, viewport: Viewport, scale_factor: f64) {
        self.state
            .resize(viewport.width, viewport.height, scale_factor);
    }

    fn draw(&mut self, scene: &Scene) -> Result<(), RendererError> {
        self.state.render(scene)
    }
}
