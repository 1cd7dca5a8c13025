//! In-memory host for lifecycle tests.

use std::cell::RefCell;
use std::rc::Rc;

use ambient_renderer::RendererError;
use ambient_scene::{Scene, Viewport};

use super::host::{AttachCounter, Attachment, Host, MountError, RenderSurface, SurfacePlacement};
use super::listeners::ListenerRegistry;

/// What the fake surface has been asked to do.
#[derive(Debug, Default)]
pub(crate) struct SurfaceLog {
    pub draws: usize,
    pub resizes: Vec<(Viewport, f64)>,
    pub placement: Option<SurfacePlacement>,
    /// Returned by the next `draw` call.
    pub next_error: Option<RendererError>,
}

pub(crate) struct FakeHost {
    pub viewport: Viewport,
    pub fail_attach: bool,
    pub listeners: ListenerRegistry,
    pub surfaces: AttachCounter,
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl FakeHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            fail_attach: false,
            listeners: ListenerRegistry::new(),
            surfaces: AttachCounter::new(),
            log: Rc::default(),
        }
    }
}

pub(crate) struct FakeSurface {
    log: Rc<RefCell<SurfaceLog>>,
    _attachment: Attachment,
}

impl RenderSurface for FakeSurface {
    fn resize(&mut self, viewport: Viewport, scale_factor: f64) {
        self.log.borrow_mut().resizes.push((viewport, scale_factor));
    }

    fn draw(&mut self, _scene: &Scene) -> Result<(), RendererError> {
        let mut log = self.log.borrow_mut();
        match log.next_error.take() {
            Some(e) => Err(e),
            None => {
                log.draws += 1;
                Ok(())
            }
        }
    }
}

impl Host for FakeHost {
    type Surface = FakeSurface;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn attach_surface(
        &mut self,
        _scene: &Scene,
        placement: SurfacePlacement,
    ) -> Result<FakeSurface, MountError> {
        if self.fail_attach {
            return Err(MountError::Surface(RendererError::AdapterNotFound));
        }
        self.log.borrow_mut().placement = Some(placement);
        Ok(FakeSurface {
            log: Rc::clone(&self.log),
            _attachment: self.surfaces.attach(),
        })
    }

    fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}
