//! wgpu rendering for the ambient background.
//!
//! [`RenderState`] owns the window surface and draws a [`Scene`] each
//! frame: additive particle billboards first, then the lit wireframe
//! solids on top, over a transparent clear. On displays denser than the
//! pixel-ratio cap both passes draw into a smaller offscreen target that
//! is stretched over the full-size surface.
//!
//! [`Scene`]: ambient_scene::Scene

pub mod gpu;
pub mod particles;
pub mod render_state;
pub mod wireframe;

pub use gpu::{FrameExtent, GpuContext, PhysicalSize, RendererError, SurfaceOptions};
pub use render_state::RenderState;
