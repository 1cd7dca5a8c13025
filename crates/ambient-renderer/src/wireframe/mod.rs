//! Line-list renderer for the three wireframe solids.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::SolidUniforms;
