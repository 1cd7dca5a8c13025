//! GPU-free scene model for the ambient background.
//!
//! [`SceneBuilder`] creates the particle field, the three wireframe solids,
//! the lights, and the camera once. [`animation::advance_frame`] then sets
//! every transform from elapsed time and the pointer state tracked by
//! [`InputTracker`].

pub mod animation;
pub mod builder;
pub mod camera;
pub mod input;
pub mod lighting;
pub mod mesh;
pub mod palette;
pub mod particles;
pub mod solids;
pub mod transform;

pub use animation::{advance_frame, FrameClock};
pub use builder::{Scene, SceneBuilder, Viewport};
pub use camera::Camera;
pub use input::{InputTracker, PointerState};
pub use lighting::{Lighting, PointLight};
pub use mesh::LineVertex;
pub use particles::ParticleField;
pub use solids::{Solid, SolidKind};
