//! Mounting, driving, and tearing down the background inside a host.
//!
//! [`AmbientBackground::mount`] builds the scene, attaches a surface, and
//! subscribes to pointer-move and resize. Everything it acquires is held
//! by RAII guards, so [`AmbientBackground::unmount`] (or a plain drop)
//! releases each resource exactly once.

mod background;
mod host;
mod listeners;
#[cfg(test)]
pub(crate) mod testing;

pub use background::{AmbientBackground, FrameOutcome};
pub use host::{AttachCounter, Attachment, Host, MountError, RenderSurface, SurfacePlacement};
pub use listeners::{ListenerKind, ListenerRegistry};
