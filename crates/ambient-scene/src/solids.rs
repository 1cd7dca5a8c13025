//! The three rotating wireframe solids.

use ambient_common::Color;

use crate::mesh::{self, LineVertex};
use crate::palette::{BLUE, PINK, PURPLE};
use crate::transform::{self, Mat4, Rotation, Vec3};

/// Number of solids in the scene.
pub const SOLID_COUNT: usize = 3;
/// Side length of the cube solids are placed in, centred at origin.
pub const SOLID_SPREAD: f32 = 8.0;
pub const SOLID_OPACITY: f32 = 0.15;

/// The fixed geometric kinds, in scene order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidKind {
    Torus,
    Octahedron,
    Icosahedron,
}

impl SolidKind {
    /// Scene order: index `i` of the solid array holds `ALL[i]`.
    pub const ALL: [SolidKind; SOLID_COUNT] = [
        SolidKind::Torus,
        SolidKind::Octahedron,
        SolidKind::Icosahedron,
    ];

    pub fn color(self) -> Color {
        match self {
            SolidKind::Torus => PURPLE,
            SolidKind::Octahedron => BLUE,
            SolidKind::Icosahedron => PINK,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SolidKind::Torus => "torus",
            SolidKind::Octahedron => "octahedron",
            SolidKind::Icosahedron => "icosahedron",
        }
    }

    /// Line-list mesh at the kind's base size.
    pub fn wireframe(self) -> Vec<LineVertex> {
        match self {
            SolidKind::Torus => mesh::torus_wireframe(0.7, 0.2, 16, 100),
            SolidKind::Octahedron => mesh::octahedron_wireframe(0.8),
            SolidKind::Icosahedron => mesh::icosahedron_wireframe(0.8),
        }
    }
}

/// One placed solid.
///
/// `origin` is the random placement chosen at build time. The animation
/// only ever overwrites `rotation` and the vertical component of
/// `position`; x and z stay at the origin's values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub kind: SolidKind,
    pub origin: Vec3,
    pub position: Vec3,
    pub rotation: Rotation,
}

impl Solid {
    pub fn new(kind: SolidKind, origin: Vec3) -> Self {
        Self {
            kind,
            origin,
            position: origin,
            rotation: Rotation::ZERO,
        }
    }

    /// Model matrix: translate · Rx(pitch) · Ry(yaw).
    pub fn model(&self) -> Mat4 {
        let [x, y, z] = self.position;
        transform::mul(&transform::translate(x, y, z), &self.rotation.matrix())
    }
}
