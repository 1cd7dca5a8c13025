use ambient_scene::particles::{ParticleField, PARTICLE_OPACITY, PARTICLE_SIZE};
use ambient_scene::Camera;

/// One particle: object-space position and linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ParticleInstance {
    pub fn from_field(field: &ParticleField) -> Vec<Self> {
        field
            .positions()
            .iter()
            .zip(field.colors())
            .map(|(&position, &color)| Self { position, color })
            .collect()
    }
}

/// Billboard corner offset in units of the particle size.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Corner {
    pub offset: [f32; 2],
}

/// Uniforms for the particle draw, bound at group 1.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct ParticleUniforms {
    /// Field rotation (column-major).
    pub model: [f32; 16],
    /// Billboard edge length in view-space units.
    pub size: f32,
    pub opacity: f32,
    pub _pad: [f32; 2],
}

impl ParticleUniforms {
    /// Uniforms for the field rotation `model` seen through `camera`.
    ///
    /// The billboard is shrunk by the projection's vertical focal scale so
    /// a particle at depth `d` spans `PARTICLE_SIZE × (height / 2) / d`
    /// pixels whatever the field of view, like a depth-attenuated point.
    pub fn new(model: [f32; 16], camera: &Camera) -> Self {
        let focal = camera.projection()[5];
        Self {
            model,
            size: PARTICLE_SIZE / focal,
            opacity: PARTICLE_OPACITY,
            _pad: [0.0; 2],
        }
    }
}

pub(crate) const CORNERS: &[Corner] = &[
    Corner {
        offset: [-0.5, -0.5],
    },
    Corner {
        offset: [0.5, -0.5],
    },
    Corner { offset: [0.5, 0.5] },
    Corner {
        offset: [-0.5, 0.5],
    },
];

pub(crate) const CORNER_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];
