//! Wireframe vertex layout and per-solid uniforms.

use ambient_scene::solids::SOLID_OPACITY;
use ambient_scene::{LineVertex, Solid};

/// wgpu vertex buffer layout for [`LineVertex`].
pub(crate) const LINE_VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<LineVertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        // position: vec3<f32> at offset 0
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        // normal: vec3<f32> at offset 12
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 12,
            shader_location: 1,
        },
    ],
};

/// Per-solid uniforms, bound at group 1.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidUniforms {
    /// Model matrix (column-major).
    pub model: [f32; 16],
    /// Base color (rgb) and opacity (a).
    pub color: [f32; 4],
}

impl SolidUniforms {
    pub fn from_solid(solid: &Solid) -> Self {
        let [r, g, b] = solid.kind.color().to_rgb_f32();
        Self {
            model: solid.model(),
            color: [r, g, b, SOLID_OPACITY],
        }
    }
}
