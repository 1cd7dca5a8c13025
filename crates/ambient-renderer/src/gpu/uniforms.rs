//! Per-frame uniforms shared by the particle and wireframe passes.
//!
//! `FrameUniforms` is bound at group 0 for both pipelines and rewritten
//! once per frame from the scene's camera and lights.

use std::f32::consts::FRAC_1_PI;

use ambient_scene::Scene;

/// GPU-side uniform buffer matching the WGSL `Frame` struct.
///
/// Light colors are stored already multiplied by the Lambert 1/π, so the
/// shader only applies `max(n·l, 0)` and the distance falloff.
///
/// Layout: 2 × mat4 + 5 × vec4 = 208 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    /// World → view (column-major).
    pub view: [f32; 16],
    /// View → clip, depth 0..1 (column-major).
    pub projection: [f32; 16],
    /// Ambient radiance / π (rgb); w unused.
    pub ambient: [f32; 4],
    /// Point light world positions (xyz); w unused.
    pub light_positions: [[f32; 4]; 2],
    /// Point light radiance / π (rgb) and falloff exponent (w).
    pub light_colors: [[f32; 4]; 2],
}

impl FrameUniforms {
    pub fn from_scene(scene: &Scene) -> Self {
        let lighting = &scene.lighting;
        let [ar, ag, ab] = lighting.ambient_radiance().map(|c| c * FRAC_1_PI);
        let position = |i: usize| {
            let [x, y, z] = lighting.points[i].position;
            [x, y, z, 1.0]
        };
        let color = |i: usize| {
            let light = &lighting.points[i];
            let [r, g, b] = light.radiance().map(|c| c * FRAC_1_PI);
            [r, g, b, light.decay]
        };

        Self {
            view: scene.camera.view(),
            projection: scene.camera.projection(),
            ambient: [ar, ag, ab, 0.0],
            light_positions: [position(0), position(1)],
            light_colors: [color(0), color(1)],
        }
    }
}

/// Buffer, layout, and bind group for [`FrameUniforms`].
pub struct FrameBindings {
    pub buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl FrameBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<FrameUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}
