pub(crate) const SHADER_SOURCE: &str = r#"
struct Frame {
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    ambient: vec4<f32>,
    light_positions: array<vec4<f32>, 2>,
    light_colors: array<vec4<f32>, 2>,
};

struct Particles {
    model: mat4x4<f32>,
    size: f32,
    opacity: f32,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> frame: Frame;

@group(1) @binding(0)
var<uniform> particles: Particles;

struct VertexInput {
    @location(0) offset: vec2<f32>,
};

struct InstanceInput {
    @location(1) position: vec3<f32>,
    @location(2) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    var out: VertexOutput;

    // Expand the quad in view space so it always faces the camera and
    // shrinks with depth.
    let view_pos = frame.view * particles.model * vec4<f32>(instance.position, 1.0);
    let corner = view_pos.xy + vertex.offset * particles.size;

    out.clip_position = frame.projection * vec4<f32>(corner, view_pos.z, 1.0);
    out.color = vec4<f32>(instance.color, particles.opacity);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
