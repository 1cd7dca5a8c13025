/// Lambert shading from the ambient fill and two point lights. Light
/// colors arrive pre-divided by π; each point light falls off as
/// `1 / max(d^decay, 0.01)` with no cutoff distance.
pub(crate) const SHADER_SOURCE: &str = r#"
struct Frame {
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    ambient: vec4<f32>,
    light_positions: array<vec4<f32>, 2>,
    light_colors: array<vec4<f32>, 2>,
};

struct Solid {
    model: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: Frame;

@group(1) @binding(0)
var<uniform> solid: Solid;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = solid.model * vec4<f32>(vertex.position, 1.0);
    out.clip_position = frame.projection * frame.view * world;
    out.world_position = world.xyz;
    // Model is rotation + translation only, so w = 0 drops the translation.
    out.normal = (solid.model * vec4<f32>(vertex.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.normal);
    var light = frame.ambient.rgb;
    for (var i = 0u; i < 2u; i = i + 1u) {
        let offset = frame.light_positions[i].xyz - in.world_position;
        let falloff = 1.0 / max(pow(length(offset), frame.light_colors[i].w), 0.01);
        let lambert = max(dot(n, normalize(offset)), 0.0);
        light = light + frame.light_colors[i].rgb * lambert * falloff;
    }
    return vec4<f32>(solid.color.rgb * light, solid.color.a);
}
"#;
