/// WGSL shader for the vertex-colored cube.
///
/// Positions go through world, view and projection in that order; the
/// per-vertex color is passed through unlit.
pub const CUBE_SHADER: &str = r#"
struct Uniforms {
    world: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.projection * uniforms.view * uniforms.world
        * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_declares_entry_points_and_uniforms() {
        assert!(CUBE_SHADER.contains("fn vs_main"));
        assert!(CUBE_SHADER.contains("fn fs_main"));
        for field in ["world", "view", "projection"] {
            assert!(CUBE_SHADER.contains(&format!("{field}: mat4x4<f32>")));
        }
    }
}
