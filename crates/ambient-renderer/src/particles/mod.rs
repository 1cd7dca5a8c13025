//! Instanced billboard renderer for the particle field.
//!
//! Each particle is a small camera-facing quad sized in world units, so it
//! shrinks with distance. Positions and colors are uploaded once; only the
//! field's rotation changes per frame.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::ParticleInstance;

#[cfg(test)]
mod tests {
    use super::types::*;

    #[test]
    fn particle_instance_size() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 24); // 6 floats * 4 bytes
    }

    #[test]
    fn uniforms_size() {
        assert_eq!(std::mem::size_of::<ParticleUniforms>(), 80);
    }

    #[test]
    fn corners_are_centred() {
        let sum = CORNERS
            .iter()
            .fold([0.0f32; 2], |acc, c| [acc[0] + c.offset[0], acc[1] + c.offset[1]]);
        assert_eq!(sum, [0.0, 0.0]);
        for c in CORNERS {
            assert_eq!(c.offset[0].abs(), 0.5);
            assert_eq!(c.offset[1].abs(), 0.5);
        }
    }

    #[test]
    fn corner_indices_form_two_triangles() {
        assert_eq!(CORNER_INDICES, &[0, 1, 2, 0, 2, 3]);
    }
}
