//! Fixed colors of the scene.

use ambient_common::Color;

/// Particle palette: purple, blue, pink.
///
/// Stored as the exact floating-point triples written to the color buffer.
pub const PARTICLE_PALETTE: [[f32; 3]; 3] = [
    [0.545, 0.361, 0.965],
    [0.231, 0.510, 0.965],
    [0.925, 0.282, 0.580],
];

pub const PURPLE: Color = Color::from_hex_u32(0x8b5cf6);
pub const BLUE: Color = Color::from_hex_u32(0x3b82f6);
pub const PINK: Color = Color::from_hex_u32(0xec4899);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_triples_track_the_hex_colors() {
        for (triple, color) in PARTICLE_PALETTE.iter().zip([PURPLE, BLUE, PINK]) {
            let rgb = color.to_rgb_f32();
            for c in 0..3 {
                assert!(
                    (triple[c] - rgb[c]).abs() < 0.025,
                    "{triple:?} vs {}",
                    color.to_hex()
                );
            }
        }
    }

    #[test]
    fn palette_entries_are_distinct() {
        assert_ne!(PARTICLE_PALETTE[0], PARTICLE_PALETTE[1]);
        assert_ne!(PARTICLE_PALETTE[1], PARTICLE_PALETTE[2]);
        assert_ne!(PARTICLE_PALETTE[0], PARTICLE_PALETTE[2]);
    }
}
