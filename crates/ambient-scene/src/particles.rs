//! The particle point-cloud.

use rand::Rng;

use crate::palette::PARTICLE_PALETTE;
use crate::transform::{Rotation, Vec3};

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 1500;
/// Side length of the cube particles are scattered in, centred at origin.
pub const PARTICLE_SPREAD: f32 = 15.0;
/// Point size; a particle at view depth `d` spans
/// `PARTICLE_SIZE × (viewport height / 2) / d` pixels.
pub const PARTICLE_SIZE: f32 = 0.03;
pub const PARTICLE_OPACITY: f32 = 0.8;

/// Fixed-size cloud of colored points.
///
/// Positions and colors never change after generation; the whole field
/// is moved by a single rigid [`Rotation`].
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    pub rotation: Rotation,
}

impl ParticleField {
    /// Scatter `count` particles uniformly in a cube of side `spread`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, spread: f32) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            positions.push(sample_cube(rng, spread));
            colors.push(PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())]);
        }

        Self {
            positions,
            colors,
            rotation: Rotation::ZERO,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Uniform sample in `[-spread/2, spread/2)` on each axis.
pub(crate) fn sample_cube<R: Rng + ?Sized>(rng: &mut R, spread: f32) -> Vec3 {
    [
        (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * spread,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::generate(&mut rng, PARTICLE_COUNT, PARTICLE_SPREAD)
    }

    #[test]
    fn generates_requested_count() {
        let f = field(1);
        assert_eq!(f.len(), PARTICLE_COUNT);
        assert_eq!(f.colors().len(), PARTICLE_COUNT);
        assert!(!f.is_empty());
    }

    #[test]
    fn positions_stay_inside_cube() {
        let half = PARTICLE_SPREAD / 2.0;
        for seed in 0..4 {
            for p in field(seed).positions() {
                for axis in p {
                    assert!((-half..=half).contains(axis), "{p:?} escapes ±{half}");
                }
            }
        }
    }

    #[test]
    fn colors_are_exact_palette_entries() {
        for c in field(7).colors() {
            assert!(PARTICLE_PALETTE.contains(c), "{c:?} is not a palette entry");
        }
    }

    #[test]
    fn every_palette_entry_is_used() {
        let f = field(3);
        for entry in PARTICLE_PALETTE {
            let n = f.colors().iter().filter(|c| **c == entry).count();
            // 1500 uniform draws over 3 entries: each lands near 500.
            assert!(n > 350, "{entry:?} drawn only {n} times");
        }
    }

    #[test]
    fn same_seed_reproduces_field() {
        let a = field(42);
        let b = field(42);
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn starts_unrotated() {
        assert_eq!(field(0).rotation, Rotation::ZERO);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let f = ParticleField::generate(&mut rng, 0, PARTICLE_SPREAD);
        assert!(f.is_empty());
    }
}
