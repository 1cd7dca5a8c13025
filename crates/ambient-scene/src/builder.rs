//! One-shot scene construction.
//!
//! All randomness lives here. Everything downstream (animation, rendering)
//! is a pure function of elapsed time, pointer state, and the immutable
//! arrays produced by [`SceneBuilder::build`].

use rand::Rng;

use crate::camera::Camera;
use crate::lighting::Lighting;
use crate::particles::{self, ParticleField, PARTICLE_COUNT, PARTICLE_SPREAD};
use crate::solids::{Solid, SolidKind, SOLID_COUNT, SOLID_SPREAD};

/// Window dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True while layout reports a zero dimension.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width / height, or `None` if either is zero.
    pub fn aspect(&self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// The complete scene graph.
///
/// The solid array has a fixed length, so the solid count cannot change.
#[derive(Debug, Clone)]
pub struct Scene {
    pub particles: ParticleField,
    pub solids: [Solid; SOLID_COUNT],
    pub lighting: Lighting,
    pub camera: Camera,
}

/// Builds the scene from the window dimensions and a random source.
pub struct SceneBuilder;

impl SceneBuilder {
    /// Build with a caller-supplied RNG (seeded in tests, thread-local on mount).
    pub fn build<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Scene {
        let particles = ParticleField::generate(rng, PARTICLE_COUNT, PARTICLE_SPREAD);
        let solids =
            SolidKind::ALL.map(|kind| Solid::new(kind, particles::sample_cube(rng, SOLID_SPREAD)));

        for solid in &solids {
            tracing::trace!(
                kind = solid.kind.label(),
                color = %solid.kind.color().to_hex(),
                origin = ?solid.origin,
                "solid placed"
            );
        }
        tracing::debug!(
            particles = particles.len(),
            solids = solids.len(),
            width = viewport.width,
            height = viewport.height,
            "scene built"
        );

        Scene {
            particles,
            solids,
            lighting: Lighting::rig(),
            camera: Camera::new(viewport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Rotation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VP: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    fn scene(seed: u64) -> Scene {
        SceneBuilder::build(VP, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn builds_fixed_structure() {
        let s = scene(0);
        assert_eq!(s.particles.len(), 1500);
        assert_eq!(s.solids.len(), 3);
        let kinds: Vec<_> = s.solids.iter().map(|solid| solid.kind).collect();
        assert_eq!(kinds, SolidKind::ALL.to_vec());
    }

    #[test]
    fn solids_start_inside_their_cube() {
        for seed in 0..32 {
            for solid in scene(seed).solids {
                for axis in solid.origin {
                    assert!((-4.0..=4.0).contains(&axis), "{:?}", solid.origin);
                }
                assert_eq!(solid.position, solid.origin);
                assert_eq!(solid.rotation, Rotation::ZERO);
            }
        }
    }

    #[test]
    fn solid_positions_are_independent() {
        let s = scene(5);
        assert_ne!(s.solids[0].origin, s.solids[1].origin);
        assert_ne!(s.solids[1].origin, s.solids[2].origin);
    }

    #[test]
    fn camera_uses_window_aspect() {
        let s = scene(0);
        assert!((s.camera.aspect - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(s.camera.position, [0.0, 0.0, 5.0]);
    }

    #[test]
    fn viewport_aspect_guards_zero() {
        assert_eq!(Viewport::new(0, 600).aspect(), None);
        assert_eq!(Viewport::new(800, 0).aspect(), None);
        assert!(Viewport::new(0, 0).is_empty());
        assert_eq!(Viewport::new(200, 100).aspect(), Some(2.0));
    }
}
