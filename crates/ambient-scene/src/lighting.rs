//! Scene lights: one ambient fill and two opposing point lights.

use ambient_common::Color;

use crate::palette::{BLUE, PURPLE};
use crate::transform::Vec3;

/// Inverse-square falloff for the point lights.
pub const POINT_LIGHT_DECAY: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    /// Exponent of the distance falloff, `1 / d^decay`.
    pub decay: f32,
}

impl PointLight {
    /// Linear RGB scaled by intensity.
    pub fn radiance(&self) -> [f32; 3] {
        scale(self.color.to_rgb_f32(), self.intensity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub points: [PointLight; 2],
}

impl Lighting {
    /// Low white fill plus purple and blue lights on opposite corners.
    pub fn rig() -> Self {
        Self {
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: 0.5,
            },
            points: [
                PointLight {
                    color: PURPLE,
                    intensity: 1.0,
                    position: [5.0, 5.0, 5.0],
                    decay: POINT_LIGHT_DECAY,
                },
                PointLight {
                    color: BLUE,
                    intensity: 1.0,
                    position: [-5.0, -5.0, -5.0],
                    decay: POINT_LIGHT_DECAY,
                },
            ],
        }
    }

    pub fn ambient_radiance(&self) -> [f32; 3] {
        scale(self.ambient.color.to_rgb_f32(), self.ambient.intensity)
    }
}

fn scale(rgb: [f32; 3], k: f32) -> [f32; 3] {
    [rgb[0] * k, rgb[1] * k, rgb[2] * k]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_lights_sit_on_opposite_corners() {
        let rig = Lighting::rig();
        let [a, b] = rig.points;
        for axis in 0..3 {
            assert_eq!(a.position[axis], -b.position[axis]);
        }
        assert_eq!(a.color, PURPLE);
        assert_eq!(b.color, BLUE);
    }

    #[test]
    fn point_lights_fall_off_with_distance_squared() {
        for light in Lighting::rig().points {
            assert_eq!(light.decay, 2.0);
        }
    }

    #[test]
    fn ambient_is_dim_white() {
        let rgb = Lighting::rig().ambient_radiance();
        assert!(rgb.iter().all(|c| (c - 0.5).abs() < 1e-6));
    }

    #[test]
    fn radiance_scales_with_intensity() {
        let mut light = Lighting::rig().points[0];
        light.intensity = 2.0;
        let [r, _, _] = light.radiance();
        assert!((r - 2.0 * 0x8b as f32 / 255.0).abs() < 1e-5);
    }
}
