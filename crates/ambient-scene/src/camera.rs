//! Perspective camera that drifts toward the pointer.

use crate::builder::Viewport;
use crate::transform::{self, Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;
/// Distance from the origin along +Z. Never changes.
pub const CAMERA_DISTANCE: f32 = 5.0;

const UP: Vec3 = [0.0, 1.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera 5 units back on +Z, aimed at the origin.
    ///
    /// A zero-sized viewport starts with aspect 1.0.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: [0.0, 0.0, CAMERA_DISTANCE],
            target: [0.0; 3],
            fov_y_degrees: FOV_Y_DEGREES,
            aspect: viewport.aspect().unwrap_or(1.0),
            near: NEAR,
            far: FAR,
        }
    }

    /// Adopt the viewport's aspect ratio.
    ///
    /// Returns `false` (and keeps the old aspect) for a zero-sized viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        match viewport.aspect() {
            Some(aspect) => {
                self.aspect = aspect;
                true
            }
            None => false,
        }
    }

    /// Move x and y a fraction of the way toward `goal`. z is untouched.
    pub fn ease_toward(&mut self, goal: [f32; 2], factor: f32) {
        self.position[0] += (goal[0] - self.position[0]) * factor;
        self.position[1] += (goal[1] - self.position[1]) * factor;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn view(&self) -> Mat4 {
        transform::look_at(self.position, self.target, UP)
    }

    pub fn projection(&self) -> Mat4 {
        transform::perspective(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}
