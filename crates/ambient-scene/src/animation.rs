//! Per-frame motion.
//!
//! Every transform is set from absolute elapsed time, never accumulated,
//! so a frame at time `t` looks the same no matter how many frames came
//! before it. The camera easing is the one exception: it steps a fixed
//! fraction per frame.

use std::time::Instant;

use crate::builder::Scene;
use crate::input::PointerState;
use crate::transform::Rotation;

pub const PARTICLE_YAW_RATE: f64 = 0.05;
pub const PARTICLE_PITCH_RATE: f64 = 0.03;
pub const SOLID_PITCH_RATE: f64 = 0.3;
pub const SOLID_YAW_RATE: f64 = 0.2;
/// Extra angular speed per solid index.
pub const SOLID_RATE_STEP: f64 = 0.1;
pub const SOLID_BOB_AMPLITUDE: f64 = 0.5;
/// Pointer position → camera goal scale.
pub const CAMERA_POINTER_SCALE: f32 = 0.5;
/// Fraction of the remaining distance the camera covers each frame.
pub const CAMERA_EASING: f32 = 0.05;

/// Rigid rotation of the particle field at `elapsed` seconds.
pub fn particle_rotation(elapsed: f64) -> Rotation {
    Rotation {
        pitch: (elapsed * PARTICLE_PITCH_RATE) as f32,
        yaw: (elapsed * PARTICLE_YAW_RATE) as f32,
    }
}

/// Rotation of solid `index` at `elapsed` seconds.
pub fn solid_rotation(index: usize, elapsed: f64) -> Rotation {
    let step = index as f64 * SOLID_RATE_STEP;
    Rotation {
        pitch: (elapsed * (SOLID_PITCH_RATE + step)) as f32,
        yaw: (elapsed * (SOLID_YAW_RATE + step)) as f32,
    }
}

/// Vertical position of solid `index` at `elapsed` seconds, in [-0.5, 0.5].
pub fn solid_offset(index: usize, elapsed: f64) -> f32 {
    ((elapsed + index as f64).sin() * SOLID_BOB_AMPLITUDE) as f32
}

/// Where the camera is heading for a given pointer position.
pub fn camera_goal(pointer: PointerState) -> [f32; 2] {
    [
        pointer.x * CAMERA_POINTER_SCALE,
        pointer.y * CAMERA_POINTER_SCALE,
    ]
}

/// Apply one frame of motion to the scene.
///
/// Sets the particle and solid transforms for `elapsed`, eases the camera
/// one step toward the pointer goal, and re-aims it at the origin.
pub fn advance_frame(scene: &mut Scene, elapsed: f64, pointer: PointerState) {
    scene.particles.rotation = particle_rotation(elapsed);

    for (index, solid) in scene.solids.iter_mut().enumerate() {
        solid.rotation = solid_rotation(index, elapsed);
        solid.position[1] = solid_offset(index, elapsed);
    }

    scene
        .camera
        .ease_toward(camera_goal(pointer), CAMERA_EASING);
    scene.camera.look_at([0.0; 3]);
}

/// Monotonic seconds since the first frame.
///
/// The clock starts on its first reading and never pauses or resets.
#[derive(Debug, Default)]
pub struct FrameClock {
    start: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&mut self) -> f64 {
        self.elapsed_at(Instant::now())
    }

    /// Elapsed time at `now`; the first call pins the start.
    pub fn elapsed_at(&mut self, now: Instant) -> f64 {
        let start = *self.start.get_or_insert(now);
        now.saturating_duration_since(start).as_secs_f64()
    }
}

// =============================================================================
// Tests
// =============================================================================
