//! 4×4 matrix and 3-vector math for scene transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Projection targets the
//! wgpu clip volume (depth 0..1, right-handed view space looking down -Z).

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// 3-component vector.
pub type Vec3 = [f32; 3];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Euler rotation applied in X-then-Y order (`Rx · Ry`), radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// Rotation around the X axis.
    pub pitch: f32,
    /// Rotation around the Y axis.
    pub yaw: f32,
}

impl Rotation {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
    };

    pub fn matrix(&self) -> Mat4 {
        mul(&rotate_x(self.pitch), &rotate_y(self.yaw))
    }
}

/// Perspective projection with a `[0, 1]` depth range.
///
/// `fov_y` is the vertical field of view in radians; `near`/`far` must be > 0.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        near * far * range_inv,
        0.0,
    ]
}

/// Right-handed view matrix looking from `eye` toward `target`.
///
/// Falls back to a pure translation when `up` is parallel to the view
/// direction.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = normalize(sub(target, eye));
    let side = cross(f, up);
    if length(side) < 1e-6 {
        return translate(-eye[0], -eye[1], -eye[2]);
    }
    let s = normalize(side);
    let u = cross(s, f);

    [
        s[0],
        u[0],
        -f[0],
        0.0,
        s[1],
        u[1],
        -f[1],
        0.0,
        s[2],
        u[2],
        -f[2],
        0.0,
        -dot(s, eye),
        -dot(u, eye),
        dot(f, eye),
        1.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1) and return the homogeneous result.
#[cfg(test)]
pub(crate) fn transform_point(m: &Mat4, p: Vec3) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`; zero stays zero.
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len <= f32::EPSILON {
        return [0.0; 3];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f32], b: &[f32], eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let t = translate(1.0, 2.0, 3.0);
        let p = transform_point(&t, [1.0, 1.0, 1.0]);
        assert!(approx_eq(&p, &[2.0, 3.0, 4.0, 1.0], 1e-6));
    }

    #[test]
    fn rotate_x_90_degrees_maps_y_to_z() {
        let r = rotate_x(std::f32::consts::FRAC_PI_2);
        let p = transform_point(&r, [0.0, 1.0, 0.0]);
        assert!(approx_eq(&p[..3], &[0.0, 0.0, 1.0], 1e-5));
    }

    #[test]
    fn rotate_y_90_degrees_maps_z_to_x() {
        let r = rotate_y(std::f32::consts::FRAC_PI_2);
        let p = transform_point(&r, [0.0, 0.0, 1.0]);
        assert!(approx_eq(&p[..3], &[1.0, 0.0, 0.0], 1e-5));
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert!(approx_eq(&Rotation::ZERO.matrix(), &IDENTITY, 1e-6));
    }

    #[test]
    fn rotation_applies_yaw_before_pitch() {
        // Rx · Ry: a point on +Z is first yawed onto +X, and pitch leaves +X alone.
        let r = Rotation {
            pitch: std::f32::consts::FRAC_PI_2,
            yaw: std::f32::consts::FRAC_PI_2,
        };
        let p = transform_point(&r.matrix(), [0.0, 0.0, 1.0]);
        assert!(approx_eq(&p[..3], &[1.0, 0.0, 0.0], 1e-5));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let p = perspective(75f32.to_radians(), 4.0 / 3.0, 0.1, 1000.0);
        let near = transform_point(&p, [0.0, 0.0, -0.1]);
        let far = transform_point(&p, [0.0, 0.0, -1000.0]);
        assert!((near[2] / near[3]).abs() < 1e-5);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
        // w carries view depth for the perspective divide
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn perspective_scales_x_by_aspect() {
        let fov = 75f32.to_radians();
        let p = perspective(fov, 2.0, 0.1, 1000.0);
        let f = 1.0 / (fov * 0.5).tan();
        assert!((p[0] - f / 2.0).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
    }

    #[test]
    fn look_at_puts_target_on_negative_z() {
        let view = look_at([0.0, 0.0, 5.0], [0.0; 3], [0.0, 1.0, 0.0]);
        let origin = transform_point(&view, [0.0; 3]);
        assert!(approx_eq(&origin, &[0.0, 0.0, -5.0, 1.0], 1e-5));
    }

    #[test]
    fn look_at_from_offset_eye_still_centers_target() {
        let view = look_at([0.5, -0.5, 5.0], [0.0; 3], [0.0, 1.0, 0.0]);
        let origin = transform_point(&view, [0.0; 3]);
        assert!(origin[0].abs() < 1e-5);
        assert!(origin[1].abs() < 1e-5);
        assert!(origin[2] < 0.0);
    }

    #[test]
    fn look_at_degenerate_up_falls_back_to_translation() {
        let view = look_at([0.0, 5.0, 0.0], [0.0; 3], [0.0, 1.0, 0.0]);
        assert!(approx_eq(&view, &translate(0.0, -5.0, 0.0), 1e-6));
    }

    #[test]
    fn normalize_handles_zero() {
        assert_eq!(normalize([0.0; 3]), [0.0; 3]);
        let n = normalize([3.0, 0.0, 4.0]);
        assert!((length(n) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cross_of_axes() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    }
}
