//! Wireframe mesh generation for the three solids.
//!
//! Every mesh is a plain line list (two vertices per segment, no index
//! buffer) built from a triangulation. Each triangle contributes its three
//! edges, so an edge shared by two faces is drawn twice, once with each
//! face's normals. The torus carries smooth normals; the polyhedra carry
//! one flat normal per face.

use crate::transform::{add, length, normalize, sub, Vec3};

/// A single vertex of a wireframe line list.
///
/// Layout: position(vec3) + normal(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

type Triangle = [LineVertex; 3];

/// Expand triangles into their edges: a→b, b→c, c→a.
fn triangle_edges(triangles: impl IntoIterator<Item = Triangle>) -> Vec<LineVertex> {
    triangles
        .into_iter()
        .flat_map(|[a, b, c]| [a, b, b, c, c, a])
        .collect()
}

/// Torus in the XY plane around the Z axis.
///
/// `radius` is the ring radius, `tube` the tube radius. Each of the
/// `radial × tubular` grid cells is split into two triangles along the
/// same diagonal, giving `6 × radial × tubular` segments.
pub fn torus_wireframe(radius: f32, tube: f32, radial: u32, tubular: u32) -> Vec<LineVertex> {
    let radial = radial.max(3);
    let tubular = tubular.max(3);

    let point = |j: u32, i: u32| -> LineVertex {
        let u = (i % tubular) as f32 / tubular as f32 * std::f32::consts::TAU;
        let v = (j % radial) as f32 / radial as f32 * std::f32::consts::TAU;
        let position = [
            (radius + tube * v.cos()) * u.cos(),
            (radius + tube * v.cos()) * u.sin(),
            tube * v.sin(),
        ];
        let center = [radius * u.cos(), radius * u.sin(), 0.0];
        LineVertex {
            position,
            normal: normalize(sub(position, center)),
        }
    };

    let cells = (0..radial).flat_map(|j| (0..tubular).map(move |i| (j, i)));
    triangle_edges(cells.flat_map(|(j, i)| {
        let corner = point(j, i);
        let far = point(j + 1, i + 1);
        [
            [point(j + 1, i), corner, far],
            [corner, point(j, i + 1), far],
        ]
    }))
}

/// Regular octahedron with vertices on the axes at distance `radius`.
pub fn octahedron_wireframe(radius: f32) -> Vec<LineVertex> {
    let corners: [Vec3; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    polyhedron_wireframe(&corners, std::f32::consts::SQRT_2, radius)
}

/// Regular icosahedron (no subdivision) inscribed in a sphere of `radius`.
pub fn icosahedron_wireframe(radius: f32) -> Vec<LineVertex> {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    let corners: [Vec3; 12] = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    polyhedron_wireframe(&corners, 2.0, radius)
}

/// Faces are the corner triples that sit `edge` apart pairwise. Corners
/// are projected onto a sphere of `radius` and every face is shaded flat.
fn polyhedron_wireframe(corners: &[Vec3], edge: f32, radius: f32) -> Vec<LineVertex> {
    let adjacent = |a: usize, b: usize| (length(sub(corners[a], corners[b])) - edge).abs() < 1e-3;
    let on_sphere = |p: Vec3| {
        let n = normalize(p);
        [n[0] * radius, n[1] * radius, n[2] * radius]
    };

    let n = corners.len();
    let mut faces = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            if !adjacent(a, b) {
                continue;
            }
            for c in b + 1..n {
                if adjacent(a, c) && adjacent(b, c) {
                    faces.push([corners[a], corners[b], corners[c]]);
                }
            }
        }
    }

    // Regular solids are centred on the origin, so the centroid direction
    // is the outward face normal.
    triangle_edges(faces.into_iter().map(|[a, b, c]| {
        let normal = normalize(add(add(a, b), c));
        [a, b, c].map(|p| LineVertex {
            position: on_sphere(p),
            normal,
        })
    }))
}

// =============================================================================
// Tests
// =============================================================================
