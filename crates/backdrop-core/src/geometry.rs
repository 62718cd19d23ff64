//! Box geometry shared by every shape variant.
//!
//! All three variants render from one unit box mesh; each variant only
//! differs in the local transform that maps the unit box onto its extent.

use glam::{Mat4, Vec3};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Corners of the unit box centered on the origin: bottom face (z = -0.5)
/// first, then the top face in the same winding.
pub const UNIT_BOX_CORNERS: [[f32; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

/// Quads as corner indices, wound outward: -z, +z, -y, +y, -x, +x.
pub const BOX_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 4, 7, 3],
    [1, 2, 6, 5],
];

pub const BOX_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Vertex positions for the unit box: two triangles per face.
pub fn box_triangles() -> Vec<[f32; 3]> {
    BOX_FACES
        .iter()
        .flat_map(|quad| [0, 1, 2, 0, 2, 3].map(|i| UNIT_BOX_CORNERS[quad[i]]))
        .collect()
}

/// Vertex stream for the unit box outline as a line list.
pub fn box_edge_lines() -> Vec<[f32; 3]> {
    BOX_EDGES
        .iter()
        .flat_map(|[a, b]| [UNIT_BOX_CORNERS[*a], UNIT_BOX_CORNERS[*b]])
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    /// A slightly shrunk box standing in for rounded edges.
    RoundedBox,
    Prism,
}

impl ShapeKind {
    /// Map the unit box onto this shape for the given `(width, depth, height)`.
    pub fn local_transform(self, dims: Vec3) -> Mat4 {
        match self {
            ShapeKind::Box => Mat4::from_scale(dims),
            ShapeKind::RoundedBox => Mat4::from_scale(dims * Vec3::new(0.9, 0.9, 0.95)),
            ShapeKind::Prism => {
                Mat4::from_translation(Vec3::new(0.0, 0.0, dims.z / 2.0)) * Mat4::from_scale(dims)
            }
        }
    }
}

impl Distribution<ShapeKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.gen_range(0..3) {
            0 => ShapeKind::Box,
            1 => ShapeKind::RoundedBox,
            _ => ShapeKind::Prism,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(shape: ShapeKind, dims: Vec3) -> [Vec3; 8] {
        let m = shape.local_transform(dims);
        UNIT_BOX_CORNERS.map(|c| m.transform_point3(Vec3::from_array(c)))
    }

    // Footprint centered on the origin, rising from z = 0 to z = height.
    fn prism_vertices(width: f32, depth: f32, height: f32) -> [Vec3; 8] {
        let (hw, hd) = (width / 2.0, depth / 2.0);
        [
            Vec3::new(-hw, -hd, 0.0),
            Vec3::new(hw, -hd, 0.0),
            Vec3::new(hw, hd, 0.0),
            Vec3::new(-hw, hd, 0.0),
            Vec3::new(-hw, -hd, height),
            Vec3::new(hw, -hd, height),
            Vec3::new(hw, hd, height),
            Vec3::new(-hw, hd, height),
        ]
    }

    #[test]
    fn prism_transform_matches_explicit_vertices() {
        let dims = Vec3::new(120.0, 60.0, 90.0);
        let corners = corners(ShapeKind::Prism, dims);
        let explicit = prism_vertices(dims.x, dims.y, dims.z);
        for (a, b) in corners.iter().zip(explicit.iter()) {
            assert!((*a - *b).length() < 1e-3, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn rounded_box_is_smaller_than_box() {
        let dims = Vec3::new(100.0, 100.0, 100.0);
        let full = corners(ShapeKind::Box, dims);
        let rounded = corners(ShapeKind::RoundedBox, dims);
        assert!((full[6].x - 50.0).abs() < 1e-4);
        assert!((rounded[6].x - 45.0).abs() < 1e-4);
        assert!((rounded[6].z - 47.5).abs() < 1e-4);
    }

    #[test]
    fn mesh_streams_have_expected_sizes() {
        assert_eq!(box_triangles().len(), 36);
        assert_eq!(box_edge_lines().len(), 24);
    }

    #[test]
    fn triangles_cover_every_face_of_the_unit_box() {
        let tris = box_triangles();
        let faces = [
            (0, 2, -1.0),
            (1, 2, 1.0),
            (2, 1, -1.0),
            (3, 1, 1.0),
            (4, 0, -1.0),
            (5, 0, 1.0),
        ];
        for (face, axis, sign) in faces {
            for v in &tris[face * 6..face * 6 + 6] {
                assert_eq!(v[axis], 0.5 * sign, "face {face} vertex {v:?}");
            }
        }
    }
}
