use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use spincube_common::Rgb;

/// Corners of the canonical cube, in emission order.
pub const CANONICAL_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
];

/// Six faces, two counter-clockwise triangles each. Front faces point outward.
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    4, 5, 6,   4, 6, 7,   // -Z
    0, 2, 1,   0, 3, 2,   // +Z
    1, 5, 0,   0, 5, 4,   // +Y
    3, 6, 2,   3, 7, 6,   // -Y
    1, 2, 5,   5, 2, 6,   // +X
    0, 4, 3,   4, 7, 3,   // -X
];

/// Per-corner colors, paired with [`CANONICAL_CORNERS`] by index.
pub const CORNER_COLORS: [Rgb; 8] = [
    Rgb::CYAN,
    Rgb::BLUE,
    Rgb::CYAN,
    Rgb::MAGENTA,
    Rgb::MAGENTA,
    Rgb::CYAN,
    Rgb::MAGENTA,
    Rgb::RED,
];

/// A colored cube corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Rgb,
}

/// Errors from checking a mesh's index list against its vertices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("index {index} at slot {slot} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        slot: usize,
        index: u16,
        vertex_count: usize,
    },
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),
}

/// Cube positions plus a triangle list referencing them.
///
/// Built once at startup and never mutated. Deserializing goes through
/// [`CubeMesh::from_parts`], so every mesh value satisfies [`CubeMesh::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeshParts")]
pub struct CubeMesh {
    positions: Vec<Vec3>,
    indices: Vec<u16>,
}

#[derive(Deserialize)]
struct MeshParts {
    positions: Vec<Vec3>,
    indices: Vec<u16>,
}

impl TryFrom<MeshParts> for CubeMesh {
    type Error = MeshError;

    fn try_from(parts: MeshParts) -> Result<Self, MeshError> {
        Self::from_parts(parts.positions, parts.indices)
    }
}

/// Generate a cube centered at `position` with half-extent `scale`.
///
/// Each canonical corner is scaled, then translated. Zero or negative scale
/// is accepted and produces a degenerate or inside-out cube.
pub fn generate_cube(position: Vec3, scale: f32) -> CubeMesh {
    let scale_matrix = Mat4::from_scale(Vec3::splat(scale));
    let translation_matrix = Mat4::from_translation(position);

    let positions = CANONICAL_CORNERS
        .iter()
        .map(|&corner| {
            let scaled = scale_matrix.transform_point3(corner);
            translation_matrix.transform_point3(scaled)
        })
        .collect();

    tracing::debug!(?position, scale, "generated cube mesh");

    CubeMesh {
        positions,
        indices: CUBE_INDICES.to_vec(),
    }
}

impl CubeMesh {
    /// Assemble a mesh from parts, rejecting indices outside the vertex range.
    pub fn from_parts(positions: Vec<Vec3>, indices: Vec<u16>) -> Result<Self, MeshError> {
        let mesh = Self { positions, indices };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` list.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Positions zipped with the corner palette.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        let palette: &'static [Rgb; 8] = &CORNER_COLORS;
        self.positions
            .iter()
            .zip(palette.iter().cycle())
            .map(|(&position, &color)| Vertex { position, color })
    }

    /// Check that the index list forms whole triangles over existing vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle(self.indices.len()));
        }
        let vertex_count = self.positions.len();
        for (slot, &index) in self.indices.iter().enumerate() {
            if usize::from(index) >= vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    slot,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Triangles as position triples, in index order. Triangles referencing a
    /// missing vertex are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            let corner = |i: u16| self.positions.get(usize::from(i)).copied();
            Some([corner(tri[0])?, corner(tri[1])?, corner(tri[2])?])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_are_scaled_then_translated() {
        let cases = [
            (Vec3::ZERO, 0.35),
            (Vec3::ZERO, 1.0),
            (Vec3::new(1.5, -2.0, 0.25), 0.5),
            (Vec3::new(-3.0, -0.75, -10.0), 2.0),
            (Vec3::new(100.0, 0.0, -42.5), 0.125),
            (Vec3::new(-0.5, 7.0, 3.0), 16.0),
        ];
        for (p, s) in cases {
            let mesh = generate_cube(p, s);
            assert_eq!(mesh.vertex_count(), 8);
            for (v, c) in mesh.positions().iter().zip(CANONICAL_CORNERS) {
                assert_eq!(*v, p + s * c, "p={p} s={s}");
            }
        }
    }

    #[test]
    fn default_cube_extent_is_exactly_scale() {
        let mesh = generate_cube(Vec3::ZERO, 0.35);
        let max = mesh
            .flat_positions()
            .into_iter()
            .map(f32::abs)
            .fold(0.0_f32, f32::max);
        assert_eq!(max, 0.35);
        assert_eq!(mesh.flat_positions().len(), 24);
    }

    #[test]
    fn indices_cover_every_corner() {
        let mesh = generate_cube(Vec3::ZERO, 1.0);
        assert_eq!(mesh.indices().len(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.indices().iter().all(|&i| i <= 7));
        for corner in 0..8u16 {
            assert!(mesh.indices().contains(&corner), "corner {corner} unused");
        }
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn triangles_face_outward() {
        let center = Vec3::new(3.0, 1.0, -2.0);
        let mesh = generate_cube(center, 2.0);
        for [a, b, c] in mesh.triangles() {
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid - center) > 0.0,
                "inward triangle {a} {b} {c}"
            );
        }
    }

    #[test]
    fn vertices_pair_with_palette() {
        let mesh = generate_cube(Vec3::ZERO, 1.0);
        let verts: Vec<Vertex> = mesh.vertices().collect();
        assert_eq!(verts.len(), 8);
        assert_eq!(verts[0].color, Rgb::CYAN);
        assert_eq!(verts[1].color, Rgb::BLUE);
        assert_eq!(verts[7].color, Rgb::RED);
        assert_eq!(verts[7].position, Vec3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn from_parts_rejects_out_of_range_index() {
        let err = CubeMesh::from_parts(CANONICAL_CORNERS.to_vec(), vec![0, 1, 8]).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                slot: 2,
                index: 8,
                vertex_count: 8
            }
        );
    }

    #[test]
    fn from_parts_rejects_partial_triangle() {
        let err = CubeMesh::from_parts(CANONICAL_CORNERS.to_vec(), vec![0, 1]).unwrap_err();
        assert_eq!(err, MeshError::PartialTriangle(2));
    }

    #[test]
    fn serializes_positions_as_arrays() {
        let mesh = generate_cube(Vec3::ZERO, 1.0);
        let json = serde_json::to_value(&mesh).unwrap();
        assert_eq!(json["positions"][0], serde_json::json!([-1.0, 1.0, 1.0]));
        assert_eq!(json["indices"].as_array().unwrap().len(), 36);
    }

    #[test]
    fn deserialize_rejects_out_of_range_index() {
        let json = r#"{"positions":[[0,0,0]],"indices":[0,1,2]}"#;
        let err = serde_json::from_str::<CubeMesh>(json).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }

    #[test]
    fn deserialize_accepts_generated_mesh() {
        let mesh = generate_cube(Vec3::new(0.5, -1.0, 2.0), 0.35);
        let json = serde_json::to_string(&mesh).unwrap();
        let back: CubeMesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mesh);
        assert_eq!(back.triangles().count(), 12);
    }

    #[test]
    fn triangles_skip_missing_vertices() {
        let mesh = CubeMesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            indices: vec![0, 1, 2, 0, 1, 9],
        };
        let tris: Vec<[Vec3; 3]> = mesh.triangles().collect();
        assert_eq!(tris, vec![[Vec3::ZERO, Vec3::X, Vec3::Y]]);
    }
}
