//! Mesh Generator: one colored cube, produced once at startup.
//!
//! # Invariants
//! - Every index is in `[0, vertex_count)`.
//! - Output vertex `i` equals `position + scale * CANONICAL_CORNERS[i]`.
//! - Triangle winding is counter-clockwise seen from outside, so back-face
//!   culling keeps the outer faces.

mod cube;

pub use cube::{
    CANONICAL_CORNERS, CORNER_COLORS, CUBE_INDICES, CubeMesh, MeshError, Vertex, generate_cube,
};

pub fn crate_info() -> &'static str {
    "spincube-mesh v0.1.0"
}
