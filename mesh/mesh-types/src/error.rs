//! Error types for mesh validation.

use thiserror::Error;

/// Errors reported by [`Mesh::validate`](crate::Mesh::validate).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A face references a vertex index outside the vertex array.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfBounds {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face has fewer than three vertex indices.
    #[error("face {face} has only {len} vertices, minimum is 3")]
    FaceTooSmall {
        /// Index of the offending face.
        face: usize,
        /// Number of indices the face carries.
        len: usize,
    },
}
