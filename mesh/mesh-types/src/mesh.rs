//! Indexed polygonal mesh.

use nalgebra::Point3;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Aabb, MeshError};

/// A single polygonal face: at least three 0-based vertex indices.
///
/// Most faces in practice are triangles or quads, so indices are stored
/// inline up to four entries.
pub type Face = SmallVec<[u32; 4]>;

/// An indexed polygonal mesh.
///
/// This is the input type for survey planning. It stores vertex positions
/// and faces separately, with faces referencing vertices by 0-based index.
/// Faces may have any arity ≥ 3; building exports are frequently a mix of
/// triangles and quads.
///
/// The planning pipeline treats a `Mesh` as immutable for the duration of
/// one run: build it, then hand it to the pipeline by reference.
///
/// # Winding Order
///
/// Faces use counter-clockwise winding when viewed from outside. The
/// planning pipeline only consumes vertex heights, so winding is not
/// enforced.
///
/// # Example
///
/// ```
/// use mesh_types::{Mesh, Point3};
///
/// let mut mesh = Mesh::new();
/// mesh.push_vertex(Point3::new(0.0, 0.0, 0.0));
/// mesh.push_vertex(Point3::new(2.0, 0.0, 0.0));
/// mesh.push_vertex(Point3::new(2.0, 2.0, 0.0));
/// mesh.push_vertex(Point3::new(0.0, 2.0, 0.0));
/// mesh.push_face(&[0, 1, 2, 3]);
///
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Polygonal faces as 0-based indices into the vertex array.
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertex and face lists.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Face, Mesh, Point3};
    ///
    /// let vertices = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let faces = vec![Face::from_slice(&[0, 1, 2])];
    ///
    /// let mesh = Mesh::from_parts(vertices, faces);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Append a vertex and return its index.
    #[inline]
    pub fn push_vertex(&mut self, position: Point3<f64>) -> u32 {
        self.vertices.push(position);
        #[allow(clippy::cast_possible_truncation)]
        let index = (self.vertices.len() - 1) as u32;
        index
    }

    /// Append a face given its vertex indices.
    #[inline]
    pub fn push_face(&mut self, indices: &[u32]) {
        self.faces.push(Face::from_slice(indices));
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Compute the axis-aligned bounding box over all vertices.
    ///
    /// Returns [`Aabb::empty`] for a mesh with no vertices.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{rectangular_room, Point3};
    ///
    /// let room = rectangular_room(4.0, 3.0, 2.5);
    /// let bounds = room.bounds();
    /// assert_eq!(bounds.max, Point3::new(4.0, 3.0, 2.5));
    /// ```
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }

    /// Validate face arity and vertex index ranges.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceTooSmall`] for faces with fewer than three
    /// indices and [`MeshError::FaceIndexOutOfBounds`] for indices past the
    /// end of the vertex array.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::FaceTooSmall {
                    face: face_index,
                    len: face.len(),
                });
            }
            for &index in face {
                if index as usize >= vertex_count {
                    return Err(MeshError::FaceIndexOutOfBounds {
                        face: face_index,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Mean height (z) of a face's vertices.
    ///
    /// Returns `None` if the face index is out of range or the face
    /// references no valid vertices.
    #[must_use]
    pub fn face_mean_height(&self, face_index: usize) -> Option<f64> {
        let face = self.faces.get(face_index)?;
        let mut sum = 0.0;
        let mut count = 0usize;
        for &index in face {
            if let Some(vertex) = self.vertices.get(index as usize) {
                sum += vertex.z;
                count += 1;
            }
        }
        if count == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = sum / count as f64;
        Some(mean)
    }

    /// Fan-triangulate all polygonal faces.
    ///
    /// Faces with more than three vertices are split into a triangle fan
    /// anchored at their first vertex; triangles pass through unchanged.
    /// Downstream scene generators typically require triangle soup even
    /// though planning itself works on polygonal faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::rectangular_room;
    ///
    /// let room = rectangular_room(4.0, 3.0, 2.5);
    /// assert_eq!(room.face_count(), 6); // quads
    ///
    /// let tris = room.triangulated();
    /// assert_eq!(tris.face_count(), 12);
    /// assert!(tris.faces.iter().all(|f| f.len() == 3));
    /// ```
    #[must_use]
    pub fn triangulated(&self) -> Self {
        let mut faces = Vec::with_capacity(self.faces.len());
        for face in &self.faces {
            if face.len() <= 3 {
                faces.push(face.clone());
                continue;
            }
            let anchor = face[0];
            for window in face[1..].windows(2) {
                faces.push(Face::from_slice(&[anchor, window[0], window[1]]));
            }
        }
        Self {
            vertices: self.vertices.clone(),
            faces,
        }
    }
}

/// Build an axis-aligned rectangular room with one corner at the origin.
///
/// The room spans `[0, width] × [0, depth] × [0, height]` and consists of
/// six quad faces (floor, ceiling, four walls). Useful as a test fixture
/// and in examples.
///
/// # Example
///
/// ```
/// use mesh_types::rectangular_room;
///
/// let room = rectangular_room(10.0, 10.0, 3.0);
/// assert_eq!(room.vertex_count(), 8);
/// assert_eq!(room.face_count(), 6);
/// assert!(room.validate().is_ok());
/// ```
#[must_use]
pub fn rectangular_room(width: f64, depth: f64, height: f64) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 6);
    // Bottom ring, then top ring.
    mesh.push_vertex(Point3::new(0.0, 0.0, 0.0));
    mesh.push_vertex(Point3::new(width, 0.0, 0.0));
    mesh.push_vertex(Point3::new(width, depth, 0.0));
    mesh.push_vertex(Point3::new(0.0, depth, 0.0));
    mesh.push_vertex(Point3::new(0.0, 0.0, height));
    mesh.push_vertex(Point3::new(width, 0.0, height));
    mesh.push_vertex(Point3::new(width, depth, height));
    mesh.push_vertex(Point3::new(0.0, depth, height));

    mesh.push_face(&[0, 3, 2, 1]); // floor (normal down)
    mesh.push_face(&[4, 5, 6, 7]); // ceiling
    mesh.push_face(&[0, 1, 5, 4]); // south wall
    mesh.push_face(&[1, 2, 6, 5]); // east wall
    mesh.push_face(&[2, 3, 7, 6]); // north wall
    mesh.push_face(&[3, 0, 4, 7]); // west wall
    mesh
}
