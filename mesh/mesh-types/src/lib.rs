//! Core mesh types for survey planning.
//!
//! This crate provides the input-geometry types consumed by the survey
//! planning pipeline:
//!
//! - [`Mesh`] - A polygonal mesh with indexed vertices
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with zero GUI or I/O dependencies. Mesh loading
//! (OBJ parsing, encoding detection) is the job of an external collaborator;
//! this crate starts from vertex and face lists that are already numeric
//! and 0-based.
//!
//! # Units
//!
//! All coordinates are `f64` meters.
//!
//! # Coordinate System
//!
//! Right-handed, Z-up:
//! - X: east/west
//! - Y: north/south
//! - Z: height
//!
//! # Example
//!
//! ```
//! use mesh_types::{Mesh, Point3};
//!
//! let mut mesh = Mesh::new();
//! mesh.push_vertex(Point3::new(0.0, 0.0, 0.0));
//! mesh.push_vertex(Point3::new(1.0, 0.0, 0.0));
//! mesh.push_vertex(Point3::new(0.5, 1.0, 0.0));
//! mesh.push_face(&[0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod mesh;

pub use bounds::Aabb;
pub use error::MeshError;
pub use mesh::{rectangular_room, Face, Mesh};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
