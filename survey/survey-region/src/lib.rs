//! Geometry provider and boundary offsetting for survey planning.
//!
//! This crate supplies the 2D computational geometry the planning pipeline
//! needs, behind a narrow seam:
//!
//! - [`GeometryProvider`] - the capability interface: convex hull,
//!   containment, centroid, inward offset
//! - [`GeoProvider`] - the default implementation, backed by the
//!   [`geo`](https://crates.io/crates/geo) crate plus half-plane clipping
//!   for the inward offset
//! - [`shrink_to_active_region`] - the boundary offset engine: shrink a
//!   footprint by a wall clearance, select the largest surviving piece,
//!   and signal degeneracy explicitly
//!
//! # Why a provider trait
//!
//! The planner only ever asks four questions of its geometry library.
//! Keeping them behind a trait means any mature 2D geometry backend can
//! satisfy the pipeline, and the degenerate-input fallbacks can be tested
//! without one.
//!
//! # Example
//!
//! ```
//! use survey_region::{shrink_to_active_region, GeoProvider};
//! use survey_types::{Point2, Polygon};
//!
//! let footprint = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ])
//! .unwrap();
//!
//! let provider = GeoProvider::default();
//! let region = shrink_to_active_region(&footprint, 1.0, &provider).unwrap();
//! assert!((region.area() - 64.0).abs() < 1e-9);
//!
//! // A clearance past the inscribed radius is an explicit signal,
//! // never a silent sliver.
//! assert!(shrink_to_active_region(&footprint, 6.0, &provider).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod clip;
mod error;
mod offset;
mod provider;

pub use error::RegionError;
pub use offset::shrink_to_active_region;
pub use provider::{GeoProvider, GeometryProvider};
