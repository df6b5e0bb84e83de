//! Floor-plan extraction from building meshes.
//!
//! Given a 3D building mesh, derive the 2D footprint polygon that the rest
//! of the survey pipeline plans over:
//!
//! 1. Estimate the ground height as a low percentile of all vertex
//!    heights, which shrugs off a handful of outlier low vertices.
//! 2. Collect the vertices of every face whose mean height sits within a
//!    small tolerance of the ground.
//! 3. Project those vertices to 2D and take their convex hull; fall back
//!    to the bounding rectangle when the hull is unavailable.
//!
//! # Known limitation
//!
//! The footprint is a convex hull, so concave floor plans (L-shapes,
//! courtyards) are over-approximated by their convex closure. This matches
//! the behavior of the survey tool this pipeline reimplements and is
//! deliberate; plan positions may fall outside the true walls of a highly
//! concave building.
//!
//! # Example
//!
//! ```
//! use mesh_types::rectangular_room;
//! use survey_footprint::{extract_footprint, FootprintParams};
//! use survey_region::GeoProvider;
//!
//! let room = rectangular_room(10.0, 8.0, 3.0);
//! let footprint =
//!     extract_footprint(&room, &FootprintParams::default(), &GeoProvider).unwrap();
//!
//! assert!((footprint.polygon.area() - 80.0).abs() < 1e-9);
//! assert!(footprint.advisories.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod extract;
mod params;

pub use extract::{extract_footprint, Footprint};
pub use params::FootprintParams;
