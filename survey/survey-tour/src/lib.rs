//! Visiting-order heuristics for scan stand-positions.
//!
//! A scanner on a tripod is carried from stand to stand, so candidate
//! positions should be visited in an order that keeps travel short. Two
//! heuristics cover the planner's needs:
//!
//! - [`serpentine`] - alternate direction between adjacent scan lines;
//!   used inside the horizontal and vertical sweep strategies
//! - [`nearest_neighbor_tour`] - greedy closest-next-stop construction;
//!   used for grid-point and traditional plans
//!
//! Both are permutations: no point is added or dropped, only reordered.
//! Neither claims global optimality; candidate counts are bounded by the
//! step spacing and point budgets, so the O(n²) greedy construction is
//! plenty, and no two-opt style refinement is applied.
//!
//! # Example
//!
//! ```
//! use survey_tour::{nearest_neighbor_tour, path_length};
//! use survey_types::ScanPoint;
//!
//! let scattered = vec![
//!     ScanPoint::new(0.0, 0.0),
//!     ScanPoint::new(9.0, 0.0),
//!     ScanPoint::new(1.0, 0.0),
//!     ScanPoint::new(8.0, 0.0),
//! ];
//!
//! let ordered = nearest_neighbor_tour(scattered.clone());
//! assert!(path_length(&ordered) <= path_length(&scattered));
//! assert_eq!(ordered.len(), scattered.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod greedy;
mod serpentine;

pub use greedy::{nearest_neighbor_tour, path_length};
pub use serpentine::serpentine;
