//! Scan stand-position planning over building footprints.
//!
//! This crate turns an active scanning region and a [`ScanConfig`] into an
//! ordered, never-empty sequence of scanner stand-positions, and wires the
//! whole pipeline together: mesh → footprint → clearance offset → candidate
//! generation → visiting order.
//!
//! # Strategies
//!
//! Grid mode sweeps the region at the configured spacing:
//!
//! - **Horizontal** - scan lines bottom to top, serpentine between lines
//! - **Vertical** - scan columns left to right, serpentine between columns
//! - **Both** - a full horizontal pass followed by a full vertical pass
//! - **Grid** - uniform grid points linked by a greedy nearest-neighbor tour
//!
//! Traditional mode grows the spacing until the candidate count fits a
//! point budget, randomly subsamples any remainder (seeded, reproducible),
//! and orders the result with the same greedy tour.
//!
//! Every degenerate case degrades to a single stand-position at a
//! centroid, with a [`PlanAdvisory`](survey_types::PlanAdvisory) attached
//! so the caller can tell a degraded plan from a healthy one.
//!
//! # Example
//!
//! ```
//! use mesh_types::rectangular_room;
//! use survey_plan::plan_survey;
//! use survey_types::{ScanConfig, ScanMode, SweepDirection};
//!
//! let room = rectangular_room(10.0, 10.0, 3.0);
//! let config = ScanConfig::new()
//!     .with_step(2.0)
//!     .with_boundary_clearance(1.0)
//!     .with_mode(ScanMode::Grid {
//!         direction: SweepDirection::Horizontal,
//!     });
//!
//! let plan = plan_survey(&room, &config).unwrap();
//! assert!(!plan.points.is_empty());
//! assert!(plan.advisories.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod grid;
mod pipeline;
mod plan;
mod planner;
mod sample;
mod sweep;

pub use pipeline::plan_survey;
pub use plan::{PlanningContext, SurveyPlan};
pub use planner::plan_scan_path;
