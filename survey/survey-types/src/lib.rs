//! Shared types for LiDAR survey planning.
//!
//! This crate defines the data model that flows through the planning
//! pipeline:
//!
//! - [`Polygon`] - A closed 2D boundary ring (building footprint, offset pieces)
//! - [`ScanRegion`] - The result of inward offsetting: single, multiple, or no pieces
//! - [`ScanPoint`] / [`ScanPath`] - Ordered scanner stand-positions
//! - [`ScanConfig`] - Planning parameters with builder-style construction
//! - [`PlanAdvisory`] - Caller-visible notices for every degraded fallback
//! - [`SurveyError`] - Hard failures that abort a planning run
//!
//! # Layer 0 Crate
//!
//! Pure data types, no GUI, no I/O, no geometry backend. The geometry
//! operations on these types (containment, hulls, offsetting) live in
//! `survey-region`.
//!
//! # Example
//!
//! ```
//! use survey_types::{ScanConfig, ScanMode, SweepDirection};
//!
//! let config = ScanConfig::new()
//!     .with_step(0.5)
//!     .with_boundary_clearance(1.0)
//!     .with_mode(ScanMode::Grid {
//!         direction: SweepDirection::Both,
//!     });
//!
//! assert!(config.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod advisory;
mod config;
mod error;
mod path;
mod polygon;
mod region;

pub use advisory::{AdvisorySeverity, PlanAdvisory};
pub use config::{ScanConfig, ScanMode, SweepDirection};
pub use error::{SurveyError, SurveyResult};
pub use path::{ScanPath, ScanPoint};
pub use polygon::Polygon;
pub use region::ScanRegion;

// Re-export nalgebra's 2D point for convenience
pub use nalgebra::Point2;
