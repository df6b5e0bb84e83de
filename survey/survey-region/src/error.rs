//! Error types for boundary offsetting.

use thiserror::Error;

/// Errors from the boundary offset engine.
///
/// Degenerate offsets are *soft* at the pipeline level: the planner
/// catches this error, falls back to a centroid stand-position, and
/// surfaces an advisory. The engine itself never papers over the
/// condition.
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    /// The clearance margin consumed the entire footprint.
    #[error("boundary clearance {clearance} m leaves no valid interior region")]
    DegenerateOffset {
        /// The clearance that was requested, meters.
        clearance: f64,
    },
}
