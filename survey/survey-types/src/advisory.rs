//! Caller-visible advisories for degraded fallbacks.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity of a [`PlanAdvisory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdvisorySeverity {
    /// Expected degradation; the plan is still representative.
    Info,
    /// The plan is substantially degraded from what was requested.
    Warning,
}

/// A notice that a planning stage fell back to degraded behavior.
///
/// Every fallback in the pipeline produces one of these, so a degraded
/// plan is never indistinguishable from a fully successful one. The
/// `Display` form is the human-readable message the caller should show.
///
/// # Example
///
/// ```
/// use survey_types::{AdvisorySeverity, PlanAdvisory};
///
/// let advisory = PlanAdvisory::DegenerateOffset { clearance: 6.0 };
/// assert_eq!(advisory.severity(), AdvisorySeverity::Warning);
/// assert!(advisory.to_string().contains("6.00"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlanAdvisory {
    /// The clearance margin left no usable interior; the plan is a single
    /// stand-position at the footprint centroid.
    DegenerateOffset {
        /// The clearance that consumed the footprint, meters.
        clearance: f64,
    },

    /// The chosen strategy produced no in-region candidates at the given
    /// step; the plan is a single stand-position at the region centroid.
    StrategyEmpty {
        /// The spacing that was too coarse for the region, meters.
        step: f64,
    },

    /// Convex hull computation was unavailable or degenerate; the
    /// footprint is the axis-aligned bounding rectangle instead.
    ConvexHullFallback,
}

impl PlanAdvisory {
    /// Severity classification for log routing.
    #[must_use]
    pub const fn severity(&self) -> AdvisorySeverity {
        match self {
            Self::DegenerateOffset { .. } | Self::StrategyEmpty { .. } => {
                AdvisorySeverity::Warning
            }
            Self::ConvexHullFallback => AdvisorySeverity::Info,
        }
    }
}

impl fmt::Display for PlanAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateOffset { clearance } => write!(
                f,
                "boundary clearance {clearance:.2} m leaves no usable interior; \
                 placing a single stand at the footprint centroid"
            ),
            Self::StrategyEmpty { step } => write!(
                f,
                "no stand-positions fit the region at step {step:.2} m; \
                 placing a single stand at the region centroid"
            ),
            Self::ConvexHullFallback => write!(
                f,
                "convex hull unavailable for the ground vertices; \
                 using the bounding rectangle as the footprint"
            ),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn severities() {
        assert_eq!(
            PlanAdvisory::DegenerateOffset { clearance: 1.0 }.severity(),
            AdvisorySeverity::Warning
        );
        assert_eq!(
            PlanAdvisory::StrategyEmpty { step: 2.0 }.severity(),
            AdvisorySeverity::Warning
        );
        assert_eq!(
            PlanAdvisory::ConvexHullFallback.severity(),
            AdvisorySeverity::Info
        );
    }

    #[test]
    fn messages_are_human_readable() {
        let message = PlanAdvisory::StrategyEmpty { step: 2.5 }.to_string();
        assert!(message.contains("2.50"));
        assert!(message.contains("centroid"));

        let message = PlanAdvisory::ConvexHullFallback.to_string();
        assert!(message.contains("bounding rectangle"));
    }
}
