//! Planning results.

use mesh_types::Aabb;
use survey_types::{PlanAdvisory, Polygon, ScanConfig, ScanPath};

/// Immutable snapshot of everything one planning run derived on its way
/// from mesh to scan path.
///
/// Each run owns its context; nothing here is shared between runs. The
/// external survey serializer and path visualizer read the footprint and
/// active region from this snapshot.
#[derive(Debug, Clone)]
pub struct PlanningContext {
    /// Bounding box of the input mesh.
    pub bounds: Aabb,
    /// Estimated ground height used for footprint extraction.
    pub ground_height: f64,
    /// The extracted building footprint.
    pub footprint: Polygon,
    /// The clearance-shrunk region stands were planned in. Equal to the
    /// footprint when the clearance is zero, or when the clearance
    /// consumed the footprint and the plan fell back to its centroid.
    pub active_region: Polygon,
}

/// A completed survey plan.
///
/// Carries the ordered stand-positions, the configuration actually used
/// (for the caller's logging and serialization), the planning context for
/// visualization, and an advisory for every fallback taken. A plan with
/// an empty advisory list ran fully as configured.
#[derive(Debug, Clone)]
pub struct SurveyPlan {
    /// Echo of the configuration this plan was built with.
    pub config: ScanConfig,
    /// Derived geometry snapshot.
    pub context: PlanningContext,
    /// Ordered stand-positions; never empty.
    pub points: ScanPath,
    /// Advisories for degraded fallbacks, in the order they occurred.
    pub advisories: Vec<PlanAdvisory>,
}

impl SurveyPlan {
    /// Number of stand-positions.
    #[must_use]
    pub fn stand_count(&self) -> usize {
        self.points.len()
    }

    /// The uniform stand height for every position, meters.
    #[must_use]
    pub const fn z_height(&self) -> f64 {
        self.config.z_height()
    }

    /// Total walking distance visiting the stands in order, meters.
    #[must_use]
    pub fn travel_length(&self) -> f64 {
        self.points.length()
    }

    /// Whether any stage fell back to degraded behavior.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.advisories.is_empty()
    }
}
