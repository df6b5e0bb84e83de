//! Error types for survey planning.

use thiserror::Error;

/// Result type for planning operations.
pub type SurveyResult<T> = Result<T, SurveyError>;

/// Hard failures that abort a planning run.
///
/// Soft conditions (degenerate offset regions, empty strategies, hull
/// fallbacks) are never errors; they are handled locally with a documented
/// fallback and surfaced as [`PlanAdvisory`](crate::PlanAdvisory) values.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// The input mesh has no vertices.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// All vertices project to a zero-area footprint (coincident or
    /// collinear input).
    #[error("projected footprint has zero area")]
    DegenerateProjection,

    /// A boundary polygon has fewer than three distinct vertices.
    #[error("polygon needs at least 3 distinct vertices, got {distinct}")]
    DegeneratePolygon {
        /// Number of distinct vertices found.
        distinct: usize,
    },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input mesh failed structural validation.
    #[error(transparent)]
    Mesh(#[from] mesh_types::MeshError),
}
