//! Footprint extraction.

use mesh_types::Mesh;
use nalgebra::Point2;
use survey_region::GeometryProvider;
use survey_types::{PlanAdvisory, Polygon, SurveyError, SurveyResult};
use tracing::{debug, info};

use crate::FootprintParams;

/// Extents below this are a zero-area projection.
const EXTENT_EPSILON: f64 = 1e-9;

/// The extracted floor plan.
#[derive(Debug, Clone)]
pub struct Footprint {
    /// The footprint boundary, a closed ring with ≥ 3 distinct vertices.
    pub polygon: Polygon,
    /// The estimated ground height used for face classification.
    pub ground_height: f64,
    /// Number of projected vertices that contributed to the boundary.
    pub ground_vertex_count: usize,
    /// Advisories for any degraded fallback taken during extraction.
    pub advisories: Vec<PlanAdvisory>,
}

/// Extract the 2D floor plan of a building mesh.
///
/// Faces whose mean vertex height lies within
/// [`FootprintParams::height_tolerance`] of the estimated ground height
/// contribute their vertices to the footprint; if no face qualifies, the
/// entire vertex set is used instead. The boundary is the convex hull of
/// the projected vertices, or their bounding rectangle (corner order
/// min/min, max/min, max/max, min/max) when the hull is degenerate.
///
/// # Errors
///
/// - [`SurveyError::EmptyMesh`] if the mesh has no vertices.
/// - [`SurveyError::DegenerateProjection`] if the vertices project to a
///   zero-area extent (all coincident, or collinear along an axis).
///
/// # Example
///
/// ```
/// use mesh_types::rectangular_room;
/// use survey_footprint::{extract_footprint, FootprintParams};
/// use survey_region::GeoProvider;
///
/// let room = rectangular_room(10.0, 10.0, 3.0);
/// let footprint =
///     extract_footprint(&room, &FootprintParams::default(), &GeoProvider).unwrap();
///
/// let ring = footprint.polygon.ring();
/// assert_eq!(ring.first(), ring.last());
/// assert!(footprint.polygon.vertex_count() >= 3);
/// ```
pub fn extract_footprint<P: GeometryProvider>(
    mesh: &Mesh,
    params: &FootprintParams,
    provider: &P,
) -> SurveyResult<Footprint> {
    if mesh.is_empty() {
        return Err(SurveyError::EmptyMesh);
    }

    let mut heights: Vec<f64> = mesh.vertices.iter().map(|v| v.z).collect();
    heights.sort_by(f64::total_cmp);
    let ground_height = percentile(&heights, params.ground_percentile);

    // Vertices of every face whose mean height sits in the ground band.
    let mut ground_vertices: Vec<Point2<f64>> = Vec::new();
    for face_index in 0..mesh.face_count() {
        let Some(mean) = mesh.face_mean_height(face_index) else {
            continue;
        };
        if (mean - ground_height).abs() < params.height_tolerance {
            for &index in &mesh.faces[face_index] {
                if let Some(vertex) = mesh.vertices.get(index as usize) {
                    ground_vertices.push(Point2::new(vertex.x, vertex.y));
                }
            }
        }
    }

    let mut used_all_vertices = ground_vertices.is_empty();
    if used_all_vertices {
        debug!("no faces in the ground band; using the entire vertex set");
        ground_vertices = project_all(mesh);
    }

    // A ground band that projects to a line (a single wall strip, say) is
    // not a usable outline; retry with the full vertex set before giving up.
    if !used_all_vertices && extent_is_degenerate(&ground_vertices) {
        debug!("ground band projects to a degenerate extent; using the entire vertex set");
        ground_vertices = project_all(mesh);
        used_all_vertices = true;
    }
    if extent_is_degenerate(&ground_vertices) {
        return Err(SurveyError::DegenerateProjection);
    }

    let mut advisories = Vec::new();
    let polygon = match provider.convex_hull(&ground_vertices) {
        Some(hull) => hull,
        None => {
            let advisory = PlanAdvisory::ConvexHullFallback;
            info!("{advisory}");
            advisories.push(advisory);
            bounding_rectangle(&ground_vertices)?
        }
    };

    info!(
        ground_height,
        ground_vertices = ground_vertices.len(),
        boundary_vertices = polygon.vertex_count(),
        used_all_vertices,
        "extracted floor plan"
    );

    Ok(Footprint {
        polygon,
        ground_height,
        ground_vertex_count: ground_vertices.len(),
        advisories,
    })
}

fn project_all(mesh: &Mesh) -> Vec<Point2<f64>> {
    mesh.vertices
        .iter()
        .map(|v| Point2::new(v.x, v.y))
        .collect()
}

/// Linear-interpolated percentile of pre-sorted values.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lo = rank.floor() as usize;
    let hi = lo + 1;
    if hi >= sorted.len() {
        return sorted[sorted.len() - 1];
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * fraction
}

fn extent_is_degenerate(points: &[Point2<f64>]) -> bool {
    let (min, max) = extent(points);
    max.x - min.x <= EXTENT_EPSILON || max.y - min.y <= EXTENT_EPSILON
}

fn extent(points: &[Point2<f64>]) -> (Point2<f64>, Point2<f64>) {
    let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

/// Axis-aligned bounding rectangle in fixed rotational corner order.
fn bounding_rectangle(points: &[Point2<f64>]) -> SurveyResult<Polygon> {
    let (min, max) = extent(points);
    if max.x - min.x <= EXTENT_EPSILON || max.y - min.y <= EXTENT_EPSILON {
        return Err(SurveyError::DegenerateProjection);
    }
    Polygon::new(vec![
        Point2::new(min.x, min.y),
        Point2::new(max.x, min.y),
        Point2::new(max.x, max.y),
        Point2::new(min.x, max.y),
    ])
}
