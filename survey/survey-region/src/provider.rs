//! The geometry capability seam.

use geo::{Centroid, Contains, ConvexHull};
use nalgebra::Point2;
use survey_types::{Polygon, ScanRegion};

use crate::clip;

/// The 2D geometry capabilities the planning pipeline relies on.
///
/// The pipeline asks exactly four questions of its geometry backend, so
/// the seam is kept that narrow. Any mature 2D geometry library can
/// satisfy it; [`GeoProvider`] is the default.
pub trait GeometryProvider {
    /// Convex hull of a point set as a closed polygon.
    ///
    /// Returns `None` when the hull is unavailable or degenerate (fewer
    /// than three distinct points, collinear input). Callers fall back to
    /// a bounding rectangle.
    fn convex_hull(&self, points: &[Point2<f64>]) -> Option<Polygon>;

    /// Whether a point lies strictly inside a polygon.
    ///
    /// Boundary points are outside: a stand-position exactly on the
    /// clearance boundary is not acceptable.
    fn contains(&self, polygon: &Polygon, point: &Point2<f64>) -> bool;

    /// Area centroid of a polygon.
    fn centroid(&self, polygon: &Polygon) -> Point2<f64>;

    /// Shrink a polygon inward by `distance` meters.
    ///
    /// `distance <= 0` returns the polygon unchanged. The result reports
    /// what survived: one piece, several disjoint pieces, or nothing.
    fn offset_inward(&self, polygon: &Polygon, distance: f64) -> ScanRegion;
}

/// Default geometry backend.
///
/// Convex hull, containment, and centroid come from the
/// [`geo`](https://crates.io/crates/geo) crate. The inward offset is
/// half-plane clipping against the polygon's own edges: exact for the
/// convex rings the footprint extractor produces, conservative (never
/// too close to a wall) for concave rings supplied directly. This backend
/// therefore never reports `ScanRegion::Multi`; the variant exists for
/// backends that split concave regions properly.
///
/// # Example
///
/// ```
/// use survey_region::{GeoProvider, GeometryProvider};
/// use survey_types::{Point2, Polygon};
///
/// let provider = GeoProvider::default();
///
/// let hull = provider
///     .convex_hull(&[
///         Point2::new(0.0, 0.0),
///         Point2::new(4.0, 0.0),
///         Point2::new(4.0, 4.0),
///         Point2::new(0.0, 4.0),
///         Point2::new(2.0, 2.0), // interior, dropped by the hull
///     ])
///     .unwrap();
/// assert_eq!(hull.vertex_count(), 4);
///
/// assert!(provider.contains(&hull, &Point2::new(1.0, 1.0)));
/// assert!(!provider.contains(&hull, &Point2::new(0.0, 2.0))); // boundary
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoProvider;

impl GeometryProvider for GeoProvider {
    fn convex_hull(&self, points: &[Point2<f64>]) -> Option<Polygon> {
        if points.len() < 3 {
            return None;
        }
        let multipoint: geo::MultiPoint<f64> = points
            .iter()
            .map(|p| geo::Point::new(p.x, p.y))
            .collect::<Vec<_>>()
            .into();
        let hull = multipoint.convex_hull();
        let ring: Vec<Point2<f64>> = hull
            .exterior()
            .coords()
            .map(|c| Point2::new(c.x, c.y))
            .collect();
        // Degenerate hulls (collinear input) either fail the ring
        // constructor or carry no area.
        let polygon = Polygon::new(ring).ok()?;
        (polygon.area() > f64::EPSILON).then_some(polygon)
    }

    fn contains(&self, polygon: &Polygon, point: &Point2<f64>) -> bool {
        to_geo(polygon).contains(&geo::Point::new(point.x, point.y))
    }

    fn centroid(&self, polygon: &Polygon) -> Point2<f64> {
        to_geo(polygon)
            .centroid()
            .map_or_else(|| polygon.vertex_mean(), |c| Point2::new(c.x(), c.y()))
    }

    fn offset_inward(&self, polygon: &Polygon, distance: f64) -> ScanRegion {
        if distance <= 0.0 {
            return ScanRegion::Single(polygon.clone());
        }
        match clip::inward_clip(polygon, distance) {
            Some(piece) => ScanRegion::Single(piece),
            None => ScanRegion::Empty,
        }
    }
}

fn to_geo(polygon: &Polygon) -> geo::Polygon<f64> {
    let coords: Vec<geo::Coord<f64>> = polygon
        .ring()
        .iter()
        .map(|p| geo::Coord { x: p.x, y: p.y })
        .collect();
    geo::Polygon::new(geo::LineString::new(coords), vec![])
}
