//! The boundary offset engine.

use tracing::{debug, warn};

use survey_types::{Polygon, ScanRegion};

use crate::{GeometryProvider, RegionError};

/// Shrink a footprint inward by a wall clearance and select the active
/// scanning region.
///
/// - A clearance of exactly zero returns the footprint unchanged.
/// - If the offset splits the footprint into disjoint pieces, the piece
///   with the largest area becomes the active region and the rest are
///   discarded.
/// - If nothing usable survives, the degenerate condition is reported
///   explicitly; the caller's documented fallback is a single
///   stand-position at the footprint centroid.
///
/// # Errors
///
/// Returns [`RegionError::DegenerateOffset`] when the clearance exceeds
/// what the footprint can absorb (empty or zero-area result).
///
/// # Example
///
/// ```
/// use survey_region::{shrink_to_active_region, GeoProvider};
/// use survey_types::{Point2, Polygon};
///
/// let footprint = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ])
/// .unwrap();
/// let provider = GeoProvider::default();
///
/// // Zero clearance: the footprint itself, pointwise.
/// let region = shrink_to_active_region(&footprint, 0.0, &provider).unwrap();
/// assert_eq!(region, footprint);
///
/// let region = shrink_to_active_region(&footprint, 1.0, &provider).unwrap();
/// assert!((region.area() - 64.0).abs() < 1e-9);
/// ```
pub fn shrink_to_active_region<P: GeometryProvider>(
    footprint: &Polygon,
    clearance: f64,
    provider: &P,
) -> Result<Polygon, RegionError> {
    if clearance == 0.0 {
        return Ok(footprint.clone());
    }

    let region = provider.offset_inward(footprint, clearance);
    let piece_count = region.piece_count();
    match region {
        ScanRegion::Empty => {
            warn!(clearance, "clearance consumed the footprint");
            Err(RegionError::DegenerateOffset { clearance })
        }
        other => {
            if piece_count > 1 {
                debug!(
                    pieces = piece_count,
                    "offset split the footprint; keeping the largest piece"
                );
            }
            let piece = other
                .into_largest_piece()
                .ok_or(RegionError::DegenerateOffset { clearance })?;
            if piece.area() > 0.0 {
                debug!(
                    clearance,
                    area = piece.area(),
                    "active scanning region ready"
                );
                Ok(piece)
            } else {
                warn!(clearance, "offset produced a zero-area region");
                Err(RegionError::DegenerateOffset { clearance })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::GeoProvider;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn square(side: f64) -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(side, 0.0),
            Point2::new(side, side),
            Point2::new(0.0, side),
        ])
        .unwrap()
    }

    #[test]
    fn zero_clearance_is_pointwise_identity() {
        let footprint = square(10.0);
        let region = shrink_to_active_region(&footprint, 0.0, &GeoProvider).unwrap();
        assert_eq!(region.ring(), footprint.ring());
    }

    #[test]
    fn positive_clearance_shrinks() {
        let region = shrink_to_active_region(&square(10.0), 1.0, &GeoProvider).unwrap();
        let (min, max) = region.bounds();
        assert_relative_eq!(min.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(max.y, 9.0, epsilon = 1e-9);
    }

    #[test]
    fn excessive_clearance_is_signaled() {
        let result = shrink_to_active_region(&square(10.0), 6.0, &GeoProvider);
        assert_eq!(
            result,
            Err(RegionError::DegenerateOffset { clearance: 6.0 })
        );
    }

    #[test]
    fn clearance_at_inscribed_radius_is_signaled() {
        // Half-width of the 10x10 square; the interior collapses to a point.
        let result = shrink_to_active_region(&square(10.0), 5.0, &GeoProvider);
        assert!(result.is_err());
    }

    /// A backend that splits the region, to exercise largest-piece selection.
    struct SplittingProvider;

    impl GeometryProvider for SplittingProvider {
        fn convex_hull(&self, _points: &[Point2<f64>]) -> Option<Polygon> {
            None
        }

        fn contains(&self, _polygon: &Polygon, _point: &Point2<f64>) -> bool {
            false
        }

        fn centroid(&self, polygon: &Polygon) -> Point2<f64> {
            polygon.vertex_mean()
        }

        fn offset_inward(&self, _polygon: &Polygon, _distance: f64) -> ScanRegion {
            let small = Polygon::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ])
            .unwrap();
            let large = Polygon::new(vec![
                Point2::new(4.0, 0.0),
                Point2::new(9.0, 0.0),
                Point2::new(9.0, 5.0),
                Point2::new(4.0, 5.0),
            ])
            .unwrap();
            ScanRegion::Multi(vec![small, large])
        }
    }

    #[test]
    fn multi_piece_selects_largest() {
        let region = shrink_to_active_region(&square(10.0), 1.0, &SplittingProvider).unwrap();
        assert_relative_eq!(region.area(), 25.0, epsilon = 1e-12);
    }
}
