//! Ordered scanner stand-positions.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single 2D scanner stand-position.
///
/// The stand height is uniform across a plan and carried separately in the
/// configuration, so positions are plain 2D points.
pub type ScanPoint = Point2<f64>;

/// An ordered sequence of scanner stand-positions.
///
/// Sequence order is visiting order. A delivered plan always contains at
/// least one point (degenerate inputs fall back to a single centroid
/// position), but the type itself permits emptiness for intermediate
/// stages.
///
/// # Example
///
/// ```
/// use survey_types::{ScanPath, ScanPoint};
///
/// let path = ScanPath::new(vec![
///     ScanPoint::new(0.0, 0.0),
///     ScanPoint::new(3.0, 4.0),
///     ScanPoint::new(3.0, 8.0),
/// ]);
///
/// assert_eq!(path.len(), 3);
/// assert!((path.length() - 9.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanPath {
    points: Vec<ScanPoint>,
}

impl ScanPath {
    /// Create a path from an ordered point list.
    #[inline]
    #[must_use]
    pub const fn new(points: Vec<ScanPoint>) -> Self {
        Self { points }
    }

    /// The ordered points.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[ScanPoint] {
        &self.points
    }

    /// Number of stand-positions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path contains no positions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First position, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&ScanPoint> {
        self.points.first()
    }

    /// Last position, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&ScanPoint> {
        self.points.last()
    }

    /// Total travel distance visiting the points in order.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }

    /// Consume the path, returning the point list.
    #[inline]
    #[must_use]
    pub fn into_points(self) -> Vec<ScanPoint> {
        self.points
    }
}

impl From<Vec<ScanPoint>> for ScanPath {
    fn from(points: Vec<ScanPoint>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a ScanPath {
    type Item = &'a ScanPoint;
    type IntoIter = std::slice::Iter<'a, ScanPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_path() {
        let path = ScanPath::default();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_relative_eq!(path.length(), 0.0);
        assert!(path.first().is_none());
    }

    #[test]
    fn single_point_has_zero_length() {
        let path = ScanPath::new(vec![ScanPoint::new(2.0, 3.0)]);
        assert_eq!(path.len(), 1);
        assert_relative_eq!(path.length(), 0.0);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn length_sums_segments() {
        let path = ScanPath::new(vec![
            ScanPoint::new(0.0, 0.0),
            ScanPoint::new(3.0, 4.0),
            ScanPoint::new(3.0, 8.0),
        ]);
        assert_relative_eq!(path.length(), 9.0);
    }

    #[test]
    fn iteration_preserves_order() {
        let points = vec![
            ScanPoint::new(0.0, 0.0),
            ScanPoint::new(1.0, 0.0),
            ScanPoint::new(2.0, 0.0),
        ];
        let path = ScanPath::from(points.clone());
        let collected: Vec<ScanPoint> = path.into_iter().copied().collect();
        assert_eq!(collected, points);
    }
}
