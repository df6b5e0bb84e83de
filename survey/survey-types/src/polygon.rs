//! Closed 2D boundary polygon.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{SurveyError, SurveyResult};

/// A closed 2D boundary polygon.
///
/// Stored as an explicit ring: the first point is repeated as the last
/// point. Winding is unconstrained. The ring is assumed simple
/// (non-self-intersecting) but this is not enforced; the footprint
/// extractor only ever produces convex hulls and axis-aligned rectangles,
/// both of which are simple by construction.
///
/// # Example
///
/// ```
/// use survey_types::{Point2, Polygon};
///
/// // An open vertex list is closed automatically.
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ])
/// .unwrap();
///
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square.ring().len(), 5);
/// assert!((square.area() - 100.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Ring points; `points[0] == points[len - 1]`.
    points: Vec<Point2<f64>>,
}

impl Polygon {
    /// Create a polygon from a vertex list, closing the ring if needed.
    ///
    /// Accepts either an open vertex list or an already-closed ring
    /// (first point repeated at the end).
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::DegeneratePolygon`] if fewer than three
    /// distinct vertices remain.
    #[allow(clippy::float_cmp)]
    pub fn new(mut points: Vec<Point2<f64>>) -> SurveyResult<Self> {
        let closed = points.len() >= 2
            && points[0].x == points[points.len() - 1].x
            && points[0].y == points[points.len() - 1].y;
        if !closed {
            let first = match points.first() {
                Some(p) => *p,
                None => return Err(SurveyError::DegeneratePolygon { distinct: 0 }),
            };
            points.push(first);
        }

        let distinct = distinct_count(&points[..points.len() - 1]);
        if distinct < 3 {
            return Err(SurveyError::DegeneratePolygon { distinct });
        }
        Ok(Self { points })
    }

    /// The closed ring, first point repeated at the end.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// The vertices without the closing repeat.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.points[..self.points.len() - 1]
    }

    /// Number of vertices (closing repeat not counted).
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Signed area via the shoelace formula.
    ///
    /// Positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let mut sum = 0.0;
        for pair in self.points.windows(2) {
            sum += pair[0].x * pair[1].y - pair[1].x * pair[0].y;
        }
        sum * 0.5
    }

    /// Unsigned area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Total boundary length.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }

    /// Axis-aligned bounds of the ring as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (Point2<f64>, Point2<f64>) {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in self.vertices() {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Mean of the ring vertices.
    ///
    /// A cheap stand-in for the area centroid when a geometry backend is
    /// unavailable or reports a degenerate result; exact for rectangles.
    #[must_use]
    pub fn vertex_mean(&self) -> Point2<f64> {
        let vertices = self.vertices();
        let mut sum = Point2::new(0.0, 0.0);
        for p in vertices {
            sum.x += p.x;
            sum.y += p.y;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = vertices.len() as f64;
        Point2::new(sum.x / n, sum.y / n)
    }
}

/// Count pairwise-distinct points by exact coordinate equality.
#[allow(clippy::float_cmp)]
fn distinct_count(points: &[Point2<f64>]) -> usize {
    let mut distinct: Vec<Point2<f64>> = Vec::new();
    for p in points {
        if !distinct.iter().any(|q| q.x == p.x && q.y == p.y) {
            distinct.push(*p);
        }
    }
    distinct.len()
}
