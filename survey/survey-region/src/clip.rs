//! Half-plane clipping for inward polygon offsets.
//!
//! The inward offset of a simple polygon is computed by clipping the
//! polygon against each of its edges shifted inward by the offset
//! distance. For convex rings this is exact, and the footprint extractor
//! only produces convex rings (hulls and rectangles). Concave rings are
//! clipped conservatively: the result never extends past any shifted
//! edge, so stand-positions stay clear of every wall.

use nalgebra::{Point2, Vector2};
use survey_types::Polygon;

/// Areas below this are treated as nothing left.
const AREA_EPSILON: f64 = 1e-9;

/// Consecutive clip vertices closer than this collapse into one.
const MERGE_EPSILON: f64 = 1e-9;

/// Shrink a polygon inward by `distance`, or report that nothing remains.
pub(crate) fn inward_clip(polygon: &Polygon, distance: f64) -> Option<Polygon> {
    let mut subject: Vec<Point2<f64>> = polygon.vertices().to_vec();
    if polygon.signed_area() < 0.0 {
        subject.reverse();
    }

    // Clip against every original edge, shifted inward. The interior of a
    // counter-clockwise ring lies to the left of each edge.
    let mut ring = subject.clone();
    ring.push(subject[0]);
    for pair in ring.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let edge = b - a;
        let len = edge.norm();
        if len <= MERGE_EPSILON {
            continue;
        }
        let normal = Vector2::new(-edge.y, edge.x) / len;
        let origin = a + normal * distance;
        subject = clip_half_plane(&subject, origin, normal);
        if subject.len() < 3 {
            return None;
        }
    }

    merge_close_vertices(&mut subject);
    if subject.len() < 3 {
        return None;
    }
    let result = Polygon::new(subject).ok()?;
    (result.area() > AREA_EPSILON).then_some(result)
}

/// Sutherland-Hodgman step: keep the side where `dot(p - origin, normal) >= 0`.
fn clip_half_plane(
    subject: &[Point2<f64>],
    origin: Point2<f64>,
    normal: Vector2<f64>,
) -> Vec<Point2<f64>> {
    let mut output = Vec::with_capacity(subject.len() + 1);
    for i in 0..subject.len() {
        let current = subject[i];
        let next = subject[(i + 1) % subject.len()];
        let current_inside = (current - origin).dot(&normal) >= 0.0;
        let next_inside = (next - origin).dot(&normal) >= 0.0;

        if current_inside {
            output.push(current);
            if !next_inside {
                if let Some(hit) = intersect(current, next, origin, normal) {
                    output.push(hit);
                }
            }
        } else if next_inside {
            if let Some(hit) = intersect(current, next, origin, normal) {
                output.push(hit);
            }
        }
    }
    output
}

/// Intersection of segment `from -> to` with the half-plane boundary line.
fn intersect(
    from: Point2<f64>,
    to: Point2<f64>,
    origin: Point2<f64>,
    normal: Vector2<f64>,
) -> Option<Point2<f64>> {
    let direction = to - from;
    let denom = direction.dot(&normal);
    if denom.abs() < f64::EPSILON {
        return None;
    }
    let t = (origin - from).dot(&normal) / denom;
    Some(from + direction * t)
}

/// Collapse consecutive vertices (including the wrap-around pair) that the
/// clip left almost coincident.
fn merge_close_vertices(points: &mut Vec<Point2<f64>>) {
    points.dedup_by(|a, b| (*a - *b).norm() <= MERGE_EPSILON);
    while points.len() > 1 {
        let first = points[0];
        let last = points[points.len() - 1];
        if (first - last).norm() <= MERGE_EPSILON {
            points.pop();
        } else {
            break;
        }
    }
}
