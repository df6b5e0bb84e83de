//! Uniform-grid candidate generation.
//!
//! Used by the grid-point sweep direction and by traditional mode. Points
//! are produced in x-major order; visiting order is applied afterwards by
//! the planner.

use rand::seq::SliceRandom;
use rand::Rng;
use survey_region::GeometryProvider;
use survey_types::{Polygon, ScanPoint};
use tracing::debug;

use crate::sample::arange;

/// Multiplier applied to the step when traditional mode overshoots its
/// point budget.
const STEP_GROWTH: f64 = 1.2;

/// Maximum step-adaptation attempts in traditional mode.
const MAX_ATTEMPTS: usize = 10;

/// In-region points of a uniform grid at `min + step/2` offsets.
pub(crate) fn grid_points<P: GeometryProvider>(
    region: &Polygon,
    step: f64,
    provider: &P,
) -> Vec<ScanPoint> {
    let (min, max) = region.bounds();
    let xs = arange(min.x + step / 2.0, max.x, step);
    let ys = arange(min.y + step / 2.0, max.y, step);

    let mut points = Vec::new();
    for &x in &xs {
        for &y in &ys {
            let candidate = ScanPoint::new(x, y);
            if provider.contains(region, &candidate) {
                points.push(candidate);
            }
        }
    }

    debug!(
        grid = format!("{}x{}", xs.len(), ys.len()),
        in_region = points.len(),
        "uniform grid sampled"
    );
    points
}

/// Traditional-mode candidates: adapt the step to a point budget, then
/// randomly subsample any remainder.
///
/// The grid is re-sampled with the step grown by 20% per attempt until the
/// in-region count fits `max_points` (up to ten attempts). A final
/// subsample trims whatever still exceeds the budget; its order is
/// incidental because the planner reorders the result anyway.
pub(crate) fn traditional_points<P: GeometryProvider, R: Rng>(
    region: &Polygon,
    step: f64,
    max_points: usize,
    provider: &P,
    rng: &mut R,
) -> Vec<ScanPoint> {
    let (min, max) = region.bounds();

    let mut current_step = step;
    let mut candidates = Vec::new();
    for attempt in 0..MAX_ATTEMPTS {
        let half = current_step / 2.0;
        let xs = arange(min.x + half, max.x - half, current_step);
        let ys = arange(min.y + half, max.y - half, current_step);

        candidates.clear();
        for &x in &xs {
            for &y in &ys {
                let candidate = ScanPoint::new(x, y);
                if provider.contains(region, &candidate) {
                    candidates.push(candidate);
                }
            }
        }

        if candidates.len() <= max_points {
            debug!(
                attempt,
                step = current_step,
                candidates = candidates.len(),
                "step adaptation converged"
            );
            break;
        }
        current_step *= STEP_GROWTH;
    }

    if candidates.len() > max_points {
        debug!(
            candidates = candidates.len(),
            max_points, "budget still exceeded; subsampling"
        );
        candidates = candidates
            .choose_multiple(rng, max_points)
            .copied()
            .collect();
    }

    candidates
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use nalgebra::Point2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use survey_region::GeoProvider;

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
    fn grid_covers_the_square() {
        let points = grid_points(&square(10.0), 2.0, &GeoProvider);

        // 5x5 grid at 1, 3, 5, 7, 9 on both axes.
        assert_eq!(points.len(), 25);
        assert_eq!(points[0], ScanPoint::new(1.0, 1.0));
        // x-major generation order.
        assert_eq!(points[1], ScanPoint::new(1.0, 3.0));
        assert_eq!(points[5], ScanPoint::new(3.0, 1.0));
    }

    #[test]
    fn grid_respects_containment() {
        let triangle = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap();

        let points = grid_points(&triangle, 2.0, &GeoProvider);
        assert!(!points.is_empty());
        assert!(points.len() < 25);
        for p in &points {
            // Strictly inside the hypotenuse x + y = 10.
            assert!(p.x + p.y < 10.0);
        }
    }

    #[test]
    fn traditional_adapts_step_to_budget() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = traditional_points(&square(10.0), 1.0, 5, &GeoProvider, &mut rng);

        // Step growth 1.0 -> ~3.58 leaves a 2x2 grid.
        assert_eq!(points.len(), 4);
        for p in &points {
            assert!(p.x > 0.0 && p.x < 10.0);
            assert!(p.y > 0.0 && p.y < 10.0);
        }
    }

    #[test]
    fn traditional_within_budget_keeps_everything() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = traditional_points(&square(10.0), 4.0, 100, &GeoProvider, &mut rng);

        // arange(2, 8, 4) = [2, 6] on both axes.
        assert_eq!(points.len(), 4);
        assert!(points.contains(&ScanPoint::new(2.0, 2.0)));
        assert!(points.contains(&ScanPoint::new(6.0, 6.0)));
    }

    #[test]
    fn traditional_subsamples_when_adaptation_is_not_enough() {
        // A tiny step cannot grow past the budget in ten attempts.
        let mut rng = StdRng::seed_from_u64(7);
        let points = traditional_points(&square(10.0), 0.1, 10, &GeoProvider, &mut rng);

        assert_eq!(points.len(), 10);
    }

    #[test]
    fn traditional_subsample_is_reproducible() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            traditional_points(&square(10.0), 0.1, 10, &GeoProvider, &mut rng)
        };

        assert_eq!(run(123), run(123));
        assert_ne!(run(123), run(124));
    }

    #[test]
    fn traditional_tiny_region_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = traditional_points(&square(1.0), 5.0, 10, &GeoProvider, &mut rng);
        assert!(points.is_empty());
    }
}
