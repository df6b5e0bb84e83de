//! Greedy nearest-neighbor tour construction.

use survey_types::ScanPoint;

/// Reorder points into a greedy nearest-neighbor tour.
///
/// Starts from the first point and repeatedly appends the closest
/// unvisited point. O(n²), which is fine for the bounded candidate counts
/// the planner produces. The output is a permutation of the input; the
/// starting point is preserved.
///
/// # Example
///
/// ```
/// use survey_tour::nearest_neighbor_tour;
/// use survey_types::ScanPoint;
///
/// let tour = nearest_neighbor_tour(vec![
///     ScanPoint::new(0.0, 0.0),
///     ScanPoint::new(5.0, 0.0),
///     ScanPoint::new(1.0, 0.0),
/// ]);
///
/// assert_eq!(tour[0], ScanPoint::new(0.0, 0.0));
/// assert_eq!(tour[1], ScanPoint::new(1.0, 0.0));
/// assert_eq!(tour[2], ScanPoint::new(5.0, 0.0));
/// ```
#[must_use]
pub fn nearest_neighbor_tour(points: Vec<ScanPoint>) -> Vec<ScanPoint> {
    if points.len() <= 1 {
        return points;
    }

    let mut unvisited = points;
    let mut tour = Vec::with_capacity(unvisited.len());
    tour.push(unvisited.remove(0));

    while !unvisited.is_empty() {
        let current = tour[tour.len() - 1];
        let mut nearest = 0;
        let mut best = f64::INFINITY;
        for (index, candidate) in unvisited.iter().enumerate() {
            // Squared distance has the same argmin and skips the sqrt.
            let distance = (*candidate - current).norm_squared();
            if distance < best {
                best = distance;
                nearest = index;
            }
        }
        tour.push(unvisited.remove(nearest));
    }

    tour
}

/// Total travel distance visiting `points` in order.
#[must_use]
pub fn path_length(points: &[ScanPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).norm())
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sorted_multiset(points: &[ScanPoint]) -> Vec<(u64, u64)> {
        let mut keys: Vec<(u64, u64)> = points
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn empty_and_single_pass_through() {
        assert!(nearest_neighbor_tour(vec![]).is_empty());

        let single = vec![ScanPoint::new(3.0, 4.0)];
        assert_eq!(nearest_neighbor_tour(single.clone()), single);
    }

    #[test]
    fn starts_at_first_point() {
        let points = vec![
            ScanPoint::new(5.0, 5.0),
            ScanPoint::new(0.0, 0.0),
            ScanPoint::new(5.0, 6.0),
        ];
        let tour = nearest_neighbor_tour(points);
        assert_eq!(tour[0], ScanPoint::new(5.0, 5.0));
        assert_eq!(tour[1], ScanPoint::new(5.0, 6.0));
    }

    #[test]
    fn output_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let points: Vec<ScanPoint> = (0..40)
            .map(|_| ScanPoint::new(rng.gen_range(0.0..20.0), rng.gen_range(0.0..20.0)))
            .collect();

        let tour = nearest_neighbor_tour(points.clone());
        assert_eq!(sorted_multiset(&tour), sorted_multiset(&points));
    }

    #[test]
    fn shortens_a_shuffled_line() {
        // Zig-zagging order along a line; greedy walks it end to end.
        let shuffled = vec![
            ScanPoint::new(0.0, 0.0),
            ScanPoint::new(7.0, 0.0),
            ScanPoint::new(2.0, 0.0),
            ScanPoint::new(5.0, 0.0),
            ScanPoint::new(1.0, 0.0),
            ScanPoint::new(6.0, 0.0),
        ];

        let tour = nearest_neighbor_tour(shuffled.clone());
        assert_relative_eq!(path_length(&tour), 7.0);
        assert!(path_length(&tour) < path_length(&shuffled));
    }

    #[test]
    fn no_worse_than_random_order_on_average() {
        let mut greedy_total = 0.0;
        let mut original_total = 0.0;

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let points: Vec<ScanPoint> = (0..30)
                .map(|_| ScanPoint::new(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0)))
                .collect();

            original_total += path_length(&points);
            greedy_total += path_length(&nearest_neighbor_tour(points));
        }

        assert!(greedy_total < original_total);
    }

    #[test]
    fn path_length_of_degenerate_inputs() {
        assert_relative_eq!(path_length(&[]), 0.0);
        assert_relative_eq!(path_length(&[ScanPoint::new(1.0, 1.0)]), 0.0);
    }
}
