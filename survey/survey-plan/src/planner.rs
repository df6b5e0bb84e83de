//! Strategy dispatch over the active region.

use rand::Rng;
use survey_region::GeometryProvider;
use survey_types::{PlanAdvisory, Polygon, ScanConfig, ScanMode, ScanPath, SweepDirection};
use survey_tour::{nearest_neighbor_tour, serpentine};
use tracing::{info, warn};

use crate::grid::{grid_points, traditional_points};
use crate::sweep::{horizontal_lines, vertical_lines};

/// Generate the ordered stand-positions for an active scanning region.
///
/// Dispatches on the configured [`ScanMode`] and sweep direction, applies
/// the matching visiting order, and falls back to a single stand at the
/// region centroid when the strategy finds no room at the configured
/// step. The returned path is never empty.
///
/// Aside from the supplied RNG (used only by traditional-mode
/// subsampling), this is a pure function of the region and configuration.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use survey_plan::plan_scan_path;
/// use survey_region::GeoProvider;
/// use survey_types::{Point2, Polygon, ScanConfig};
///
/// let region = Polygon::new(vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(9.0, 1.0),
///     Point2::new(9.0, 9.0),
///     Point2::new(1.0, 9.0),
/// ])
/// .unwrap();
///
/// let config = ScanConfig::new().with_step(2.0);
/// let mut rng = StdRng::seed_from_u64(0);
/// let (path, advisories) =
///     plan_scan_path(&region, &config, &GeoProvider, &mut rng);
///
/// assert!(!path.is_empty());
/// assert!(advisories.is_empty());
/// ```
pub fn plan_scan_path<P: GeometryProvider, R: Rng>(
    region: &Polygon,
    config: &ScanConfig,
    provider: &P,
    rng: &mut R,
) -> (ScanPath, Vec<PlanAdvisory>) {
    let step = config.step();
    let points = match config.mode() {
        ScanMode::Grid { direction } => match direction {
            SweepDirection::Horizontal => serpentine(horizontal_lines(region, step, provider)),
            SweepDirection::Vertical => serpentine(vertical_lines(region, step, provider)),
            SweepDirection::Both => {
                // Two independent passes, not interleaved.
                let mut points = serpentine(horizontal_lines(region, step, provider));
                points.extend(serpentine(vertical_lines(region, step, provider)));
                points
            }
            SweepDirection::Grid => nearest_neighbor_tour(grid_points(region, step, provider)),
        },
        ScanMode::Traditional { max_points } => {
            nearest_neighbor_tour(traditional_points(region, step, max_points, provider, rng))
        }
    };

    let mut advisories = Vec::new();
    let points = if points.is_empty() {
        let advisory = PlanAdvisory::StrategyEmpty { step };
        warn!("{advisory}");
        advisories.push(advisory);
        vec![provider.centroid(region)]
    } else {
        points
    };

    info!(
        mode = ?config.mode(),
        step,
        stands = points.len(),
        "scan path planned"
    );
    (ScanPath::new(points), advisories)
}
