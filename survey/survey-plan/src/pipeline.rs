//! The end-to-end planning pipeline.

use mesh_types::Mesh;
use rand::rngs::StdRng;
use rand::SeedableRng;
use survey_footprint::{extract_footprint, FootprintParams};
use survey_region::{shrink_to_active_region, GeoProvider, GeometryProvider, RegionError};
use survey_types::{PlanAdvisory, ScanConfig, ScanPath, SurveyResult};
use tracing::{debug, info, warn};

use crate::plan::{PlanningContext, SurveyPlan};
use crate::planner::plan_scan_path;

/// Plan a complete survey for a building mesh.
///
/// Runs the full sequence synchronously: validate the inputs, extract the
/// footprint, shrink it by the wall clearance, generate candidates with
/// the configured strategy, and order them for travel. Each run owns its
/// intermediate state; two runs never share anything mutable.
///
/// The returned plan always has at least one stand-position. Degraded
/// fallbacks (clearance consumed the footprint, step too coarse for the
/// region, hull unavailable) are reported in
/// [`SurveyPlan::advisories`], never silently.
///
/// # Errors
///
/// - [`SurveyError::InvalidConfig`](survey_types::SurveyError::InvalidConfig)
///   for out-of-range parameters
/// - [`SurveyError::Mesh`](survey_types::SurveyError::Mesh) for faces with
///   bad arity or vertex indices
/// - [`SurveyError::EmptyMesh`](survey_types::SurveyError::EmptyMesh) and
///   [`SurveyError::DegenerateProjection`](survey_types::SurveyError::DegenerateProjection)
///   for geometry no footprint can be derived from
///
/// # Example
///
/// ```
/// use mesh_types::rectangular_room;
/// use survey_plan::plan_survey;
/// use survey_types::ScanConfig;
///
/// let room = rectangular_room(10.0, 10.0, 3.0);
/// let config = ScanConfig::new().with_step(2.0).with_boundary_clearance(1.0);
///
/// let plan = plan_survey(&room, &config).unwrap();
/// assert_eq!(plan.stand_count(), 16);
/// assert!((plan.z_height() - 0.8).abs() < 1e-12);
/// ```
pub fn plan_survey(mesh: &Mesh, config: &ScanConfig) -> SurveyResult<SurveyPlan> {
    config.validate()?;
    mesh.validate()?;

    let provider = GeoProvider;
    let bounds = mesh.bounds();
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        building_height = bounds.height(),
        "planning survey"
    );

    let footprint = extract_footprint(mesh, &FootprintParams::default(), &provider)?;
    let mut advisories = footprint.advisories.clone();

    let clearance = config.boundary_clearance();
    let (active_region, points) =
        match shrink_to_active_region(&footprint.polygon, clearance, &provider) {
            Ok(region) => (region, None),
            Err(RegionError::DegenerateOffset { clearance }) => {
                let advisory = PlanAdvisory::DegenerateOffset { clearance };
                warn!("{advisory}");
                advisories.push(advisory);
                let centroid = provider.centroid(&footprint.polygon);
                (
                    footprint.polygon.clone(),
                    Some(ScanPath::new(vec![centroid])),
                )
            }
        };

    let points = match points {
        Some(fallback) => fallback,
        None => {
            let mut rng = config
                .seed()
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            let (path, strategy_advisories) =
                plan_scan_path(&active_region, config, &provider, &mut rng);
            advisories.extend(strategy_advisories);
            path
        }
    };

    let plan = SurveyPlan {
        config: config.clone(),
        context: PlanningContext {
            bounds,
            ground_height: footprint.ground_height,
            footprint: footprint.polygon,
            active_region,
        },
        points,
        advisories,
    };

    info!(
        stands = plan.stand_count(),
        travel = plan.travel_length(),
        advisories = plan.advisories.len(),
        "survey plan complete"
    );
    Ok(plan)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{rectangular_room, Point3};
    use survey_types::{ScanMode, SurveyError, SweepDirection};

    #[test]
    fn grid_plan_over_a_square_room() {
        let room = rectangular_room(10.0, 10.0, 3.0);
        let config = ScanConfig::new().with_step(2.0).with_boundary_clearance(1.0);

        let plan = plan_survey(&room, &config).unwrap();

        assert_eq!(plan.stand_count(), 16);
        assert!(plan.advisories.is_empty());
        assert!(!plan.is_degraded());

        // Context snapshot: full footprint, shrunk active region.
        assert_relative_eq!(plan.context.footprint.area(), 100.0, epsilon = 1e-9);
        let (min, max) = plan.context.active_region.bounds();
        assert_relative_eq!(min.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(max.x, 9.0, epsilon = 1e-9);

        // Scan lines at y = 2, 4, 6, 8; the second line runs right to left.
        let ys: Vec<f64> = plan.points.points().iter().map(|p| p.y).collect();
        assert!(ys.starts_with(&[2.0, 2.0, 2.0, 2.0, 4.0]));
        let line1: Vec<f64> = plan.points.points()[4..8].iter().map(|p| p.x).collect();
        assert!(line1.windows(2).all(|w| w[1] < w[0]));

        // Config echo.
        assert_eq!(plan.config, config);
    }

    #[test]
    fn excessive_clearance_degrades_to_centroid() {
        let room = rectangular_room(10.0, 10.0, 3.0);
        let config = ScanConfig::new().with_step(2.0).with_boundary_clearance(6.0);

        let plan = plan_survey(&room, &config).unwrap();

        assert_eq!(plan.stand_count(), 1);
        let stand = plan.points.first().unwrap();
        assert_relative_eq!(stand.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(stand.y, 5.0, epsilon = 1e-9);

        assert_eq!(
            plan.advisories,
            vec![PlanAdvisory::DegenerateOffset { clearance: 6.0 }]
        );
        assert!(plan.is_degraded());
        // The context falls back to the footprint as the region.
        assert_relative_eq!(plan.context.active_region.area(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn traditional_plan_respects_budget() {
        let room = rectangular_room(10.0, 10.0, 3.0);
        let config = ScanConfig::new()
            .with_step(1.0)
            .with_boundary_clearance(0.0)
            .with_mode(ScanMode::Traditional { max_points: 5 })
            .with_seed(42);

        let plan = plan_survey(&room, &config).unwrap();

        assert!(plan.stand_count() <= 5);
        assert!(plan.stand_count() >= 2);
        assert!(plan.advisories.is_empty());
    }

    #[test]
    fn traditional_plan_is_reproducible_with_a_seed() {
        let room = rectangular_room(10.0, 10.0, 3.0);
        // A step this fine cannot adapt its way under the budget, so the
        // seeded subsample decides the outcome.
        let config = ScanConfig::new()
            .with_step(0.1)
            .with_boundary_clearance(0.0)
            .with_mode(ScanMode::Traditional { max_points: 10 })
            .with_seed(7);

        let a = plan_survey(&room, &config).unwrap();
        let b = plan_survey(&room, &config).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.stand_count(), 10);
    }

    #[test]
    fn zero_clearance_plans_over_the_footprint() {
        let room = rectangular_room(10.0, 10.0, 3.0);
        let config = ScanConfig::new().with_step(2.0).with_boundary_clearance(0.0);

        let plan = plan_survey(&room, &config).unwrap();

        assert_eq!(
            plan.context.active_region.ring(),
            plan.context.footprint.ring()
        );
        assert!(plan.stand_count() > 16);
    }

    #[test]
    fn both_direction_runs_two_passes() {
        let room = rectangular_room(10.0, 10.0, 3.0);
        let horizontal = plan_survey(
            &room,
            &ScanConfig::new().with_step(2.0).with_boundary_clearance(1.0),
        )
        .unwrap();
        let both = plan_survey(
            &room,
            &ScanConfig::new()
                .with_step(2.0)
                .with_boundary_clearance(1.0)
                .with_mode(ScanMode::Grid {
                    direction: SweepDirection::Both,
                }),
        )
        .unwrap();

        assert_eq!(both.stand_count(), 2 * horizontal.stand_count());
    }

    #[test]
    fn invalid_config_aborts() {
        let room = rectangular_room(10.0, 10.0, 3.0);
        let config = ScanConfig::new().with_step(-1.0);

        assert!(matches!(
            plan_survey(&room, &config),
            Err(SurveyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn invalid_mesh_aborts() {
        let mut mesh = rectangular_room(10.0, 10.0, 3.0);
        mesh.push_face(&[0, 1, 99]);

        assert!(matches!(
            plan_survey(&mesh, &ScanConfig::new()),
            Err(SurveyError::Mesh(_))
        ));
    }

    #[test]
    fn empty_mesh_aborts() {
        assert!(matches!(
            plan_survey(&Mesh::new(), &ScanConfig::new()),
            Err(SurveyError::EmptyMesh)
        ));
    }

    #[test]
    fn coincident_mesh_aborts() {
        let mut mesh = Mesh::new();
        for _ in 0..3 {
            mesh.push_vertex(Point3::new(2.0, 2.0, 0.0));
        }

        assert!(matches!(
            plan_survey(&mesh, &ScanConfig::new()),
            Err(SurveyError::DegenerateProjection)
        ));
    }

    #[test]
    fn plan_is_never_empty() {
        // A sliver of a room with a big step still yields one stand.
        let room = rectangular_room(3.0, 3.0, 2.0);
        let config = ScanConfig::new()
            .with_step(10.0)
            .with_boundary_clearance(0.5);

        let plan = plan_survey(&room, &config).unwrap();
        assert_eq!(plan.stand_count(), 1);
        assert_eq!(
            plan.advisories,
            vec![PlanAdvisory::StrategyEmpty { step: 10.0 }]
        );
    }
}
