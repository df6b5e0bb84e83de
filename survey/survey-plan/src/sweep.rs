//! Horizontal and vertical sweep strategies.
//!
//! A sweep walks parallel scan lines across the active region. Each line
//! is found by fine-sampling the region at a twentieth of the step to
//! locate the contiguous in-region span, then re-sampling that span at
//! the full step spacing. Lines with no in-region samples stay in the
//! output as empty lines so that serpentine direction alternation stays
//! tied to the line's position in the sweep, not to how many lines
//! happened to be non-empty.

use survey_region::GeometryProvider;
use survey_types::{Polygon, ScanPoint};
use tracing::debug;

use crate::sample::arange;

/// Fraction of the step used for span discovery.
const FINE_SUBDIVISIONS: f64 = 20.0;

/// Scan lines for a horizontal sweep (lines of constant y, walked in x).
pub(crate) fn horizontal_lines<P: GeometryProvider>(
    region: &Polygon,
    step: f64,
    provider: &P,
) -> Vec<Vec<ScanPoint>> {
    let (min, max) = region.bounds();
    let fine = step / FINE_SUBDIVISIONS;

    let line_positions = arange(min.y + step / 2.0, max.y, step);
    let mut lines = Vec::with_capacity(line_positions.len());
    for y in line_positions {
        let in_region: Vec<f64> = arange(min.x, max.x + fine, fine)
            .into_iter()
            .filter(|&x| provider.contains(region, &ScanPoint::new(x, y)))
            .collect();

        let line = match (in_region.first(), in_region.last()) {
            (Some(&span_start), Some(&span_end)) => arange(span_start, span_end + step / 2.0, step)
                .into_iter()
                .map(|x| ScanPoint::new(x, y))
                .filter(|p| provider.contains(region, p))
                .collect(),
            _ => Vec::new(),
        };
        lines.push(line);
    }

    debug!(
        lines = lines.len(),
        points = lines.iter().map(Vec::len).sum::<usize>(),
        "horizontal sweep sampled"
    );
    lines
}

/// Scan columns for a vertical sweep (columns of constant x, walked in y).
pub(crate) fn vertical_lines<P: GeometryProvider>(
    region: &Polygon,
    step: f64,
    provider: &P,
) -> Vec<Vec<ScanPoint>> {
    let (min, max) = region.bounds();
    let fine = step / FINE_SUBDIVISIONS;

    let column_positions = arange(min.x + step / 2.0, max.x, step);
    let mut columns = Vec::with_capacity(column_positions.len());
    for x in column_positions {
        let in_region: Vec<f64> = arange(min.y, max.y + fine, fine)
            .into_iter()
            .filter(|&y| provider.contains(region, &ScanPoint::new(x, y)))
            .collect();

        let column = match (in_region.first(), in_region.last()) {
            (Some(&span_start), Some(&span_end)) => arange(span_start, span_end + step / 2.0, step)
                .into_iter()
                .map(|y| ScanPoint::new(x, y))
                .filter(|p| provider.contains(region, p))
                .collect(),
            _ => Vec::new(),
        };
        columns.push(column);
    }

    debug!(
        columns = columns.len(),
        points = columns.iter().map(Vec::len).sum::<usize>(),
        "vertical sweep sampled"
    );
    columns
}
