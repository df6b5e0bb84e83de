//! Serpentine line ordering.

use survey_types::ScanPoint;

/// Flatten parallel scan lines into a serpentine visiting order.
///
/// Even-indexed lines are traversed as given, odd-indexed lines in
/// reverse, so the walk between adjacent lines starts where the previous
/// line ended. The only contract is that adjacent lines run in opposite
/// directions; within-line ordering is the caller's.
///
/// # Example
///
/// ```
/// use survey_tour::serpentine;
/// use survey_types::ScanPoint;
///
/// let lines = vec![
///     vec![ScanPoint::new(0.0, 0.0), ScanPoint::new(1.0, 0.0)],
///     vec![ScanPoint::new(0.0, 1.0), ScanPoint::new(1.0, 1.0)],
/// ];
///
/// let path = serpentine(lines);
/// // Second line is walked right-to-left.
/// assert_eq!(path[2], ScanPoint::new(1.0, 1.0));
/// assert_eq!(path[3], ScanPoint::new(0.0, 1.0));
/// ```
#[must_use]
pub fn serpentine(lines: Vec<Vec<ScanPoint>>) -> Vec<ScanPoint> {
    let mut path = Vec::with_capacity(lines.iter().map(Vec::len).sum());
    for (index, mut line) in lines.into_iter().enumerate() {
        if index % 2 == 1 {
            line.reverse();
        }
        path.extend(line);
    }
    path
}
