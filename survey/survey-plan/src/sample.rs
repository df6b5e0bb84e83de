//! Index-based float ranges.

/// Evenly spaced values in `[start, stop)`, numpy-`arange` style.
///
/// Values are generated as `start + k * step` rather than by accumulation,
/// so long ranges do not drift. Returns an empty vector when the range or
/// step is degenerate.
pub(crate) fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 || !start.is_finite() || stop <= start {
        return Vec::new();
    }
    let count = ((stop - start) / step).ceil();
    if !count.is_finite() || count <= 0.0 {
        return Vec::new();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count as usize;
    #[allow(clippy::cast_precision_loss)]
    let values: Vec<f64> = (0..count).map(|k| step.mul_add(k as f64, start)).collect();
    values
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn excludes_stop() {
        assert_eq!(arange(1.0, 9.0, 2.0), vec![1.0, 3.0, 5.0, 7.0]);
        assert_eq!(arange(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn partial_last_interval_is_included() {
        let values = arange(0.0, 1.1, 0.5);
        assert_eq!(values.len(), 3);
        assert_relative_eq!(values[2], 1.0);
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        assert!(arange(5.0, 5.0, 1.0).is_empty());
        assert!(arange(5.0, 1.0, 1.0).is_empty());
        assert!(arange(0.0, 1.0, 0.0).is_empty());
        assert!(arange(0.0, 1.0, -1.0).is_empty());
    }

    #[test]
    fn no_accumulation_drift() {
        let values = arange(0.0, 100.0, 0.1);
        assert_eq!(values.len(), 1000);
        assert_relative_eq!(values[999], 99.9, epsilon = 1e-9);
    }
}
