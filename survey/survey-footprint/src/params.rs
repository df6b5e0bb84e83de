//! Extraction parameters.

/// Parameters for floor-plan extraction.
///
/// The defaults are tuned for building meshes in meters and match the
/// survey tool this pipeline reimplements.
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintParams {
    /// Percentile of vertex heights taken as the ground height.
    ///
    /// A low percentile rather than the minimum keeps a few stray
    /// below-floor vertices from dragging the estimate down. Default: 5.
    pub ground_percentile: f64,

    /// Absolute height tolerance for counting a face as ground, meters.
    ///
    /// A face belongs to the ground band when its mean vertex height is
    /// within this distance of the ground height. Default: 0.1.
    pub height_tolerance: f64,
}

impl FootprintParams {
    /// Create parameters with the default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ground_percentile: 5.0,
            height_tolerance: 0.1,
        }
    }
}

impl Default for FootprintParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn defaults() {
        let params = FootprintParams::default();
        assert_eq!(params.ground_percentile, 5.0);
        assert_eq!(params.height_tolerance, 0.1);
    }
}
