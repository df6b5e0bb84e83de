//! Planning configuration.
//!
//! # Example
//!
//! ```
//! use survey_types::{ScanConfig, ScanMode, SweepDirection};
//!
//! // Dense grid sweep, 1 m clearance from the walls.
//! let config = ScanConfig::new()
//!     .with_step(0.5)
//!     .with_boundary_clearance(1.0)
//!     .with_mode(ScanMode::Grid {
//!         direction: SweepDirection::Horizontal,
//!     });
//!
//! // Bounded-count plan with a reproducible subsample.
//! let bounded = ScanConfig::new()
//!     .with_mode(ScanMode::Traditional { max_points: 40 })
//!     .with_seed(7);
//! # let _ = (config, bounded);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{SurveyError, SurveyResult};

/// Sweep direction for grid-mode scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SweepDirection {
    /// Left-right scan lines, serpentine between lines.
    #[default]
    Horizontal,
    /// Up-down scan columns, serpentine between columns.
    Vertical,
    /// A full horizontal pass followed by a full vertical pass.
    Both,
    /// Uniform grid points linked by a greedy nearest-neighbor tour.
    Grid,
}

/// Scan planning mode.
///
/// The two modes carry their own parameters, so a direction can only be
/// given in grid mode and a point budget only in traditional mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanMode {
    /// Regular sweep coverage of the active region.
    Grid {
        /// Sweep direction.
        direction: SweepDirection,
    },
    /// Adaptive-step grid capped at a maximum number of stand-positions.
    Traditional {
        /// Upper bound on delivered stand-positions.
        max_points: usize,
    },
}

impl Default for ScanMode {
    fn default() -> Self {
        Self::Grid {
            direction: SweepDirection::default(),
        }
    }
}

/// Configuration for one planning run.
///
/// Defaults match the interactive tool this planner was built for:
/// 0.2 m point spacing, 0.8 m stand height, 0.5 m wall clearance,
/// horizontal grid sweep.
///
/// # Example
///
/// ```
/// use survey_types::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert!((config.step() - 0.2).abs() < 1e-12);
/// assert!(config.validate().is_ok());
///
/// let bad = ScanConfig::new().with_step(0.0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Spacing between stand-positions, meters.
    step: f64,
    /// Scanner stand height, meters.
    z_height: f64,
    /// Inward margin kept from the footprint boundary, meters.
    boundary_clearance: f64,
    /// Planning mode.
    mode: ScanMode,
    /// Seed for traditional-mode subsampling (None = nondeterministic).
    seed: Option<u64>,
}

impl ScanConfig {
    /// Create a configuration with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: 0.2,
            z_height: 0.8,
            boundary_clearance: 0.5,
            mode: ScanMode::default(),
            seed: None,
        }
    }

    /// Sets the stand-position spacing in meters.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the scanner stand height in meters.
    #[must_use]
    pub const fn with_z_height(mut self, z_height: f64) -> Self {
        self.z_height = z_height;
        self
    }

    /// Sets the inward clearance from the footprint boundary in meters.
    #[must_use]
    pub const fn with_boundary_clearance(mut self, clearance: f64) -> Self {
        self.boundary_clearance = clearance;
        self
    }

    /// Sets the planning mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the subsampling seed for reproducible traditional-mode runs.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Removes the seed (nondeterministic subsampling).
    #[must_use]
    pub const fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Returns the stand-position spacing.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Returns the scanner stand height.
    #[must_use]
    pub const fn z_height(&self) -> f64 {
        self.z_height
    }

    /// Returns the boundary clearance.
    #[must_use]
    pub const fn boundary_clearance(&self) -> f64 {
        self.boundary_clearance
    }

    /// Returns the planning mode.
    #[must_use]
    pub const fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Returns the subsampling seed, if set.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::InvalidConfig`] for a non-positive or
    /// non-finite step, a negative or non-finite clearance, a non-finite
    /// stand height, or a zero point budget in traditional mode.
    pub fn validate(&self) -> SurveyResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SurveyError::InvalidConfig(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if !self.boundary_clearance.is_finite() || self.boundary_clearance < 0.0 {
            return Err(SurveyError::InvalidConfig(format!(
                "boundary clearance must be non-negative, got {}",
                self.boundary_clearance
            )));
        }
        if !self.z_height.is_finite() {
            return Err(SurveyError::InvalidConfig(format!(
                "stand height must be finite, got {}",
                self.z_height
            )));
        }
        if let ScanMode::Traditional { max_points } = self.mode {
            if max_points == 0 {
                return Err(SurveyError::InvalidConfig(
                    "traditional mode needs max_points >= 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_tool() {
        let config = ScanConfig::default();
        assert_relative_eq!(config.step(), 0.2);
        assert_relative_eq!(config.z_height(), 0.8);
        assert_relative_eq!(config.boundary_clearance(), 0.5);
        assert_eq!(
            config.mode(),
            ScanMode::Grid {
                direction: SweepDirection::Horizontal
            }
        );
        assert!(config.seed().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chains() {
        let config = ScanConfig::new()
            .with_step(1.5)
            .with_z_height(1.2)
            .with_boundary_clearance(0.0)
            .with_mode(ScanMode::Traditional { max_points: 20 })
            .with_seed(99);

        assert_relative_eq!(config.step(), 1.5);
        assert_relative_eq!(config.z_height(), 1.2);
        assert_relative_eq!(config.boundary_clearance(), 0.0);
        assert_eq!(config.mode(), ScanMode::Traditional { max_points: 20 });
        assert_eq!(config.seed(), Some(99));
        assert!(config.validate().is_ok());

        assert!(config.without_seed().seed().is_none());
    }

    #[test]
    fn validate_rejects_bad_step() {
        assert!(ScanConfig::new().with_step(0.0).validate().is_err());
        assert!(ScanConfig::new().with_step(-1.0).validate().is_err());
        assert!(ScanConfig::new().with_step(f64::NAN).validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_clearance() {
        assert!(ScanConfig::new()
            .with_boundary_clearance(-0.5)
            .validate()
            .is_err());
    }

    #[test]
    fn validate_rejects_zero_budget() {
        let config = ScanConfig::new().with_mode(ScanMode::Traditional { max_points: 0 });
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = ScanConfig::new()
            .with_step(1.5)
            .with_mode(ScanMode::Traditional { max_points: 25 })
            .with_seed(9);

        let json = serde_json::to_string(&config).unwrap();
        let back: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
