//! Linear mapping from response variance to an integer score in [1, 10].
use serde::{Deserialize, Serialize};

use crate::MeterError;

/// Variance reference points for the score mapping.
///
/// `threshold_min` is the variance that maps to score 1 (very blurry),
/// `threshold_max` the variance that maps to score 10 (perfectly sharp).
/// Variances outside the range saturate at 1 or 10; that clamp is
/// intentional, not an out-of-range signal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Calibration {
    pub threshold_min: f64,
    pub threshold_max: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            threshold_min: 25.0,
            threshold_max: 10000.0,
        }
    }
}

impl Calibration {
    /// Reject a zero-width normalization range before the mapper divides.
    pub fn validate(&self) -> Result<(), MeterError> {
        if self.threshold_max == self.threshold_min {
            return Err(MeterError::InvalidCalibration {
                threshold_min: self.threshold_min,
                threshold_max: self.threshold_max,
            });
        }
        Ok(())
    }
}

/// Map a variance onto [1, 10]: linear interpolation between the calibration
/// bounds, clamped to [0, 1], then rounded to the nearest integer.
///
/// Callers must have validated the calibration first.
pub fn map_score(variance: f64, calibration: &Calibration) -> u8 {
    let span = calibration.threshold_max - calibration.threshold_min;
    let norm = ((variance - calibration.threshold_min) / span).clamp(0.0, 1.0);
    (1.0 + 9.0 * norm).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates_at_both_ends() {
        let cal = Calibration::default();
        assert_eq!(map_score(0.0, &cal), 1);
        assert_eq!(map_score(25.0, &cal), 1);
        assert_eq!(map_score(10000.0, &cal), 10);
        assert_eq!(map_score(1.0e9, &cal), 10);
    }

    #[test]
    fn midpoint_rounds_to_nearest() {
        let cal = Calibration {
            threshold_min: 0.0,
            threshold_max: 100.0,
        };
        // norm 0.5 -> 1 + 4.5 = 5.5 rounds to 6
        assert_eq!(map_score(50.0, &cal), 6);
        // norm 1/9 -> exactly score 2
        assert_eq!(map_score(100.0 / 9.0, &cal), 2);
    }

    #[test]
    fn equal_bounds_rejected() {
        let cal = Calibration {
            threshold_min: 40.0,
            threshold_max: 40.0,
        };
        assert_eq!(
            cal.validate(),
            Err(MeterError::InvalidCalibration {
                threshold_min: 40.0,
                threshold_max: 40.0
            })
        );
        assert!(Calibration::default().validate().is_ok());
    }

    #[test]
    fn default_calibration_matches_documented_bounds() {
        let cal = Calibration::default();
        assert_eq!(cal.threshold_min, 25.0);
        assert_eq!(cal.threshold_max, 10000.0);
    }
}
