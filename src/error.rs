use thiserror::Error;

/// Caller-input errors detected before the pipeline stages run.
///
/// None of these are transient; there is nothing to retry. The stages
/// themselves are pure numeric transforms that cannot fail once these
/// preconditions hold.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MeterError {
    /// Width or height below 3: the Laplacian interior region is empty and
    /// the variance is undefined (0/0).
    #[error("invalid dimensions {width}x{height}: need at least 3x3 for a non-empty interior")]
    InvalidDimensions { width: usize, height: usize },

    /// Pixel buffer length does not match `width * height * 4` RGBA bytes.
    #[error("pixel buffer holds {actual} bytes, expected {expected} (width * height * 4)")]
    InvalidBufferLength { expected: usize, actual: usize },

    /// Calibration bounds coincide, leaving a zero-width normalization range.
    #[error("calibration range is empty: threshold_min == threshold_max == {threshold_min}")]
    InvalidCalibration {
        threshold_min: f64,
        threshold_max: f64,
    },
}
