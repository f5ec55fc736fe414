//! Pipeline driver: validation, the four stages, and the public entry point.
use log::debug;
use serde::Serialize;
use std::time::Instant;

use crate::diagnostics::{DetailedResult, InputDescriptor, InteriorStats, StageTimings};
use crate::image::ImageRgba8;
use crate::score::{map_score, Calibration};
use crate::stats::interior_count;
use crate::{grayscale, laplacian, stats, MeterError};

/// Meter configuration. Only the score calibration is tunable; the stages
/// themselves have no knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeterParams {
    pub calibration: Calibration,
}

/// Sharpness evaluation outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SharpnessResult {
    /// Integer score in [1, 10]; 1 is very blurry, 10 perfectly sharp.
    pub score: u8,
    /// Population variance of the interior Laplacian response, ≥ 0.
    pub variance: f64,
}

/// Stateless sharpness meter.
///
/// Holds only its parameters; every evaluation allocates its own
/// intermediate planes and discards them on return, so concurrent
/// evaluations with independent inputs need no coordination.
#[derive(Clone, Debug, Default)]
pub struct SharpnessMeter {
    params: MeterParams,
}

impl SharpnessMeter {
    pub fn new(params: MeterParams) -> Self {
        Self { params }
    }

    /// Run the pipeline on an RGBA view.
    pub fn evaluate(&self, img: ImageRgba8) -> Result<SharpnessResult, MeterError> {
        self.evaluate_with_diagnostics(img).map(|d| d.result)
    }

    /// Run the pipeline and report per-stage statistics and timings.
    pub fn evaluate_with_diagnostics(
        &self,
        img: ImageRgba8,
    ) -> Result<DetailedResult, MeterError> {
        validate_input(&img)?;
        self.params.calibration.validate()?;
        let t0 = Instant::now();

        let t_gray = Instant::now();
        let lum = grayscale::luminance(&img);
        let grayscale_ms = elapsed_ms(t_gray);

        let t_lap = Instant::now();
        let resp = laplacian::laplacian(&lum);
        let laplacian_ms = elapsed_ms(t_lap);

        let t_var = Instant::now();
        let interior = stats::interior_stats(&resp)?;
        let variance_ms = elapsed_ms(t_var);

        let score = map_score(interior.variance, &self.params.calibration);
        debug!(
            "sharpness: {}x{} interior_mean={:.3} variance={:.3} score={}",
            img.w, img.h, interior.mean, interior.variance, score
        );

        Ok(DetailedResult {
            result: SharpnessResult {
                score,
                variance: interior.variance,
            },
            input: InputDescriptor {
                width: img.w,
                height: img.h,
            },
            stats: InteriorStats::from_stats(interior, interior_count(img.w, img.h)),
            timings: StageTimings {
                grayscale_ms,
                laplacian_ms,
                variance_ms,
                total_ms: elapsed_ms(t0),
            },
        })
    }
}

/// Evaluate the sharpness of a tightly packed RGBA buffer.
///
/// `pixels` must hold exactly `width * height * 4` bytes in R, G, B, A
/// order, row-major; `width` and `height` must each be at least 3.
/// `options` overrides the default calibration (variance 25 → score 1,
/// variance 10000 → score 10).
pub fn evaluate_sharpness(
    pixels: &[u8],
    width: usize,
    height: usize,
    options: Option<Calibration>,
) -> Result<SharpnessResult, MeterError> {
    let meter = SharpnessMeter::new(MeterParams {
        calibration: options.unwrap_or_default(),
    });
    meter.evaluate(ImageRgba8::from_packed(pixels, width, height))
}

/// Pre-flight validation: buffer length before any pixel access, then the
/// interior-region dimension constraint.
fn validate_input(img: &ImageRgba8) -> Result<(), MeterError> {
    let expected = img.expected_len();
    if img.data.len() != expected {
        return Err(MeterError::InvalidBufferLength {
            expected,
            actual: img.data.len(),
        });
    }
    if img.w < 3 || img.h < 3 {
        return Err(MeterError::InvalidDimensions {
            width: img.w,
            height: img.h,
        });
    }
    Ok(())
}

#[inline]
fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffer_before_dimensions() {
        let pixels = vec![0u8; 4 * 4 * 4 - 1];
        let err = evaluate_sharpness(&pixels, 4, 4, None).unwrap_err();
        assert_eq!(
            err,
            MeterError::InvalidBufferLength {
                expected: 64,
                actual: 63
            }
        );
    }

    #[test]
    fn rejects_empty_interior() {
        let pixels = vec![0u8; 2 * 2 * 4];
        let err = evaluate_sharpness(&pixels, 2, 2, None).unwrap_err();
        assert_eq!(
            err,
            MeterError::InvalidDimensions {
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn rejects_degenerate_calibration_before_running_stages() {
        let pixels = vec![0u8; 3 * 3 * 4];
        let cal = Calibration {
            threshold_min: 5.0,
            threshold_max: 5.0,
        };
        let err = evaluate_sharpness(&pixels, 3, 3, Some(cal)).unwrap_err();
        assert!(matches!(err, MeterError::InvalidCalibration { .. }));
    }

    #[test]
    fn diagnostics_count_matches_interior() {
        let pixels = vec![128u8; 5 * 4 * 4];
        let meter = SharpnessMeter::default();
        let detailed = meter
            .evaluate_with_diagnostics(ImageRgba8::from_packed(&pixels, 5, 4))
            .unwrap();
        assert_eq!(detailed.stats.count, 3 * 2);
        assert_eq!(detailed.input.width, 5);
        assert_eq!(detailed.result.variance, 0.0);
    }
}
