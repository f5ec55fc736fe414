//! Population mean/variance of the Laplacian response interior.
//!
//! Single pass accumulating sum and sum-of-squares over the
//! `(w−2)·(h−2)` interior values, in f64 to keep cancellation in
//! `E[X²] − E[X]²` tolerable on large images. The divisor is the count
//! (biased/population variance, not the sample variance) — the score
//! calibration depends on this exact divisor.
use crate::image::{ImageF32, ImageView};
use crate::MeterError;

/// Mean and population variance of the interior response values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub variance: f64,
}

/// Number of interior values consulted for a `w × h` plane.
#[inline]
pub fn interior_count(w: usize, h: usize) -> usize {
    if w < 3 || h < 3 {
        0
    } else {
        (w - 2) * (h - 2)
    }
}

/// Compute interior statistics of a response plane.
///
/// Fails with `InvalidDimensions` when the interior is empty rather than
/// dividing by zero.
pub fn interior_stats(resp: &ImageF32) -> Result<Stats, MeterError> {
    let w = resp.w;
    let h = resp.h;
    let count = interior_count(w, h);
    if count == 0 {
        return Err(MeterError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    for y in 1..h - 1 {
        for &v in &resp.row(y)[1..w - 1] {
            let v = v as f64;
            sum += v;
            sum_sq += v * v;
        }
    }

    let n = count as f64;
    let mean = sum / n;
    // E[X²] − E[X]² can land a hair below zero in floating point.
    let variance = (sum_sq / n - mean * mean).max(0.0);
    Ok(Stats { mean, variance })
}
