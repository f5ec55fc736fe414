#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod meter;
pub mod score;

// Stage modules – public for tools that want individual planes
// (e.g. debug dumps), but the meter is the supported entry point.
pub mod grayscale;
pub mod laplacian;
pub mod stats;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::MeterError;
pub use crate::meter::{evaluate_sharpness, MeterParams, SharpnessMeter, SharpnessResult};
pub use crate::score::Calibration;

pub use crate::diagnostics::DetailedResult;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use blur_meter::prelude::*;
///
/// # fn main() {
/// let (w, h) = (8usize, 8usize);
/// let pixels = vec![200u8; w * h * 4];
///
/// let result = evaluate_sharpness(&pixels, w, h, None).unwrap();
/// println!("score={} variance={:.1}", result.score, result.variance);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgba8;
    pub use crate::{
        evaluate_sharpness, Calibration, MeterError, MeterParams, SharpnessMeter, SharpnessResult,
    };
}
