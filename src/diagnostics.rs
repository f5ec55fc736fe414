//! Structured per-stage diagnostics for tools and calibration work.
use serde::Serialize;

use crate::meter::SharpnessResult;
use crate::stats::Stats;

/// Dimensions of the evaluated input.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Interior statistics as consulted by the score mapper.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteriorStats {
    /// Number of interior response values: (width − 2) · (height − 2)
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
}

/// Wall-clock timing of each pipeline stage, in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTimings {
    pub grayscale_ms: f64,
    pub laplacian_ms: f64,
    pub variance_ms: f64,
    pub total_ms: f64,
}

/// Evaluation result together with stage diagnostics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResult {
    pub result: SharpnessResult,
    pub input: InputDescriptor,
    pub stats: InteriorStats,
    pub timings: StageTimings,
}

impl InteriorStats {
    pub(crate) fn from_stats(stats: Stats, count: usize) -> Self {
        Self {
            count,
            mean: stats.mean,
            variance: stats.variance,
        }
    }
}
