// File: crates/figure-core/src/curve.rs
// Summary: Power-law transfer curve sampling; the data source for every chart.

use thiserror::Error;

/// Parameter validation failure for [`sample`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("gamma must be strictly positive, got {0}")]
    Gamma(f64),
    #[error("step count must be at least 1, got {0}")]
    StepCount(usize),
}

/// The plotted transfer function, `1 - x^gamma`.
/// The `1 -` matches the figure orientation: the input axis sits at y = 1
/// and output values grow upward toward y = 0.
#[inline]
pub fn transfer(gamma: f64, x: f64) -> f64 {
    1.0 - x.powf(gamma)
}

/// Uniform division of [0, 1] into `steps` intervals: `steps + 1` values
/// `i / steps`. Shared by the sample abscissas and the quantization
/// ladder tick positions.
pub fn levels(steps: usize) -> Vec<f64> {
    (0..=steps).map(|i| i as f64 / steps as f64).collect()
}

/// Sample the transfer curve at `step_count + 1` evenly spaced inputs.
///
/// Points are ordered by strictly increasing x from (0, 1) to (1, 0) and
/// are meant to be connected in sequence as a polyline. Sampling is
/// uniform in the input domain; no adaptive refinement. Pure: identical
/// arguments always yield an identical sequence.
pub fn sample(gamma: f64, step_count: usize) -> Result<Vec<(f64, f64)>, InvalidParameter> {
    if !(gamma > 0.0) {
        return Err(InvalidParameter::Gamma(gamma));
    }
    if step_count < 1 {
        return Err(InvalidParameter::StepCount(step_count));
    }
    Ok(levels(step_count)
        .into_iter()
        .map(|x| (x, transfer(gamma, x)))
        .collect())
}
