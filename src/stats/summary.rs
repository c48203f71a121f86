//! Sample summaries with explicit "undefined" for empty samples.

use serde::{Deserialize, Serialize};

pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Sample standard deviation (n − 1 denominator).
///
/// A single sample gives 0, not `None`.
pub fn sample_stdev(xs: &[f64]) -> Option<f64> {
    match xs.len() {
        0 => None,
        1 => Some(0.0),
        n => {
            let m = mean(xs)?;
            let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
            Some((ss / (n - 1) as f64).sqrt())
        }
    }
}

pub fn max(xs: &[f64]) -> Option<f64> {
    xs.iter().copied().reduce(f64::max)
}

/// (mean, sample stdev) of one sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanStdev {
    pub mean: Option<f64>,
    pub stdev: Option<f64>,
}

impl MeanStdev {
    pub fn of(xs: &[f64]) -> Self {
        Self { mean: mean(xs), stdev: sample_stdev(xs) }
    }
}

/// (mean, max) of one sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanMax {
    pub mean: Option<f64>,
    pub max: Option<f64>,
}

impl MeanMax {
    pub fn of(xs: &[f64]) -> Self {
        Self { mean: mean(xs), max: max(xs) }
    }
}
