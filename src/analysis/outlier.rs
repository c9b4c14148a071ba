//! Outlier trimming
//!
//! Reduces one axis of raw samples to a trimmed min/max extent. Two policies
//! exist in the tool's lineage; [`OutlierPolicy::Percentile`] is the
//! canonical default and [`OutlierPolicy::StdDev`] is kept as a named,
//! selectable alternative rather than a second code path.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lower percentile used by the default trimming policy.
pub const DEFAULT_LOWER_PERCENTILE: f64 = 0.01;

/// Upper percentile used by the default trimming policy.
pub const DEFAULT_UPPER_PERCENTILE: f64 = 99.99;

/// A trimmed per-axis pixel range, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub min: u32,
    pub max: u32,
}

impl AxisExtent {
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Width of the extent in pixels.
    pub fn span(&self) -> u32 {
        self.max - self.min
    }
}

/// Outlier removal policy, selected once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "policy")]
pub enum OutlierPolicy {
    /// Trim to the `lower`/`upper` percentiles of the sample values,
    /// with linear interpolation between order statistics. Deterministic and
    /// insensitive to sample count beyond interpolation effects.
    Percentile { lower: f64, upper: f64 },
    /// Keep samples strictly inside mean ± 3 population standard deviations;
    /// the extent is the retained min/max. Identical samples (sigma = 0)
    /// short-circuit to the degenerate extent.
    StdDev,
}

impl Default for OutlierPolicy {
    fn default() -> Self {
        Self::Percentile {
            lower: DEFAULT_LOWER_PERCENTILE,
            upper: DEFAULT_UPPER_PERCENTILE,
        }
    }
}

impl OutlierPolicy {
    /// Trim one axis of samples to an extent.
    ///
    /// Errors with [`Error::EmptyInput`] on an empty series. A single sample
    /// yields the degenerate extent `(v, v)`.
    pub fn trim(&self, samples: &[u32]) -> Result<AxisExtent> {
        if samples.is_empty() {
            return Err(Error::EmptyInput);
        }

        match *self {
            OutlierPolicy::Percentile { lower, upper } => trim_percentile(samples, lower, upper),
            OutlierPolicy::StdDev => Ok(trim_std_dev(samples)),
        }
    }
}

/// Percentile trim with linear interpolation between order statistics.
fn trim_percentile(samples: &[u32], lower: f64, upper: f64) -> Result<AxisExtent> {
    if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) || lower > upper {
        return Err(Error::Config(format!(
            "percentile bounds must satisfy 0 <= lower <= upper <= 100, got {lower}/{upper}"
        )));
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let min = percentile_of_sorted(&sorted, lower);
    let max = percentile_of_sorted(&sorted, upper);

    // Interpolated values lie within [first, last] of the sorted series, so
    // rounding to the nearest integer keeps the extent inside the data.
    Ok(AxisExtent::new(
        min.round() as u32,
        max.round() as u32,
    ))
}

/// Linear-interpolated percentile of an already sorted slice.
fn percentile_of_sorted(sorted: &[u32], pct: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0] as f64;
    }
    let rank = pct / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo] as f64;
    }
    let frac = rank - lo as f64;
    sorted[lo] as f64 + frac * (sorted[hi] as f64 - sorted[lo] as f64)
}

/// Three-sigma trim: retain samples strictly inside (mean - 3s, mean + 3s).
fn trim_std_dev(samples: &[u32]) -> AxisExtent {
    let n = samples.len() as f64;
    let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let sigma = variance.sqrt();

    if sigma == 0.0 {
        // All samples identical; the strict band would be empty.
        let v = samples[0];
        return AxisExtent::new(v, v);
    }

    let lo = mean - 3.0 * sigma;
    let hi = mean + 3.0 * sigma;

    let mut min = u32::MAX;
    let mut max = u32::MIN;
    let mut kept = 0usize;
    for &v in samples {
        let f = v as f64;
        if f > lo && f < hi {
            min = min.min(v);
            max = max.max(v);
            kept += 1;
        }
    }

    if kept == 0 {
        // Pathological distributions can empty the strict band; fall back to
        // the unfiltered range rather than inventing an extent.
        let min = *samples.iter().min().unwrap_or(&0);
        let max = *samples.iter().max().unwrap_or(&0);
        return AxisExtent::new(min, max);
    }

    AxisExtent::new(min, max)
}
