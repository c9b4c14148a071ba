//! Peak location near trimmed extremes
//!
//! Within a tolerance band around each trimmed boundary, finds the most
//! frequently sampled coordinate (the value the player actually parks the
//! cursor at), giving a tighter extent than the raw trimmed min/max.

use super::outlier::AxisExtent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default tolerance band, as a percentage of the trimmed span.
pub const DEFAULT_THRESHOLD_PERCENT: u8 = 5;

/// Most-sampled coordinates near an extent's boundaries.
///
/// `min_peak <= max_peak` holds for any band carved out of a real sample
/// series, but it is not enforced structurally; distance computations
/// downstream saturate instead of assuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakPair {
    pub min_peak: u32,
    pub max_peak: u32,
    /// True when the near-min subset was empty and the extent boundary was
    /// used unchanged.
    pub min_is_fallback: bool,
    /// True when the near-max subset was empty.
    pub max_is_fallback: bool,
}

impl PeakPair {
    /// Peak-to-peak distance in pixels, zero when the peaks cross.
    pub fn span(&self) -> u32 {
        self.max_peak.saturating_sub(self.min_peak)
    }

    /// True when both peaks were actually located in the data.
    pub fn is_reliable(&self) -> bool {
        !self.min_is_fallback && !self.max_is_fallback
    }
}

/// Locate the most-used coordinate near each boundary of `extent`.
///
/// The band is `extent.span() * threshold_percent / 100`, and both bands are
/// bounded by the extent itself: samples the trim step already rejected as
/// outliers must not re-enter here and win the mode. Within each band the
/// peak is the mode by exact value; ties go to the smallest value. An empty
/// band falls back to the extent boundary itself.
///
/// A degenerate extent (`min == max`) produces a zero band; both peaks then
/// equal the repeated value, which is a valid zero-distance outcome, not an
/// error.
pub fn locate_peaks(samples: &[u32], extent: AxisExtent, threshold_percent: u8) -> PeakPair {
    let band = extent.span() as f64 * threshold_percent as f64 / 100.0;
    let near_min_cutoff = extent.min as f64 + band;
    let near_max_cutoff = extent.max as f64 - band;

    let near_min = samples
        .iter()
        .copied()
        .filter(|&v| v >= extent.min && (v as f64) <= near_min_cutoff);
    let near_max = samples
        .iter()
        .copied()
        .filter(|&v| v <= extent.max && (v as f64) >= near_max_cutoff);

    let min_mode = mode_smallest(near_min);
    let max_mode = mode_smallest(near_max);

    PeakPair {
        min_peak: min_mode.unwrap_or(extent.min),
        max_peak: max_mode.unwrap_or(extent.max),
        min_is_fallback: min_mode.is_none(),
        max_is_fallback: max_mode.is_none(),
    }
}

/// Mode of an integer stream; among values sharing the top count, the
/// smallest wins. `None` for an empty stream.
fn mode_smallest(values: impl Iterator<Item = u32>) -> Option<u32> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    // Ascending key order: strictly-greater keeps the smallest tied value.
    let mut best: Option<(u32, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}
