//! Usable-area estimation
//!
//! The core of the tool: turns a finished capture into two physical
//! measurements per axis. Each axis is processed independently: trim
//! outliers, locate the most-used coordinates near the trimmed boundaries,
//! then convert both pixel extents to millimeters of tablet surface.
//!
//! Everything here is a pure function of its inputs; given the same batch,
//! geometry, and options the result is identical.

pub mod geometry;
pub mod outlier;
pub mod peaks;

use crate::capture::types::SampleBatch;
use crate::Result;
use geometry::DeviceGeometry;
use outlier::{AxisExtent, OutlierPolicy};
use peaks::{locate_peaks, PeakPair, DEFAULT_THRESHOLD_PERCENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Tunables for the estimation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// How outliers are removed before the extent is taken.
    pub policy: OutlierPolicy,
    /// Width of the near-boundary band as a percentage of the trimmed span.
    pub threshold_percent: u8,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            policy: OutlierPolicy::default(),
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
        }
    }
}

/// Measurements for one axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AxisReport {
    /// Trimmed pixel range after outlier removal
    pub extent: AxisExtent,
    /// Most-used coordinates near the trimmed boundaries
    pub peaks: PeakPair,
    /// Trimmed extent converted to millimeters
    pub trimmed_mm: f64,
    /// Peak-to-peak distance converted to millimeters
    pub peak_mm: f64,
}

/// The result of a full analysis run: one report per axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AreaReport {
    pub x: AxisReport,
    pub y: AxisReport,
    /// Number of samples the estimate is based on
    pub sample_count: usize,
}

impl AreaReport {
    /// False when any peak fell back to its extent boundary because the
    /// near-boundary band was empty; the peak numbers then just repeat the
    /// trimmed numbers and should be treated with suspicion.
    pub fn peaks_reliable(&self) -> bool {
        self.x.peaks.is_reliable() && self.y.peaks.is_reliable()
    }
}

impl fmt::Display for AreaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== RESULTS ====")?;
        writeln!(
            f,
            "Max used area (outliers removed): {:.2} x {:.2} mm",
            self.x.trimmed_mm, self.y.trimmed_mm
        )?;
        writeln!(
            f,
            "Area near most-used points:       {:.2} x {:.2} mm",
            self.x.peak_mm, self.y.peak_mm
        )?;
        if !self.peaks_reliable() {
            writeln!(
                f,
                "(peak estimate unreliable: no samples near one or more boundaries)"
            )?;
        }
        write!(f, "=================")
    }
}

/// Run the full estimation pipeline on a finished capture.
///
/// Fails with [`crate::Error::EmptyInput`] when the batch holds no samples.
/// Geometry is validated at construction, so conversion here cannot divide
/// by zero.
pub fn analyze_batch(
    batch: &SampleBatch,
    geometry: &DeviceGeometry,
    options: &AnalysisOptions,
) -> Result<AreaReport> {
    let xs = batch.xs();
    let ys = batch.ys();

    let x = analyze_axis(&xs, options, |px| geometry.width_to_mm(px))?;
    let y = analyze_axis(&ys, options, |px| geometry.height_to_mm(px))?;

    debug!(
        "Analyzed {} samples: x {:?}, y {:?}",
        batch.len(),
        x.extent,
        y.extent
    );

    Ok(AreaReport {
        x,
        y,
        sample_count: batch.len(),
    })
}

/// Estimate one axis: trim, locate peaks, convert.
fn analyze_axis(
    samples: &[u32],
    options: &AnalysisOptions,
    to_mm: impl Fn(f64) -> f64,
) -> Result<AxisReport> {
    let extent = options.policy.trim(samples)?;
    let peaks = locate_peaks(samples, extent, options.threshold_percent);

    Ok(AxisReport {
        extent,
        peaks,
        trimmed_mm: to_mm(extent.span() as f64),
        peak_mm: to_mm(peaks.span() as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::types::CursorSample;
    use crate::Error;

    fn batch_from_coords(coords: &[(u32, u32)]) -> SampleBatch {
        SampleBatch::new(
            coords
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| CursorSample::new(x, y, i as u64 * 10))
                .collect(),
        )
    }

    fn test_geometry() -> DeviceGeometry {
        // 300 mm square tablet, active region forced to 800 px per axis:
        // 800 / (1152/1920) = 4000/3, pick resolutions that truncate to 800.
        DeviceGeometry::new(300.0, 300.0, 1334, 1000).unwrap()
    }

    #[test]
    fn test_geometry_helper_active_region() {
        let g = test_geometry();
        assert_eq!(g.active_width_px(), 800);
        assert_eq!(g.active_height_px(), 800);
    }

    #[test]
    fn test_empty_batch_fails() {
        let result = analyze_batch(
            &SampleBatch::default(),
            &test_geometry(),
            &AnalysisOptions::default(),
        );
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_concrete_scenario() {
        // Same series on both axes; peak distance 800 px over an 800 px
        // region on a 300 mm tablet is exactly 300.00 mm.
        let series = [100u32, 100, 100, 500, 500, 500, 900, 900, 901, 899];
        let coords: Vec<(u32, u32)> = series.iter().map(|&v| (v, v)).collect();
        let batch = batch_from_coords(&coords);

        let report =
            analyze_batch(&batch, &test_geometry(), &AnalysisOptions::default()).unwrap();

        assert_eq!(report.x.extent, AxisExtent::new(100, 901));
        assert_eq!(report.x.peaks.min_peak, 100);
        assert_eq!(report.x.peaks.max_peak, 900);
        assert!((report.x.peak_mm - 300.0).abs() < 1e-9);
        assert!((report.y.peak_mm - 300.0).abs() < 1e-9);
        assert!(report.peaks_reliable());
    }

    #[test]
    fn test_axes_are_independent() {
        // Wide x, narrow y
        let coords: Vec<(u32, u32)> = (0..100).map(|i| (i * 8, 400 + i % 3)).collect();
        let batch = batch_from_coords(&coords);

        let report =
            analyze_batch(&batch, &test_geometry(), &AnalysisOptions::default()).unwrap();
        assert!(report.x.trimmed_mm > report.y.trimmed_mm * 10.0);
    }

    #[test]
    fn test_uniform_series_peak_close_to_trimmed() {
        // Uniform in [100, 900] with no outliers: the peak extent sits within
        // the 5% band of the trimmed extent.
        let coords: Vec<(u32, u32)> = (0..=800).map(|i| (100 + i, 100 + i)).collect();
        let batch = batch_from_coords(&coords);

        let report =
            analyze_batch(&batch, &test_geometry(), &AnalysisOptions::default()).unwrap();

        let band_mm = report.x.trimmed_mm * 0.05;
        assert!((report.x.trimmed_mm - report.x.peak_mm).abs() <= 2.0 * band_mm);
    }

    #[test]
    fn test_stationary_cursor_zero_area() {
        let batch = batch_from_coords(&[(640, 480); 50]);
        let report =
            analyze_batch(&batch, &test_geometry(), &AnalysisOptions::default()).unwrap();

        assert_eq!(report.x.trimmed_mm, 0.0);
        assert_eq!(report.y.peak_mm, 0.0);
        assert!(report.peaks_reliable());
    }

    #[test]
    fn test_std_dev_policy_selectable() {
        let series = [100u32, 100, 100, 500, 500, 500, 900, 900, 901, 899];
        let coords: Vec<(u32, u32)> = series.iter().map(|&v| (v, v)).collect();
        let batch = batch_from_coords(&coords);

        let options = AnalysisOptions {
            policy: OutlierPolicy::StdDev,
            ..Default::default()
        };
        let report = analyze_batch(&batch, &test_geometry(), &options).unwrap();

        // Nothing is 3 sigma out in this series, so the extent is the raw range
        assert_eq!(report.x.extent, AxisExtent::new(100, 901));
    }

    #[test]
    fn test_report_display_two_decimals() {
        let batch = batch_from_coords(&[(100, 100), (900, 900), (100, 100), (900, 900)]);
        let report =
            analyze_batch(&batch, &test_geometry(), &AnalysisOptions::default()).unwrap();

        let rendered = report.to_string();
        assert!(rendered.contains("==== RESULTS ===="));
        assert!(rendered.contains("300.00 x 300.00 mm"));
    }

    #[test]
    fn test_report_display_flags_unreliable() {
        let report = AreaReport {
            x: AxisReport {
                extent: AxisExtent::new(0, 10),
                peaks: PeakPair {
                    min_peak: 0,
                    max_peak: 10,
                    min_is_fallback: true,
                    max_is_fallback: false,
                },
                trimmed_mm: 1.0,
                peak_mm: 1.0,
            },
            y: AxisReport {
                extent: AxisExtent::new(0, 10),
                peaks: PeakPair {
                    min_peak: 0,
                    max_peak: 10,
                    min_is_fallback: false,
                    max_is_fallback: false,
                },
                trimmed_mm: 1.0,
                peak_mm: 1.0,
            },
            sample_count: 2,
        };

        assert!(!report.peaks_reliable());
        assert!(report.to_string().contains("unreliable"));
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let batch = batch_from_coords(&[(100, 100), (900, 900)]);
        let report =
            analyze_batch(&batch, &test_geometry(), &AnalysisOptions::default()).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let back: AreaReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sample_count, report.sample_count);
        assert_eq!(back.x.extent, report.x.extent);
    }
}
