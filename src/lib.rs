//! # Tablet Area
//!
//! Estimates how much of a graphics tablet's physical surface a player
//! actually uses during a timed play session. Cursor positions are sampled
//! while the player plays, outliers are trimmed from each axis, and the
//! remaining pixel extents are converted to millimeters using the tablet's
//! active-area dimensions and the on-screen gameplay region.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tablet_area::analysis::{analyze_batch, AnalysisOptions};
//! use tablet_area::analysis::geometry::DeviceGeometry;
//! use tablet_area::capture::recorder::Recorder;
//! use tablet_area::capture::source::DeviceStateSource;
//! use std::time::Duration;
//!
//! let geometry = DeviceGeometry::new(152.0, 95.0, 1920, 1080)?;
//!
//! let mut source = DeviceStateSource::new();
//! let recorder = Recorder::new(Duration::from_millis(10));
//! let batch = recorder.record_for(&mut source, Duration::from_secs(60));
//!
//! let report = analyze_batch(&batch, &geometry, &AnalysisOptions::default())?;
//! println!("{report}");
//! # Ok::<(), tablet_area::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`capture`]: cursor position sampling (the acquisition adapter)
//! - [`analysis`]: outlier trimming, peak location, pixel-to-mm conversion
//! - [`workflow`]: recording persistence (JSON)
//! - [`app`]: CLI, configuration, tablet preset catalog
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐    ┌───────────────┐    ┌──────────────┐    ┌────────────┐
//! │ Recorder │───▶│ Outlier trim  │───▶│ Peak locator │───▶│ px → mm    │
//! │ (poll)   │    │ (per axis)    │    │ (mode near   │    │ conversion │
//! └──────────┘    └───────────────┘    │  extremes)   │    └────────────┘
//!                                      └──────────────┘
//! ```
//!
//! The capture loop hands a finished, immutable [`capture::types::SampleBatch`]
//! to the analysis pipeline; the pipeline itself is a pure function with no
//! I/O and no shared state.

pub mod analysis;
pub mod app;
pub mod capture;
pub mod workflow;

// Re-export commonly used types
pub use analysis::geometry::DeviceGeometry;
pub use analysis::{analyze_batch, AnalysisOptions, AreaReport};
pub use capture::recorder::Recorder;
pub use capture::types::{CursorSample, SampleBatch};
pub use workflow::recording::Recording;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced by the measurement pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sample series was empty; no extent can be computed.
    #[error("no samples captured; cannot estimate a usable area")]
    EmptyInput,

    /// A geometry value was non-positive, or the derived active region
    /// collapsed to zero pixels.
    #[error("invalid device geometry: {0}")]
    InvalidGeometry(String),

    #[error("capture error: {0}")]
    Capture(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("tablet preset error: {0}")]
    Preset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
