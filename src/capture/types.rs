//! Core types for cursor capture
//!
//! Defines the sample structures shared by the capture loop, the persisted
//! recording format, and the analysis pipeline.

use serde::{Deserialize, Serialize};

/// A single captured cursor position.
///
/// Coordinates are screen pixels. They are stored unsigned: the capture
/// boundary discards positions left of or above the primary display origin
/// (possible in multi-monitor layouts), so everything downstream can rely on
/// non-negative values structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSample {
    /// Horizontal position in pixels
    pub x: u32,
    /// Vertical position in pixels
    pub y: u32,
    /// Milliseconds since capture started
    pub elapsed_ms: u64,
}

impl CursorSample {
    pub fn new(x: u32, y: u32, elapsed_ms: u64) -> Self {
        Self { x, y, elapsed_ms }
    }
}

/// A completed capture: cursor samples ordered by capture time.
///
/// Owned exclusively by whoever receives it; the capture loop never touches
/// the batch again after handing it off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleBatch {
    samples: Vec<CursorSample>,
}

impl SampleBatch {
    pub fn new(samples: Vec<CursorSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[CursorSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Horizontal coordinates, in capture order.
    pub fn xs(&self) -> Vec<u32> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// Vertical coordinates, in capture order.
    pub fn ys(&self) -> Vec<u32> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// Wall-clock span of the capture in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.elapsed_ms.saturating_sub(first.elapsed_ms),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let batch = SampleBatch::default();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert_eq!(batch.duration_ms(), 0);
        assert!(batch.xs().is_empty());
    }

    #[test]
    fn test_axis_split_preserves_order() {
        let batch = SampleBatch::new(vec![
            CursorSample::new(10, 100, 0),
            CursorSample::new(20, 200, 10),
            CursorSample::new(30, 300, 20),
        ]);

        assert_eq!(batch.xs(), vec![10, 20, 30]);
        assert_eq!(batch.ys(), vec![100, 200, 300]);
    }

    #[test]
    fn test_duration_from_elapsed() {
        let batch = SampleBatch::new(vec![
            CursorSample::new(0, 0, 5),
            CursorSample::new(0, 0, 15),
            CursorSample::new(0, 0, 1005),
        ]);
        assert_eq!(batch.duration_ms(), 1000);
    }

    #[test]
    fn test_sample_serialization_roundtrip() {
        let sample = CursorSample::new(640, 480, 42);
        let json = serde_json::to_string(&sample).unwrap();
        let back: CursorSample = serde_json::from_str(&json).unwrap();
        assert_eq!(sample, back);
    }
}
