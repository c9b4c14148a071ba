//! Timed cursor recording
//!
//! Polls a [`CursorSource`] on a fixed interval for a configured duration
//! (or until a stop flag flips), collecting positions into an owned
//! [`SampleBatch`]. The batch is returned only after the loop has fully
//! stopped, so the analysis side never observes a live collection.

use super::source::CursorSource;
use super::types::{CursorSample, SampleBatch};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default polling interval: 10 ms, ~100 samples per second.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

/// Polls a cursor source and accumulates samples.
pub struct Recorder {
    interval: Duration,
}

impl Recorder {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Record for a fixed duration.
    pub fn record_for<S: CursorSource>(&self, source: &mut S, duration: Duration) -> SampleBatch {
        let never_stop = Arc::new(AtomicBool::new(false));
        self.record_until(source, duration, &never_stop)
    }

    /// Record until the duration elapses or `stop` becomes true.
    ///
    /// A zero duration means "no time limit"; the stop flag is then the only
    /// way out, which is how the CLI wires Ctrl+C.
    pub fn record_until<S: CursorSource>(
        &self,
        source: &mut S,
        duration: Duration,
        stop: &Arc<AtomicBool>,
    ) -> SampleBatch {
        let mut samples = Vec::new();
        let start = Instant::now();
        let mut dropped = 0usize;

        info!(
            "Recording cursor every {:?} for {:?}",
            self.interval, duration
        );

        loop {
            if stop.load(Ordering::SeqCst) {
                break;
            }
            if !duration.is_zero() && start.elapsed() >= duration {
                break;
            }

            if let Some((x, y)) = source.position() {
                // Positions left of or above the primary display origin are
                // dropped here so the batch stays non-negative.
                if x >= 0 && y >= 0 {
                    samples.push(CursorSample::new(
                        x as u32,
                        y as u32,
                        start.elapsed().as_millis() as u64,
                    ));
                } else {
                    dropped += 1;
                }
            }

            std::thread::sleep(self.interval);
        }

        if dropped > 0 {
            debug!("Dropped {} samples with negative coordinates", dropped);
        }
        info!(
            "Capture stopped after {:.1}s with {} samples",
            start.elapsed().as_secs_f64(),
            samples.len()
        );

        SampleBatch::new(samples)
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::source::ScriptedSource;

    #[test]
    fn test_records_scripted_positions() {
        let mut source = ScriptedSource::new(vec![(100, 200), (110, 210), (120, 220)]);
        let recorder = Recorder::new(Duration::from_millis(1));

        let batch = recorder.record_for(&mut source, Duration::from_millis(20));

        assert!(!batch.is_empty());
        assert_eq!(batch.samples()[0].x, 100);
        assert_eq!(batch.samples()[0].y, 200);
    }

    #[test]
    fn test_drops_negative_coordinates() {
        let mut source = ScriptedSource::new(vec![(-5, 100), (-1, -1), (50, 60)]);
        let recorder = Recorder::new(Duration::from_millis(1));

        let batch = recorder.record_for(&mut source, Duration::from_millis(20));

        // Only the all-non-negative position survives
        assert!(!batch.is_empty());
        assert!(batch.samples().iter().all(|s| s.x == 50 && s.y == 60));
    }

    #[test]
    fn test_stop_flag_ends_capture() {
        let mut source = ScriptedSource::new(vec![(1, 1)]);
        let recorder = Recorder::new(Duration::from_millis(1));
        let stop = Arc::new(AtomicBool::new(true));

        // Already stopped: returns immediately with an empty batch
        let batch = recorder.record_until(&mut source, Duration::ZERO, &stop);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let mut source = ScriptedSource::new(vec![(10, 10)]);
        let recorder = Recorder::new(Duration::from_millis(1));

        let batch = recorder.record_for(&mut source, Duration::from_millis(15));

        let times: Vec<u64> = batch.samples().iter().map(|s| s.elapsed_ms).collect();
        for pair in times.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
