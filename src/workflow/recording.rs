//! Recording data structures
//!
//! The on-disk format for captured sessions: metadata plus the raw sample
//! batch, serialized as JSON. Keeping the raw samples around lets a session
//! be re-analyzed later with different options (other tablet, other outlier
//! policy) without recording again.

use crate::capture::types::SampleBatch;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Current recording format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

/// Recording metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingMetadata {
    /// Unique recording ID
    pub id: Uuid,
    /// Recording name
    pub name: String,
    /// When capture started
    pub started_at: DateTime<Utc>,
    /// When capture ended
    pub ended_at: Option<DateTime<Utc>>,
    /// Number of captured samples
    pub sample_count: usize,
    /// Capture duration in milliseconds
    pub duration_ms: u64,
    /// Version of the recording format
    pub format_version: String,
}

impl RecordingMetadata {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            started_at: Utc::now(),
            ended_at: None,
            sample_count: 0,
            duration_ms: 0,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }

    /// Stamp the end of capture.
    pub fn finalize(&mut self, sample_count: usize, duration_ms: u64) {
        self.ended_at = Some(Utc::now());
        self.sample_count = sample_count;
        self.duration_ms = duration_ms;
    }
}

impl Default for RecordingMetadata {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// A persisted capture session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    pub metadata: RecordingMetadata,
    pub batch: SampleBatch,
}

impl Recording {
    /// Wrap a finished batch with fresh metadata.
    pub fn from_batch(name: String, batch: SampleBatch) -> Self {
        let mut metadata = RecordingMetadata::new(name);
        metadata.finalize(batch.len(), batch.duration_ms());
        Self { metadata, batch }
    }

    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    /// Save as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a recording from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let recording = serde_json::from_str(&content)?;
        Ok(recording)
    }
}
