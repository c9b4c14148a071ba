//! Recording persistence and session orchestration

pub mod recording;

pub use recording::{Recording, RecordingMetadata};
