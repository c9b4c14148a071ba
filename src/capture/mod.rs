//! Cursor position capture
//!
//! The acquisition side of the pipeline: a [`source::CursorSource`] yields
//! raw screen coordinates, and [`recorder::Recorder`] polls it on a fixed
//! interval for a configured duration, producing an immutable
//! [`types::SampleBatch`] that is handed to analysis only after capture has
//! fully stopped.

pub mod recorder;
pub mod source;
pub mod types;
