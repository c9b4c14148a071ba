//! CLI surface, configuration, and tablet presets

pub mod cli;
pub mod config;
pub mod presets;
