//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Tablet Area - Measure the tablet surface you actually use
#[derive(Parser, Debug)]
#[command(name = "tablet-area")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a session and report the used area in one go
    Measure {
        /// Recording duration in seconds (0 = until Ctrl+C)
        #[arg(short, long, default_value = "60")]
        duration: u64,

        /// Save the raw samples under this name for later re-analysis
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Record cursor movement and save it without analyzing
    Record {
        /// Recording duration in seconds (0 = until Ctrl+C)
        #[arg(short, long, default_value = "60")]
        duration: u64,

        /// Recording name (timestamped if not provided)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Re-analyze a saved recording
    Analyze {
        /// Recording file or name
        #[arg(short, long)]
        input: PathBuf,

        /// Near-boundary band width in percent of the trimmed span
        #[arg(short, long)]
        threshold: Option<u8>,
    },

    /// List saved recordings
    List {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Delete a saved recording
    Delete {
        /// Recording name to delete
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List known tablet models and their active-area sizes
    Tablets {
        /// Only show models of this brand
        #[arg(short, long)]
        brand: Option<String>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the recordings directory
    pub fn recordings_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".tablet_area").join("recordings"))
            .unwrap_or_else(|| PathBuf::from("recordings"))
    }

    /// Resolve a recording argument: an existing path is taken as-is,
    /// anything else is treated as a recording name and looked up in the
    /// recordings directory. A `.json` extension on the name is stripped
    /// first so `foo.json` resolves to `foo.json`, not `foo.json.json`.
    pub fn resolve_recording(input: &Path) -> PathBuf {
        if input.exists() {
            return input.to_path_buf();
        }
        let has_json_ext = input
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let name = if has_json_ext {
            input.file_stem().unwrap_or_default().to_string_lossy().into_owned()
        } else {
            input.display().to_string()
        };
        Self::recordings_dir().join(format!("{name}.json"))
    }
}
