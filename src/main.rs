//! Tablet Area - Usable tablet surface measurement
//!
//! Records cursor movement during play and reports how much of the tablet's
//! physical active area was actually used.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tablet_area::analysis::analyze_batch;
use tablet_area::app::cli::{Cli, Commands, ConfigAction};
use tablet_area::app::config::Config;
use tablet_area::app::presets::PresetCatalog;
use tablet_area::capture::recorder::Recorder;
use tablet_area::capture::source::DeviceStateSource;
use tablet_area::capture::types::SampleBatch;
use tablet_area::workflow::recording::Recording;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Measure { duration, output } => {
            run_measure(duration, output, &config)?;
        }
        Commands::Record { duration, output } => {
            run_record(duration, output, &config)?;
        }
        Commands::Analyze { input, threshold } => {
            run_analyze(&input, threshold, &config)?;
        }
        Commands::List { detailed } => {
            run_list(detailed)?;
        }
        Commands::Delete { name, force } => {
            run_delete(&name, force)?;
        }
        Commands::Tablets { brand } => {
            run_tablets(brand)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

/// Capture a session and return the finished batch.
fn capture_session(duration_secs: u64, config: &Config) -> anyhow::Result<SampleBatch> {
    let mut source = DeviceStateSource::new();
    let recorder = Recorder::new(Duration::from_millis(config.capture.interval_ms));

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_handler = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_handler.store(true, Ordering::SeqCst);
    })?;

    if duration_secs == 0 {
        info!("Recording until Ctrl+C...");
    } else {
        info!("Recording for {} seconds (Ctrl+C to stop early)...", duration_secs);
    }

    let batch = recorder.record_until(
        &mut source,
        Duration::from_secs(duration_secs),
        &stop_flag,
    );
    info!("Captured {} samples", batch.len());
    Ok(batch)
}

/// Save a batch under the recordings directory and return its path.
fn save_batch(batch: SampleBatch, output: Option<String>) -> anyhow::Result<PathBuf> {
    let name = output.unwrap_or_else(|| {
        chrono::Local::now()
            .format("session_%Y%m%d_%H%M%S")
            .to_string()
    });
    let recording = Recording::from_batch(name.clone(), batch);
    let path = Cli::recordings_dir().join(format!("{name}.json"));
    recording.save(&path)?;
    info!("Saved recording to {:?}", path);
    Ok(path)
}

fn run_measure(duration: u64, output: Option<String>, config: &Config) -> anyhow::Result<()> {
    let geometry = config.geometry()?;
    let options = config.analysis_options();

    let batch = capture_session(duration, config)?;
    if batch.is_empty() {
        anyhow::bail!("No cursor samples captured; nothing to measure");
    }

    let report = analyze_batch(&batch, &geometry, &options)?;
    println!("{report}");

    if output.is_some() {
        save_batch(batch, output)?;
    }

    Ok(())
}

fn run_record(duration: u64, output: Option<String>, config: &Config) -> anyhow::Result<()> {
    let batch = capture_session(duration, config)?;
    if batch.is_empty() {
        warn!("Captured an empty session; saving it anyway");
    }
    save_batch(batch, output)?;
    Ok(())
}

fn run_analyze(input: &Path, threshold: Option<u8>, config: &Config) -> anyhow::Result<()> {
    // Accept either a path or a bare recording name
    let path = Cli::resolve_recording(input);
    if !path.exists() {
        anyhow::bail!("Recording not found: {:?}", input);
    }

    let recording = Recording::load(&path)?;
    info!(
        "Loaded '{}': {} samples over {:.1}s",
        recording.metadata.name,
        recording.len(),
        recording.metadata.duration_ms as f64 / 1000.0
    );

    let geometry = config.geometry()?;
    let mut options = config.analysis_options();
    if let Some(pct) = threshold {
        options.threshold_percent = pct;
    }

    let report = analyze_batch(&recording.batch, &geometry, &options)?;
    println!("{report}");
    Ok(())
}

fn run_list(detailed: bool) -> anyhow::Result<()> {
    let dir = Cli::recordings_dir();
    if !dir.exists() {
        println!("No recordings found.");
        return Ok(());
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(&dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    entries.sort();

    if entries.is_empty() {
        println!("No recordings found.");
        return Ok(());
    }

    for path in entries {
        if detailed {
            match Recording::load(&path) {
                Ok(recording) => println!(
                    "{}  {} samples, {:.1}s, recorded {}",
                    recording.metadata.name,
                    recording.metadata.sample_count,
                    recording.metadata.duration_ms as f64 / 1000.0,
                    recording.metadata.started_at.format("%Y-%m-%d %H:%M"),
                ),
                Err(e) => warn!("Skipping unreadable recording {:?}: {}", path, e),
            }
        } else if let Some(stem) = path.file_stem() {
            println!("{}", stem.to_string_lossy());
        }
    }
    Ok(())
}

fn run_delete(name: &str, force: bool) -> anyhow::Result<()> {
    let path = Cli::recordings_dir().join(format!("{name}.json"));
    if !path.exists() {
        anyhow::bail!("Recording '{}' not found in {:?}", name, Cli::recordings_dir());
    }

    if !force {
        println!("Delete recording '{name}'? [y/N]");
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    std::fs::remove_file(&path)?;
    info!("Deleted {:?}", path);
    Ok(())
}

fn run_tablets(brand: Option<String>) -> anyhow::Result<()> {
    let catalog = PresetCatalog::builtin()?;

    match brand {
        Some(brand) => {
            let models = catalog.models_for(&brand);
            if models.is_empty() {
                anyhow::bail!("No known tablets for brand '{}'", brand);
            }
            for tablet in models {
                println!(
                    "{:<12} {:<12} {:.1} x {:.1} mm",
                    tablet.brand, tablet.model, tablet.width_mm, tablet.height_mm
                );
            }
        }
        None => {
            for tablet in catalog.tablets() {
                println!(
                    "{:<12} {:<12} {:.1} x {:.1} mm",
                    tablet.brand, tablet.model, tablet.width_mm, tablet.height_mm
                );
            }
        }
    }
    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let path = Config::default_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}; use --force to overwrite",
            path
        );
    }
    config.save(&path)?;
    println!("Wrote config to {:?}", path);
    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Reset { force } => {
            if !force {
                println!("Reset configuration to defaults? [y/N]");
                let mut answer = String::new();
                std::io::stdin().read_line(&mut answer)?;
                if !answer.trim().eq_ignore_ascii_case("y") {
                    println!("Aborted.");
                    return Ok(());
                }
            }
            Config::default().save(&Config::default_path())?;
            println!("Configuration reset to defaults.");
        }
    }
    Ok(())
}
