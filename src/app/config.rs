//! Configuration management

use crate::analysis::outlier::{DEFAULT_LOWER_PERCENTILE, DEFAULT_UPPER_PERCENTILE};
use crate::analysis::peaks::DEFAULT_THRESHOLD_PERCENT;
use crate::analysis::{outlier::OutlierPolicy, AnalysisOptions};
use crate::{DeviceGeometry, Error};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Capture settings
    pub capture: CaptureConfig,
    /// Display resolution
    pub display: DisplayConfig,
    /// Tablet physical dimensions
    pub tablet: TabletConfig,
    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Cursor polling interval in milliseconds
    pub interval_ms: u64,
    /// Default recording duration in seconds
    pub duration_secs: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Full display width in pixels
    pub width_px: u32,
    /// Full display height in pixels
    pub height_px: u32,
}

/// Tablet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabletConfig {
    /// Preset model name (informational; dimensions below are what count)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Active-area width in millimeters
    pub width_mm: f64,
    /// Active-area height in millimeters
    pub height_mm: f64,
}

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Outlier policy: "percentile" or "std-dev"
    pub policy: String,
    /// Percentile bounds for the percentile policy
    pub lower_percentile: f64,
    pub upper_percentile: f64,
    /// Near-boundary band width in percent of the trimmed span
    pub threshold_percent: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            interval_ms: 10,
            duration_secs: 60,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width_px: 1920,
            height_px: 1080,
        }
    }
}

impl Default for TabletConfig {
    fn default() -> Self {
        // Wacom CTL-472, the most common entry-level osu! tablet
        Self {
            model: Some("CTL-472".to_string()),
            width_mm: 152.0,
            height_mm: 95.0,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            policy: "percentile".to_string(),
            lower_percentile: DEFAULT_LOWER_PERCENTILE,
            upper_percentile: DEFAULT_UPPER_PERCENTILE,
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), Error> {
        if self.capture.interval_ms == 0 {
            return Err(Error::Config("interval_ms must be > 0".to_string()));
        }
        if self.tablet.width_mm <= 0.0 || self.tablet.height_mm <= 0.0 {
            return Err(Error::Config(format!(
                "tablet dimensions must be positive, got {}x{} mm",
                self.tablet.width_mm, self.tablet.height_mm
            )));
        }
        if self.display.width_px == 0 || self.display.height_px == 0 {
            return Err(Error::Config(format!(
                "display resolution must be positive, got {}x{} px",
                self.display.width_px, self.display.height_px
            )));
        }
        match self.analysis.policy.as_str() {
            "percentile" | "std-dev" => {}
            other => {
                return Err(Error::Config(format!(
                    "unknown outlier policy '{other}' (expected 'percentile' or 'std-dev')"
                )))
            }
        }
        if self.analysis.threshold_percent > 100 {
            return Err(Error::Config(format!(
                "threshold_percent must be <= 100, got {}",
                self.analysis.threshold_percent
            )));
        }
        if !(0.0..=100.0).contains(&self.analysis.lower_percentile)
            || !(0.0..=100.0).contains(&self.analysis.upper_percentile)
            || self.analysis.lower_percentile > self.analysis.upper_percentile
        {
            return Err(Error::Config(format!(
                "percentile bounds must satisfy 0 <= lower <= upper <= 100, got {}/{}",
                self.analysis.lower_percentile, self.analysis.upper_percentile
            )));
        }
        Ok(())
    }

    /// Device geometry built from the display and tablet sections.
    pub fn geometry(&self) -> Result<DeviceGeometry, Error> {
        DeviceGeometry::new(
            self.tablet.width_mm,
            self.tablet.height_mm,
            self.display.width_px,
            self.display.height_px,
        )
    }

    /// Analysis options built from the analysis section.
    pub fn analysis_options(&self) -> AnalysisOptions {
        let policy = match self.analysis.policy.as_str() {
            "std-dev" => OutlierPolicy::StdDev,
            _ => OutlierPolicy::Percentile {
                lower: self.analysis.lower_percentile,
                upper: self.analysis.upper_percentile,
            },
        };
        AnalysisOptions {
            policy,
            threshold_percent: self.analysis.threshold_percent,
        }
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default location, falling back to defaults if
    /// no file exists.
    pub fn load_default() -> Result<Self, Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), Error> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".tablet_area").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
