//! Device geometry and pixel-to-millimeter conversion
//!
//! Holds the tablet's physical active-area dimensions and the display
//! resolution, and derives the inner gameplay region the tablet is mapped to.
//! The gameplay region is a fixed-aspect crop of the display: the standard
//! 4:3 playfield letterboxed inside a 16:9 screen, i.e. 1152/1920 of the
//! width and 864/1080 of the height.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Horizontal fraction of the display covered by the gameplay region.
pub const ACTIVE_WIDTH_RATIO: f64 = 1152.0 / 1920.0;

/// Vertical fraction of the display covered by the gameplay region.
pub const ACTIVE_HEIGHT_RATIO: f64 = 864.0 / 1080.0;

/// Fixed per-run geometry: tablet physical size and display resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceGeometry {
    /// Tablet active-area width in millimeters
    pub tablet_width_mm: f64,
    /// Tablet active-area height in millimeters
    pub tablet_height_mm: f64,
    /// Full display width in pixels
    pub screen_width_px: u32,
    /// Full display height in pixels
    pub screen_height_px: u32,
}

impl DeviceGeometry {
    /// Build a geometry, rejecting non-positive dimensions and resolutions
    /// too small to contain a gameplay region.
    pub fn new(
        tablet_width_mm: f64,
        tablet_height_mm: f64,
        screen_width_px: u32,
        screen_height_px: u32,
    ) -> Result<Self> {
        if !(tablet_width_mm > 0.0) || !tablet_width_mm.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "tablet width must be positive, got {tablet_width_mm} mm"
            )));
        }
        if !(tablet_height_mm > 0.0) || !tablet_height_mm.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "tablet height must be positive, got {tablet_height_mm} mm"
            )));
        }
        if screen_width_px == 0 || screen_height_px == 0 {
            return Err(Error::InvalidGeometry(format!(
                "screen resolution must be positive, got {screen_width_px}x{screen_height_px} px"
            )));
        }

        let geometry = Self {
            tablet_width_mm,
            tablet_height_mm,
            screen_width_px,
            screen_height_px,
        };

        // Truncation can collapse the derived region at tiny resolutions;
        // reject that here so conversion never divides by zero.
        if geometry.active_width_px() == 0 || geometry.active_height_px() == 0 {
            return Err(Error::InvalidGeometry(format!(
                "derived gameplay region is empty for a {screen_width_px}x{screen_height_px} px screen"
            )));
        }

        Ok(geometry)
    }

    /// Width of the gameplay region in pixels (truncated, matching the
    /// integer crop the game client applies).
    pub fn active_width_px(&self) -> u32 {
        (ACTIVE_WIDTH_RATIO * self.screen_width_px as f64) as u32
    }

    /// Height of the gameplay region in pixels.
    pub fn active_height_px(&self) -> u32 {
        (ACTIVE_HEIGHT_RATIO * self.screen_height_px as f64) as u32
    }

    /// Convert a horizontal pixel distance to millimeters of tablet surface.
    ///
    /// Pure linear scale, no clamping: a distance wider than the gameplay
    /// region legitimately maps to more than the full tablet width.
    pub fn width_to_mm(&self, px: f64) -> f64 {
        px * self.tablet_width_mm / self.active_width_px() as f64
    }

    /// Convert a vertical pixel distance to millimeters of tablet surface.
    pub fn height_to_mm(&self, px: f64) -> f64 {
        px * self.tablet_height_mm / self.active_height_px() as f64
    }
}
