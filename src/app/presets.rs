//! Tablet preset catalog
//!
//! Known tablet models and their active-area dimensions, embedded as JSON so
//! users can pick a model instead of hunting down a spec sheet. Dimensions
//! are the manufacturer's full active area in millimeters.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Embedded catalog source.
const CATALOG_JSON: &str = include_str!("../../data/tablets.json");

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabletPreset {
    pub brand: String,
    pub model: String,
    pub width_mm: f64,
    pub height_mm: f64,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tablets: Vec<TabletPreset>,
}

/// The catalog of known tablets.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    tablets: Vec<TabletPreset>,
}

impl PresetCatalog {
    /// Load the embedded catalog.
    pub fn builtin() -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(CATALOG_JSON)?;
        Ok(Self {
            tablets: file.tablets,
        })
    }

    pub fn tablets(&self) -> &[TabletPreset] {
        &self.tablets
    }

    /// Distinct brands, sorted.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = self.tablets.iter().map(|t| t.brand.clone()).collect();
        brands.sort();
        brands.dedup();
        brands
    }

    /// Models of one brand, sorted. Brand matching is case-insensitive.
    pub fn models_for(&self, brand: &str) -> Vec<&TabletPreset> {
        let mut models: Vec<&TabletPreset> = self
            .tablets
            .iter()
            .filter(|t| t.brand.eq_ignore_ascii_case(brand))
            .collect();
        models.sort_by(|a, b| a.model.cmp(&b.model));
        models
    }

    /// Look up a model by name (case-insensitive, any brand).
    pub fn find(&self, model: &str) -> Result<&TabletPreset> {
        self.tablets
            .iter()
            .find(|t| t.model.eq_ignore_ascii_case(model))
            .ok_or_else(|| Error::Preset(format!("unknown tablet model '{model}'")))
    }
}
