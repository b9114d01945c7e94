//! Plate configuration.
//!
//! Defaults reproduce the standard swatch sheet. A JSON file named by
//! `TINCT_PLATE_CONFIG` overrides any subset of fields, and
//! `TINCT_PLATE_OUT` overrides the output path last.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tinct_core::Color;

use crate::error::PlateError;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "TINCT_PLATE_CONFIG";
/// Environment variable overriding the output path. `-` writes to stdout.
pub const OUTPUT_ENV: &str = "TINCT_PLATE_OUT";

/// Default output file.
const DEFAULT_OUTPUT: &str = "plate.html";
/// Default number of intervals between 0.0 and 1.0 for weighted sweeps.
const DEFAULT_STEPS: u32 = 5;
/// Default hue increment for the hue sweep, in degrees.
const DEFAULT_HUE_STEP: f64 = 72.0;
/// Upper bound on `steps`, which sets the swatch count of each weighted row.
const MAX_STEPS: u32 = 100;
/// Smallest accepted hue increment; keeps the hue row to at most 361 swatches.
const MIN_HUE_STEP: f64 = 1.0;

/// What the plate shows and where it goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateConfig {
    /// Color swept by every weighted manipulation except saturate.
    pub base: Color,
    /// Muted color used for the saturate sweep, where `base` is already vivid.
    pub saturate_base: Color,
    /// Color `base` is mixed toward.
    pub mix_target: Color,
    /// Colors shown for the parameterless manipulations.
    pub swatches: Vec<Color>,
    /// Intervals between weight 0.0 and 1.0 (5 → 0.0, 0.2, ... 1.0).
    pub steps: u32,
    /// Hue increment for the adjust-hue sweep (1 to 360 degrees); the row
    /// runs from 0 through 360 inclusive.
    pub hue_step: f64,
    /// Output HTML file, or `-` for stdout.
    pub output: PathBuf,
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            base: Color::rgb(0.0, 173.0, 234.0),
            saturate_base: Color::rgb(74.0, 95.0, 69.0),
            mix_target: Color::rgb(255.0, 0.0, 0.0),
            swatches: vec![
                Color::rgb(255.0, 0.0, 0.0),
                Color::rgb(255.0, 165.0, 0.0),
                Color::rgb(255.0, 255.0, 0.0),
                Color::rgb(0.0, 128.0, 0.0),
                Color::rgb(0.0, 0.0, 255.0),
                Color::WHITE,
            ],
            steps: DEFAULT_STEPS,
            hue_step: DEFAULT_HUE_STEP,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl PlateConfig {
    /// Build the configuration from defaults, the optional config file and
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Fails when the config file cannot be read or is not valid JSON.
    pub fn load() -> Result<Self, PlateError> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(output) = std::env::var_os(OUTPUT_ENV) {
            config.output = PathBuf::from(output);
        }
        Ok(config)
    }

    /// Read a JSON config file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid JSON.
    pub fn from_path(path: &Path) -> Result<Self, PlateError> {
        tracing::info!("loading plate config from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| PlateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::Config`] for malformed JSON or an unknown color,
    /// and [`PlateError::Invalid`] when `steps` or `hue_step` is out of range.
    pub fn from_json(text: &str) -> Result<Self, PlateError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the sweep parameters produce a bounded plate.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), PlateError> {
        if !(1..=MAX_STEPS).contains(&self.steps) {
            return Err(PlateError::Invalid(format!(
                "steps must be between 1 and {MAX_STEPS}, got {}",
                self.steps
            )));
        }
        if !(MIN_HUE_STEP..=360.0).contains(&self.hue_step) {
            return Err(PlateError::Invalid(format!(
                "hue_step must be between {MIN_HUE_STEP} and 360 degrees, got {}",
                self.hue_step
            )));
        }
        Ok(())
    }

    /// Whether the plate should be written to stdout instead of a file.
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
