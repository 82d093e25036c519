//! Configuration management for PocketCAM
//!
//! Supports JSON and TOML files; the format is chosen from the file
//! extension. A configuration is validated before it is saved and after it
//! is loaded, so a `Config` obtained from this module is always usable.
//!
//! Configuration is organized into logical sections:
//! - Tool (diameter, safe height, feed rate)
//! - Material (stock thickness, the default cutting depth)
//! - Pocket (depth override, offset, fill strategy and tuning)
//! - Output (units, line numbers)

use crate::error::{SettingsError, SettingsResult};
pub use pocketcam_core::MeasurementSystem;
use pocketcam_toolpath::{
    FillParameters, GcodeGenerator, PocketParameters, PocketStrategy, ToolProfile,
    DEFAULT_FEED_RATE, DEFAULT_SAFE_HEIGHT,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory created under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "pocketcam";

/// File name of the default configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Cutting tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Tool diameter (mm)
    pub diameter: f64,
    /// Height for rapid moves (mm)
    pub safe_height: f64,
    /// Cutting feed rate (mm/min)
    pub feed_rate: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            diameter: 3.175,
            safe_height: DEFAULT_SAFE_HEIGHT,
            feed_rate: DEFAULT_FEED_RATE,
        }
    }
}

/// Stock material settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    /// Stock thickness (mm); the pocket depth when none is given
    pub thickness: f64,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self { thickness: 3.0 }
    }
}

/// Pocketing settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PocketSettings {
    /// Cutting depth (mm); falls back to the material thickness
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Lateral offset of the cutting path from the boundary (mm)
    pub offset: f64,
    /// Area-fill strategy
    pub strategy: PocketStrategy,
    /// Fill tuning
    pub fill: FillParameters,
}

/// Program output settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Units written to the program
    pub units: MeasurementSystem,
    /// Prefix each line with an `N` word
    pub line_numbers: bool,
}

/// Complete machining configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tool: ToolSettings,
    pub material: MaterialSettings,
    pub pocket: PocketSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(SettingsError::UnsupportedFormat(other.to_string())),
            None => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Platform configuration directory for PocketCAM, created if missing.
    pub fn config_directory() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        path.push(CONFIG_DIR_NAME);
        std::fs::create_dir_all(&path)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }

    /// Location of the default configuration file.
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !is_positive(self.tool.diameter) {
            return Err(SettingsError::invalid("tool.diameter", "must be > 0"));
        }

        if !self.tool.safe_height.is_finite() || self.tool.safe_height < 0.0 {
            return Err(SettingsError::invalid("tool.safe_height", "must be >= 0"));
        }

        if !is_positive(self.tool.feed_rate) {
            return Err(SettingsError::invalid("tool.feed_rate", "must be > 0"));
        }

        if !is_positive(self.material.thickness) {
            return Err(SettingsError::invalid("material.thickness", "must be > 0"));
        }

        if let Some(depth) = self.pocket.depth {
            if !is_positive(depth) {
                return Err(SettingsError::invalid("pocket.depth", "must be > 0"));
            }
        }

        if !self.pocket.offset.is_finite() {
            return Err(SettingsError::invalid("pocket.offset", "must be finite"));
        }

        self.pocket
            .fill
            .validate()
            .map_err(|e| SettingsError::invalid("pocket.fill", e.to_string()))
    }

    /// Effective cutting depth.
    pub fn depth(&self) -> f64 {
        self.pocket.depth.unwrap_or(self.material.thickness)
    }

    /// Tool parked at the origin at the configured safe height.
    pub fn tool_profile(&self) -> ToolProfile {
        ToolProfile::new(self.tool.diameter)
            .with_safe_height(self.tool.safe_height)
            .with_feed_rate(self.tool.feed_rate)
    }

    pub fn pocket_parameters(&self) -> PocketParameters {
        PocketParameters::new(self.depth())
            .with_offset(self.pocket.offset)
            .with_strategy(self.pocket.strategy)
            .with_fill(self.pocket.fill)
    }

    pub fn gcode_generator(&self) -> GcodeGenerator {
        GcodeGenerator::new(
            self.output.units,
            self.tool.safe_height,
            self.tool.feed_rate,
        )
        .with_line_numbers(self.output.line_numbers)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
