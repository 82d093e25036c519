//! PocketCAM Settings Crate
//!
//! Handles the configuration file: tool, material, pocket and output
//! sections, their validation, and conversion into the parameter types used
//! by `pocketcam-toolpath`.

pub mod config;
pub mod error;

pub use config::{
    Config, MaterialSettings, MeasurementSystem, OutputSettings, PocketSettings, ToolSettings,
    CONFIG_DIR_NAME, CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
