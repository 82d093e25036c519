//! # PocketCAM
//!
//! Pocketing toolpath generator: clears the interior of closed line/arc
//! boundaries with a round tool and writes the result as G-code.
//!
//! ## Architecture
//!
//! PocketCAM is organized as a workspace with multiple crates:
//!
//! 1. **pocketcam-core** - Points, lines, arcs, boundaries, units
//! 2. **pocketcam-toolpath** - Classifier, offset, area fill, emitter, G-code
//! 3. **pocketcam-settings** - TOML/JSON configuration
//! 4. **pocketcam** - This facade and the command-line driver

use anyhow::{bail, Context};
use std::path::Path;
use tracing::{info, warn};

pub use pocketcam_core::{
    Arc, BoundaryElement, BoundaryId, BoundingBox, ClosedBoundary, GeometryError, LineSegment,
    MeasurementSystem, Point2D, Point3D, EPSILON,
};
pub use pocketcam_settings::{Config, SettingsError};
pub use pocketcam_toolpath::{
    CancelFlag, FillGeometry, FillParameters, GcodeGenerator, OperationList, OperationRecord,
    PocketError, PocketOperation, PocketParameters, PocketStrategy, ToolProfile, Toolpath,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // Program text goes to stdout, so logs stay on stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Reads a JSON array of boundaries.
pub fn load_boundaries(path: &Path) -> anyhow::Result<Vec<ClosedBoundary>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read boundary file {}", path.display()))?;
    let boundaries: Vec<ClosedBoundary> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid boundary file {}", path.display()))?;
    Ok(boundaries)
}

/// Pockets every boundary with the configured tool and parameters.
///
/// Boundaries that cannot be pocketed are skipped with a warning; the
/// result fails only when none could be, or on cancellation.
pub fn build_operations(
    boundaries: &[ClosedBoundary],
    config: &Config,
    cancel: &CancelFlag,
) -> anyhow::Result<OperationList> {
    let tool = config.tool_profile();
    let params = config.pocket_parameters();
    let mut list = OperationList::new();

    for boundary in boundaries {
        match list.add_pocket(boundary, &tool, params, cancel) {
            Ok(id) => info!("Pocketed {} '{}' as {}", boundary.id, boundary.name, id),
            Err(PocketError::Cancelled) => bail!("Pocketing cancelled"),
            Err(e) => warn!("Skipping {} '{}': {}", boundary.id, boundary.name, e),
        }
    }

    if list.is_empty() {
        bail!("None of the {} boundaries could be pocketed", boundaries.len());
    }
    Ok(list)
}

/// Emits the operations in order and renders the G-code program.
pub fn generate_program(operations: &OperationList, config: &Config) -> String {
    let mut tool = config.tool_profile();
    let toolpaths = operations.emit_all(&mut tool);
    config.gcode_generator().generate(&toolpaths)
}
