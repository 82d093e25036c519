//! Area-fill strategies.
//!
//! A strategy turns an offset path into fill geometry: sample points,
//! concentric arcs or horizontal lines. All strategies share the same
//! interface so callers can pick one at runtime.

pub mod grid;
pub mod radial;
pub mod scanline;

use crate::cancel::CancelFlag;
use crate::error::{PocketError, PocketResult};
use crate::toolpath::ToolProfile;
use pocketcam_core::{Arc, BoundaryElement, LineSegment, Point2D, DEFAULT_BBOX_MARGIN};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Sampling constants shared by the fill strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillParameters {
    /// Point-grid spacing.
    pub grid_step: f64,
    /// Radial-sweep angular increment, in degrees.
    pub angle_step: f64,
    /// Margin added around the boundary's bounding box.
    pub bbox_margin: f64,
    /// Chordal tolerance used to linearize arcs before classification.
    pub linearize_tolerance: f64,
}

impl Default for FillParameters {
    fn default() -> Self {
        Self {
            grid_step: 0.5,
            angle_step: 0.1,
            bbox_margin: DEFAULT_BBOX_MARGIN,
            linearize_tolerance: 0.1,
        }
    }
}

impl FillParameters {
    pub fn validate(&self) -> PocketResult<()> {
        let positive = [
            ("grid_step", self.grid_step),
            ("angle_step", self.angle_step),
            ("linearize_tolerance", self.linearize_tolerance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PocketError::InvalidParameters(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.angle_step > 360.0 {
            return Err(PocketError::InvalidParameters(format!(
                "angle_step must not exceed 360 degrees, got {}",
                self.angle_step
            )));
        }
        if !(self.bbox_margin.is_finite() && self.bbox_margin >= 0.0) {
            return Err(PocketError::InvalidParameters(format!(
                "bbox_margin must be non-negative, got {}",
                self.bbox_margin
            )));
        }
        Ok(())
    }
}

/// One radius of the radial sweep and the arcs it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRing {
    pub radius: f64,
    pub arcs: Vec<Arc>,
}

impl SweepRing {
    /// Total angle covered by the ring's arcs, in degrees.
    pub fn angular_span(&self) -> f64 {
        self.arcs.iter().map(Arc::sweep).sum()
    }
}

/// Output of a fill strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum FillGeometry {
    /// Interior sample points; diagnostic only, they carry no motion.
    Points(Vec<Point2D>),
    /// Concentric arcs, ordered by ascending radius.
    Rings(Vec<SweepRing>),
    /// Horizontal cuts, top to bottom.
    Lines(Vec<LineSegment>),
}

impl FillGeometry {
    pub fn is_empty(&self) -> bool {
        match self {
            FillGeometry::Points(points) => points.is_empty(),
            FillGeometry::Rings(rings) => rings.iter().all(|r| r.arcs.is_empty()),
            FillGeometry::Lines(lines) => lines.is_empty(),
        }
    }

    /// Number of points, arcs or lines.
    pub fn len(&self) -> usize {
        match self {
            FillGeometry::Points(points) => points.len(),
            FillGeometry::Rings(rings) => rings.iter().map(|r| r.arcs.len()).sum(),
            FillGeometry::Lines(lines) => lines.len(),
        }
    }

    /// Cutting elements in emission order.
    pub fn elements(&self) -> Vec<BoundaryElement> {
        match self {
            FillGeometry::Points(_) => Vec::new(),
            FillGeometry::Rings(rings) => rings
                .iter()
                .flat_map(|r| r.arcs.iter().copied().map(BoundaryElement::Arc))
                .collect(),
            FillGeometry::Lines(lines) => {
                lines.iter().copied().map(BoundaryElement::Line).collect()
            }
        }
    }

    pub fn points(&self) -> &[Point2D] {
        match self {
            FillGeometry::Points(points) => points,
            _ => &[],
        }
    }
}

/// Strategy for clearing the pocket interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PocketStrategy {
    /// Regular grid of interior sample points.
    PointGrid,
    /// Concentric arcs around the bounding-box center.
    #[default]
    RadialSweep,
    /// Horizontal lines paired between boundary crossings.
    ScanLine,
}

impl PocketStrategy {
    /// Returns the name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            PocketStrategy::PointGrid => "Point grid",
            PocketStrategy::RadialSweep => "Radial sweep",
            PocketStrategy::ScanLine => "Scan line",
        }
    }

    /// Computes the fill for the region bounded by `boundary`.
    pub fn compute(
        &self,
        boundary: &[BoundaryElement],
        tool: &ToolProfile,
        params: &FillParameters,
        cancel: &CancelFlag,
    ) -> PocketResult<FillGeometry> {
        params.validate()?;
        tool.validate()?;
        debug!(
            "{} fill over {} elements (tool {:.3}mm)",
            self.name(),
            boundary.len(),
            tool.diameter
        );

        let fill = match self {
            PocketStrategy::PointGrid => grid::compute(boundary, tool, params, cancel),
            PocketStrategy::RadialSweep => radial::compute(boundary, tool, params, cancel),
            PocketStrategy::ScanLine => scanline::compute(boundary, tool, params, cancel),
        };

        match &fill {
            Ok(geometry) => info!("{} fill produced {} items", self.name(), geometry.len()),
            Err(PocketError::Cancelled) => info!("{} fill cancelled", self.name()),
            Err(_) => {}
        }
        fill
    }
}

impl fmt::Display for PocketStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
