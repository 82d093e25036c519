//! Pocket operations for CAM toolpath generation.
//!
//! A pocket operation clears the interior of one closed boundary. It owns its
//! derived geometry (the offset path and the fill) and refers back to the
//! boundary only by id. Changing parameters builds a new operation value.

use crate::cancel::CancelFlag;
use crate::emitter::ToolpathEmitter;
use crate::error::{PocketError, PocketResult};
use crate::fill::{FillGeometry, FillParameters, PocketStrategy};
use crate::offset::build_offset_path;
use crate::operations::{OperationRecord, PocketRecord};
use crate::toolpath::{ToolProfile, Toolpath};
use pocketcam_core::{BoundaryElement, BoundaryId, ClosedBoundary};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};
use uuid::Uuid;

/// Unique handle of an operation within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationId(Uuid);

impl OperationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Op({})", &self.0.to_string()[..8])
    }
}

/// User-facing pocket settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PocketParameters {
    /// Cutting depth below the stock top (positive magnitude).
    pub depth: f64,
    /// Lateral offset of the cutting path from the boundary; positive moves
    /// a counter-clockwise boundary inward.
    pub offset: f64,
    #[serde(default)]
    pub strategy: PocketStrategy,
    #[serde(default)]
    pub fill: FillParameters,
}

impl PocketParameters {
    pub fn new(depth: f64) -> Self {
        Self {
            depth,
            offset: 0.0,
            strategy: PocketStrategy::default(),
            fill: FillParameters::default(),
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_strategy(mut self, strategy: PocketStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_fill(mut self, fill: FillParameters) -> Self {
        self.fill = fill;
        self
    }

    pub fn validate(&self) -> PocketResult<()> {
        if !(self.depth.is_finite() && self.depth > 0.0) {
            return Err(PocketError::InvalidParameters(format!(
                "depth must be positive, got {}",
                self.depth
            )));
        }
        if !self.offset.is_finite() {
            return Err(PocketError::InvalidParameters(
                "offset must be finite".to_string(),
            ));
        }
        self.fill.validate()
    }
}

/// One committed pocket with its derived geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PocketOperation {
    pub id: OperationId,
    /// Position in the operation list at creation time.
    pub index: usize,
    pub source: BoundaryId,
    pub params: PocketParameters,
    pub offset_path: Vec<BoundaryElement>,
    pub fill: FillGeometry,
    /// Whether the preview is drawn.
    pub display: bool,
}

impl PocketOperation {
    /// Builds the offset path and fill for `boundary`.
    ///
    /// Fails with [`PocketError::Inapplicable`] when the boundary has fewer
    /// than two elements or the fill finds nothing to cut.
    pub fn apply(
        index: usize,
        boundary: &ClosedBoundary,
        tool: &ToolProfile,
        params: PocketParameters,
        cancel: &CancelFlag,
    ) -> PocketResult<Self> {
        Self::build(OperationId::new(), index, true, boundary, tool, params, cancel)
    }

    /// Rebuilds this operation with new parameters, keeping its identity.
    ///
    /// `self` is left untouched; the caller swaps the result in.
    pub fn recompute(
        &self,
        boundary: &ClosedBoundary,
        tool: &ToolProfile,
        params: PocketParameters,
        cancel: &CancelFlag,
    ) -> PocketResult<Self> {
        Self::build(self.id, self.index, self.display, boundary, tool, params, cancel)
    }

    fn build(
        id: OperationId,
        index: usize,
        display: bool,
        boundary: &ClosedBoundary,
        tool: &ToolProfile,
        params: PocketParameters,
        cancel: &CancelFlag,
    ) -> PocketResult<Self> {
        tool.validate()?;
        params.validate()?;

        let offset_path = build_offset_path(&boundary.elements, params.offset).map_err(|e| {
            warn!("Pocket not applicable to boundary {}: {}", boundary.id, e);
            e
        })?;
        let fill = params
            .strategy
            .compute(&offset_path, tool, &params.fill, cancel)?;
        if fill.is_empty() {
            warn!(
                "Pocket not applicable to boundary {}: no area left to cut",
                boundary.id
            );
            return Err(PocketError::Inapplicable(format!(
                "no cuttable area inside boundary {}",
                boundary.id
            )));
        }

        info!(
            "Pocket {} on '{}': {} offset elements, {} fill items ({})",
            index,
            boundary.name,
            offset_path.len(),
            fill.len(),
            params.strategy
        );

        Ok(Self {
            id,
            index,
            source: boundary.id,
            params,
            offset_path,
            fill,
            display,
        })
    }

    pub fn display_name(&self) -> String {
        format!("pocket {}", self.index)
    }

    /// Fill cuts in emission order.
    pub fn fill_elements(&self) -> Vec<BoundaryElement> {
        self.fill.elements()
    }

    /// Elements to draw: the offset path followed by the fill cuts.
    pub fn preview_elements(&self) -> Vec<BoundaryElement> {
        let mut elements = self.offset_path.clone();
        elements.extend(self.fill.elements());
        elements
    }

    /// Emits the motion program, advancing `tool.current_position`.
    pub fn emit(&self, tool: &mut ToolProfile) -> Toolpath {
        ToolpathEmitter::new(tool, self.params.depth)
            .emit_pocket(&self.offset_path, &self.fill_elements())
    }

    pub fn record(&self) -> OperationRecord {
        OperationRecord::Pocket(PocketRecord {
            boundary: self.source,
            depth: self.params.depth,
            index: self.index,
            offset: self.params.offset,
            strategy: self.params.strategy,
            fill: self.params.fill,
        })
    }
}
