//! Ordered list of pocket operations and its persistence records.
//!
//! Records refer to boundaries by [`BoundaryId`]. On restore each id is
//! looked up through a [`BoundaryResolver`]; operations whose boundary is
//! gone, or which no longer apply, are dropped with a warning.

use crate::cancel::CancelFlag;
use crate::error::PocketResult;
use crate::fill::{FillParameters, PocketStrategy};
use crate::pocket_operations::{OperationId, PocketOperation, PocketParameters};
use crate::toolpath::{ToolProfile, Toolpath};
use pocketcam_core::{BoundaryId, ClosedBoundary};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Looks boundaries up by id in the host document.
pub trait BoundaryResolver {
    fn resolve(&self, id: BoundaryId) -> Option<&ClosedBoundary>;
}

impl BoundaryResolver for [ClosedBoundary] {
    fn resolve(&self, id: BoundaryId) -> Option<&ClosedBoundary> {
        self.iter().find(|b| b.id == id)
    }
}

impl BoundaryResolver for HashMap<BoundaryId, ClosedBoundary> {
    fn resolve(&self, id: BoundaryId) -> Option<&ClosedBoundary> {
        self.get(&id)
    }
}

/// Persisted settings of a pocket operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PocketRecord {
    pub boundary: BoundaryId,
    pub depth: f64,
    pub index: usize,
    pub offset: f64,
    #[serde(default)]
    pub strategy: PocketStrategy,
    #[serde(default)]
    pub fill: FillParameters,
}

impl PocketRecord {
    pub fn parameters(&self) -> PocketParameters {
        PocketParameters {
            depth: self.depth,
            offset: self.offset,
            strategy: self.strategy,
            fill: self.fill,
        }
    }
}

/// One serialized operation, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OperationRecord {
    Pocket(PocketRecord),
}

/// The active operations, in machining order.
#[derive(Debug, Clone, Default)]
pub struct OperationList {
    operations: Vec<PocketOperation>,
}

impl OperationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PocketOperation> {
        self.operations.iter()
    }

    pub fn get(&self, id: OperationId) -> Option<&PocketOperation> {
        self.operations.iter().find(|op| op.id == id)
    }

    fn position(&self, id: OperationId) -> Option<usize> {
        self.operations.iter().position(|op| op.id == id)
    }

    /// Applies a new pocket to `boundary` and appends it on success.
    ///
    /// Nothing is added when the operation is not applicable.
    pub fn add_pocket(
        &mut self,
        boundary: &ClosedBoundary,
        tool: &ToolProfile,
        params: PocketParameters,
        cancel: &CancelFlag,
    ) -> PocketResult<OperationId> {
        let op = PocketOperation::apply(self.len(), boundary, tool, params, cancel)?;
        let id = op.id;
        self.push(op);
        Ok(id)
    }

    pub fn push(&mut self, operation: PocketOperation) {
        debug!("Added operation {}", operation.id);
        self.operations.push(operation);
    }

    pub fn remove(&mut self, id: OperationId) -> Option<PocketOperation> {
        let pos = self.position(id)?;
        Some(self.operations.remove(pos))
    }

    /// Swaps in a recomputed operation with the same id. Returns the old one.
    pub fn replace(&mut self, operation: PocketOperation) -> Option<PocketOperation> {
        let pos = self.position(operation.id)?;
        Some(std::mem::replace(&mut self.operations[pos], operation))
    }

    /// Moves an operation one place earlier. False when already first or
    /// unknown.
    pub fn move_up(&mut self, id: OperationId) -> bool {
        match self.position(id) {
            Some(pos) if pos > 0 => {
                self.operations.swap(pos, pos - 1);
                true
            }
            _ => false,
        }
    }

    /// Moves an operation one place later. False when already last or
    /// unknown.
    pub fn move_down(&mut self, id: OperationId) -> bool {
        match self.position(id) {
            Some(pos) if pos + 1 < self.operations.len() => {
                self.operations.swap(pos, pos + 1);
                true
            }
            _ => false,
        }
    }

    /// Flips the display flag, returning the new value.
    pub fn toggle_display(&mut self, id: OperationId) -> Option<bool> {
        let pos = self.position(id)?;
        let op = &mut self.operations[pos];
        op.display = !op.display;
        Some(op.display)
    }

    /// Emits every operation in list order, display flag regardless.
    pub fn emit_all(&self, tool: &mut ToolProfile) -> Vec<Toolpath> {
        self.operations.iter().map(|op| op.emit(tool)).collect()
    }

    pub fn to_records(&self) -> Vec<OperationRecord> {
        self.operations.iter().map(PocketOperation::record).collect()
    }

    pub fn to_json(&self) -> PocketResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_records())?)
    }

    /// Rebuilds operations from records, recomputing their geometry.
    ///
    /// Records that cannot be restored are skipped; restore never fails.
    pub fn restore<R>(
        records: &[OperationRecord],
        resolver: &R,
        tool: &ToolProfile,
        cancel: &CancelFlag,
    ) -> Self
    where
        R: BoundaryResolver + ?Sized,
    {
        let mut list = Self::new();
        for record in records {
            let OperationRecord::Pocket(pocket) = record;
            let Some(boundary) = resolver.resolve(pocket.boundary) else {
                warn!(
                    "Dropping pocket {}: boundary {} not found",
                    pocket.index, pocket.boundary
                );
                continue;
            };
            match PocketOperation::apply(pocket.index, boundary, tool, pocket.parameters(), cancel)
            {
                Ok(op) => list.push(op),
                Err(e) => warn!("Dropping pocket {}: {}", pocket.index, e),
            }
        }
        list
    }

    pub fn from_json<R>(
        json: &str,
        resolver: &R,
        tool: &ToolProfile,
        cancel: &CancelFlag,
    ) -> PocketResult<Self>
    where
        R: BoundaryResolver + ?Sized,
    {
        let records: Vec<OperationRecord> = serde_json::from_str(json)?;
        Ok(Self::restore(&records, resolver, tool, cancel))
    }
}
