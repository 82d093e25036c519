//! # PocketCAM Toolpath
//!
//! The pocketing engine: turns a closed boundary of lines and arcs into an
//! ordered, tool-safe motion program.
//!
//! ## Pipeline
//!
//! ```text
//! ClosedBoundary
//!   ├── linearize        (arcs -> chords at a chordal tolerance)
//!   ├── classifier       (winding number / ray-crossing containment)
//!   └── offset           (averaged-normal offset path)
//!         └── fill       (point grid | radial sweep | scan line)
//!               └── emitter   (multi-pass motion program)
//!                     └── gcode_gen  (machine-control text)
//! ```
//!
//! [`PocketOperation`] owns the derived geometry of one pocket and
//! [`OperationList`] keeps the ordered set of operations with their
//! persistence records.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pocketcam_core::{BoundaryId, ClosedBoundary};
//! use pocketcam_toolpath::{CancelFlag, PocketOperation, PocketParameters, ToolProfile};
//!
//! let square = ClosedBoundary::rectangle(BoundaryId(1), "square", 0.0, 0.0, 10.0, 10.0);
//! let mut tool = ToolProfile::new(2.0);
//! let op = PocketOperation::apply(0, &square, &tool, PocketParameters::new(5.0), &CancelFlag::new())?;
//! let toolpath = op.emit(&mut tool);
//! ```

pub mod cancel;
pub mod classifier;
pub mod emitter;
pub mod error;
pub mod fill;
pub mod gcode_gen;
pub mod linearize;
pub mod multipass;
pub mod offset;
pub mod operations;
pub mod pocket_operations;
pub mod toolpath;

pub use cancel::CancelFlag;
pub use classifier::{
    is_clear_of_walls, point_inside, point_inside_boundary, point_inside_by_intersections,
    winding_turns,
};
pub use emitter::ToolpathEmitter;
pub use error::{PocketError, PocketResult};
pub use fill::{FillGeometry, FillParameters, PocketStrategy, SweepRing};
pub use gcode_gen::GcodeGenerator;
pub use linearize::{linearize, linearized_bounding_box};
pub use multipass::MultiPassConfig;
pub use offset::build_offset_path;
pub use operations::{BoundaryResolver, OperationList, OperationRecord, PocketRecord};
pub use pocket_operations::{OperationId, PocketOperation, PocketParameters};
pub use toolpath::{
    ToolProfile, Toolpath, ToolpathSegment, ToolpathSegmentType, DEFAULT_FEED_RATE,
    DEFAULT_SAFE_HEIGHT,
};
