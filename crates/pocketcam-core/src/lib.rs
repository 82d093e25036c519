//! # PocketCAM Core
//!
//! Core types shared by the PocketCAM crates: 2D/3D points, the two boundary
//! element kinds (line segments and circular arcs), closed boundaries, bounding
//! boxes, measurement units and geometry errors.
//!
//! All "on the boundary" and "parallel" decisions use the absolute tolerance
//! [`EPSILON`].

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{GeometryError, GeometryResult};
pub use geometry::{
    Arc, BoundaryElement, BoundaryId, BoundingBox, ClosedBoundary, LineSegment, Point2D, Point3D,
    DEFAULT_BBOX_MARGIN, EPSILON, MAX_CHORDS,
};
pub use units::MeasurementSystem;
