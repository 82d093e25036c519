//! Error types for geometric construction.
//!
//! Classification and intersection queries never fail; they answer
//! conservatively ("no intersection", "not inside"). Only constructors that are
//! asked to build something degenerate report an error.

use thiserror::Error;

/// Errors raised while building geometric primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Arc or circle radius is zero, negative or not finite.
    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),

    /// A segment collapsed to a single point.
    #[error("Degenerate segment at ({x:.4}, {y:.4})")]
    DegenerateSegment {
        /// X coordinate of the collapsed segment.
        x: f64,
        /// Y coordinate of the collapsed segment.
        y: f64,
    },

    /// A coordinate was NaN or infinite.
    #[error("Non-finite coordinate in {0}")]
    NonFinite(String),
}

/// Result type alias for geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;
