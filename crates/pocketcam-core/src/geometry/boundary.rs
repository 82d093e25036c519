use super::{Arc, BoundaryElement, BoundingBox, LineSegment, Point2D, EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a boundary in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryId(pub u64);

impl fmt::Display for BoundaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered loop of connected elements enclosing a region.
///
/// Connectivity (`element[i].end == element[i + 1].start`, cyclically) is the
/// producer's responsibility and is not verified here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedBoundary {
    pub id: BoundaryId,
    pub name: String,
    pub elements: Vec<BoundaryElement>,
}

impl ClosedBoundary {
    pub fn new(id: BoundaryId, name: impl Into<String>, elements: Vec<BoundaryElement>) -> Self {
        Self {
            id,
            name: name.into(),
            elements,
        }
    }

    /// Builds a boundary of straight edges through `vertices`, closing back to
    /// the first vertex.
    pub fn from_polygon(id: BoundaryId, name: impl Into<String>, vertices: &[Point2D]) -> Self {
        let elements = if vertices.len() < 2 {
            Vec::new()
        } else {
            (0..vertices.len())
                .map(|i| {
                    let next = vertices[(i + 1) % vertices.len()];
                    BoundaryElement::Line(LineSegment::new(vertices[i], next))
                })
                .collect()
        };
        Self::new(id, name, elements)
    }

    /// Counter-clockwise axis-aligned rectangle with its lower-left corner at
    /// `(x, y)`.
    pub fn rectangle(
        id: BoundaryId,
        name: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self::from_polygon(
            id,
            name,
            &[
                Point2D::new(x, y),
                Point2D::new(x + width, y),
                Point2D::new(x + width, y + height),
                Point2D::new(x, y + height),
            ],
        )
    }

    /// A full circle made of a single arc element.
    pub fn circle(id: BoundaryId, name: impl Into<String>, center: Point2D, radius: f64) -> Self {
        Self::new(
            id,
            name,
            vec![BoundaryElement::Arc(Arc::circle(center, radius))],
        )
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True when the last element ends where the first one starts.
    pub fn is_closed(&self) -> bool {
        match (self.elements.first(), self.elements.last()) {
            (Some(first), Some(last)) => last.end().approx_eq(&first.start(), EPSILON),
            _ => false,
        }
    }

    /// Bounding box of all elements, or `None` for an empty boundary.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut iter = self.elements.iter().map(BoundaryElement::bounding_box);
        let first = iter.next()?;
        Some(iter.fold(first, |acc, b| acc.union(&b)))
    }
}
