use super::{Arc, BoundingBox, LineSegment, Point2D};
use serde::{Deserialize, Serialize};

/// One edge of a boundary or one cut of a fill pattern.
///
/// The set of element kinds is closed: straight segments and circular arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BoundaryElement {
    Line(LineSegment),
    Arc(Arc),
}

impl BoundaryElement {
    pub fn line(start: Point2D, end: Point2D) -> Self {
        BoundaryElement::Line(LineSegment::new(start, end))
    }

    pub fn start(&self) -> Point2D {
        match self {
            BoundaryElement::Line(l) => l.start,
            BoundaryElement::Arc(a) => a.start(),
        }
    }

    pub fn end(&self) -> Point2D {
        match self {
            BoundaryElement::Line(l) => l.end,
            BoundaryElement::Arc(a) => a.end(),
        }
    }

    /// Point at parameter `t` along the element (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> Point2D {
        match self {
            BoundaryElement::Line(l) => l.point_at(t),
            BoundaryElement::Arc(a) => a.point_at_fraction(t),
        }
    }

    /// Unit normal at the start, on the left of the direction of travel.
    pub fn start_normal(&self) -> Point2D {
        match self {
            BoundaryElement::Line(l) => l.normal(),
            BoundaryElement::Arc(a) => a.start_normal(),
        }
    }

    /// Unit normal at the end, on the left of the direction of travel.
    pub fn end_normal(&self) -> Point2D {
        match self {
            BoundaryElement::Line(l) => l.normal(),
            BoundaryElement::Arc(a) => a.end_normal(),
        }
    }

    pub fn distance_to_point(&self, p: &Point2D) -> f64 {
        match self {
            BoundaryElement::Line(l) => l.distance_to_point(p),
            BoundaryElement::Arc(a) => a.distance_to_point(p),
        }
    }

    /// All intersection points with `other` (zero, one or two).
    pub fn intersect(&self, other: &BoundaryElement) -> Vec<Point2D> {
        match (self, other) {
            (BoundaryElement::Line(a), BoundaryElement::Line(b)) => {
                a.intersect_line(b).into_iter().collect()
            }
            (BoundaryElement::Line(l), BoundaryElement::Arc(a))
            | (BoundaryElement::Arc(a), BoundaryElement::Line(l)) => l.intersect_arc(a),
            (BoundaryElement::Arc(a), BoundaryElement::Arc(b)) => a.intersect_arc(b),
        }
    }

    /// Chord approximation; a line is returned unchanged.
    pub fn linearize(&self, tolerance: f64) -> Vec<LineSegment> {
        match self {
            BoundaryElement::Line(l) => vec![*l],
            BoundaryElement::Arc(a) => a.linearize(tolerance),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            BoundaryElement::Line(l) => l.bounding_box(),
            BoundaryElement::Arc(a) => a.bounding_box(),
        }
    }
}

impl From<LineSegment> for BoundaryElement {
    fn from(line: LineSegment) -> Self {
        BoundaryElement::Line(line)
    }
}

impl From<Arc> for BoundaryElement {
    fn from(arc: Arc) -> Self {
        BoundaryElement::Arc(arc)
    }
}
