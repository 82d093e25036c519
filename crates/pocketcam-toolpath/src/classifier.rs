//! Point-in-region classification.
//!
//! Two independent classifiers are provided. [`point_inside`] computes a
//! winding number over a linearized boundary and is what the fill strategies
//! use. [`point_inside_by_intersections`] casts a single horizontal ray and
//! counts crossings on its left; it works directly on lines and arcs and is
//! kept as a cross-check.
//!
//! Neither classifier reports errors. Degenerate input is simply "not inside".
//! Points closer than [`EPSILON`] to the boundary may classify either way.

use crate::linearize::linearize;
use pocketcam_core::{BoundaryElement, BoundingBox, LineSegment, Point2D, EPSILON};

/// How an edge relates to the horizontal line through the query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RayCrossing {
    /// One endpoint lies on the line, the other strictly off it.
    Half { upward: bool },
    /// Endpoints lie strictly on opposite sides.
    Full { upward: bool },
    None,
}

fn classify_edge(start_dy: f64, end_dy: f64) -> RayCrossing {
    let start_on = start_dy.abs() < EPSILON;
    let end_on = end_dy.abs() < EPSILON;
    match (start_on, end_on) {
        (true, false) => RayCrossing::Half {
            upward: end_dy > 0.0,
        },
        (false, true) => RayCrossing::Half {
            upward: start_dy < 0.0,
        },
        (false, false) if (start_dy > 0.0) != (end_dy > 0.0) => RayCrossing::Full {
            upward: end_dy > start_dy,
        },
        _ => RayCrossing::None,
    }
}

/// True when the edge passes to the right of `p` for its direction of travel.
fn is_point_at_left(p: &Point2D, edge: &LineSegment, upward: bool) -> bool {
    let to_start = edge.start - *p;
    let direction = edge.end - edge.start;
    let cross = to_start.cross(&direction);
    if upward {
        cross > 0.0
    } else {
        cross < 0.0
    }
}

/// Signed number of turns the chord loop makes around `p`.
///
/// Edges that only touch the horizontal through `p` contribute ±0.5, edges
/// crossing it contribute ±1; only crossings right of `p` count.
pub fn winding_turns(p: &Point2D, lines: &[LineSegment]) -> f64 {
    lines.iter().fold(0.0, |turns, edge| {
        let crossing = classify_edge(edge.start.y - p.y, edge.end.y - p.y);
        let (weight, upward) = match crossing {
            RayCrossing::Half { upward } => (0.5, upward),
            RayCrossing::Full { upward } => (1.0, upward),
            RayCrossing::None => return turns,
        };
        if !is_point_at_left(p, edge, upward) {
            return turns;
        }
        if upward {
            turns + weight
        } else {
            turns - weight
        }
    })
}

/// Winding-number containment: inside iff the loop winds at least once
/// around `p`, in either direction.
pub fn point_inside(p: &Point2D, lines: &[LineSegment]) -> bool {
    winding_turns(p, lines).abs() >= 1.0
}

/// [`point_inside`] on a mixed boundary, linearized at `tolerance` first.
pub fn point_inside_boundary(p: &Point2D, elements: &[BoundaryElement], tolerance: f64) -> bool {
    point_inside(p, &linearize(elements, tolerance))
}

/// Ray-crossing containment.
///
/// The ray is horizontal through `p`, spanning the boundary's bounding box
/// grown by `margin`. Intersections strictly left of `p` are counted; an odd
/// count means inside. No intersections at all means outside.
pub fn point_inside_by_intersections(
    p: &Point2D,
    elements: &[BoundaryElement],
    margin: f64,
) -> bool {
    let Some(bbox) = elements_bounding_box(elements) else {
        return false;
    };
    let bbox = bbox.expanded(margin);
    let ray = BoundaryElement::line(Point2D::new(bbox.left, p.y), Point2D::new(bbox.right, p.y));

    let hits: Vec<Point2D> = elements.iter().flat_map(|e| e.intersect(&ray)).collect();
    if hits.is_empty() {
        return false;
    }
    hits.iter().filter(|hit| hit.x < p.x).count() % 2 == 1
}

/// True when `p` is strictly farther than `clearance` from every edge.
pub fn is_clear_of_walls(p: &Point2D, lines: &[LineSegment], clearance: f64) -> bool {
    lines.iter().all(|l| l.distance_to_point(p) > clearance)
}

pub(crate) fn elements_bounding_box(elements: &[BoundaryElement]) -> Option<BoundingBox> {
    let mut iter = elements.iter().map(BoundaryElement::bounding_box);
    let first = iter.next()?;
    Some(iter.fold(first, |acc, b| acc.union(&b)))
}
