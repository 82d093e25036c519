//! Offset-path construction.
//!
//! Each element is displaced along its normals by a fixed distance. At a
//! junction the normals of the two meeting elements are averaged so adjacent
//! offset elements share an endpoint. Positive offsets move a
//! counter-clockwise loop inward.

use crate::error::{PocketError, PocketResult};
use pocketcam_core::{Arc, BoundaryElement, Point2D, EPSILON};
use tracing::debug;

/// Builds the offset version of `elements` at distance `offset`.
///
/// When the sequence is a closed loop the averaging wraps around, otherwise
/// the open ends use the element's own normal. Arcs keep their center and
/// direction; the radius follows the offset start point, so a non-uniform
/// corner shift on an arc is only approximated.
pub fn build_offset_path(
    elements: &[BoundaryElement],
    offset: f64,
) -> PocketResult<Vec<BoundaryElement>> {
    match elements.len() {
        0 => {
            return Err(PocketError::Inapplicable(
                "boundary has no elements".to_string(),
            ))
        }
        1 => {
            return Err(PocketError::Inapplicable(
                "single-element boundaries are not supported".to_string(),
            ))
        }
        _ => {}
    }

    let n = elements.len();
    let closed = elements[n - 1].end().approx_eq(&elements[0].start(), EPSILON);

    let offset_path: Vec<BoundaryElement> = elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let prev = match i {
                0 if closed => Some(&elements[n - 1]),
                0 => None,
                _ => Some(&elements[i - 1]),
            };
            let next = match i + 1 {
                j if j < n => Some(&elements[j]),
                _ if closed => Some(&elements[0]),
                _ => None,
            };

            let start_normal = junction_normal(element.start_normal(), prev.map(|p| p.end_normal()));
            let end_normal = junction_normal(element.end_normal(), next.map(|e| e.start_normal()));
            let start = element.start() + start_normal * offset;
            let end = element.end() + end_normal * offset;

            match element {
                BoundaryElement::Line(_) => BoundaryElement::line(start, end),
                BoundaryElement::Arc(arc) => {
                    Arc::from_endpoints(arc.center, start, end, arc.clockwise).into()
                }
            }
        })
        .collect();

    debug!(
        "Built offset path: {} elements at offset {:.3} (closed: {})",
        offset_path.len(),
        offset,
        closed
    );
    Ok(offset_path)
}

/// Normalized sum of the element's own normal and its neighbour's; falls
/// back to `own` at open ends and when the two normals cancel out.
fn junction_normal(own: Point2D, neighbour: Option<Point2D>) -> Point2D {
    neighbour
        .and_then(|other| {
            let sum = own + other;
            if sum.length() < EPSILON {
                None
            } else {
                sum.normalized()
            }
        })
        .unwrap_or(own)
}
