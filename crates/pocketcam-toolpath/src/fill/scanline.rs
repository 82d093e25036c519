//! Scan-line fill: horizontal cuts between boundary crossings.
//!
//! Islands are not supported. Lines are paired left to right across the whole
//! boundary, so a hole inside the region is cut through.

use crate::cancel::CancelFlag;
use crate::error::{PocketError, PocketResult};
use crate::fill::{FillGeometry, FillParameters};
use crate::toolpath::ToolProfile;
use pocketcam_core::{BoundaryElement, BoundingBox, LineSegment, Point2D, EPSILON};
use tracing::trace;

/// Scans the endpoint bounding box (grown by `bbox_margin`) from the top down,
/// one tool radius apart.
pub fn compute(
    boundary: &[BoundaryElement],
    tool: &ToolProfile,
    params: &FillParameters,
    cancel: &CancelFlag,
) -> PocketResult<FillGeometry> {
    let bbox = BoundingBox::from_points(boundary.iter().flat_map(|e| [e.start(), e.end()]))
        .ok_or_else(|| PocketError::Inapplicable("boundary has no elements".to_string()))?
        .expanded(params.bbox_margin);

    let spacing = tool.radius();
    let count = (bbox.height() / spacing).floor() as usize;

    let mut lines = Vec::new();
    for i in 0..count {
        cancel.check()?;
        let y = bbox.top - i as f64 * spacing;
        let scan = BoundaryElement::line(Point2D::new(bbox.left, y), Point2D::new(bbox.right, y));
        let crossings = crossings(boundary, &scan);
        if crossings.len() % 2 == 1 {
            trace!("Scan line y={:.3}: odd crossing count {}", y, crossings.len());
        }
        lines.extend(
            pair_crossings(crossings)
                .into_iter()
                .filter(|(x0, x1)| x1 - x0 > EPSILON)
                .map(|(x0, x1)| LineSegment::new(Point2D::new(x0, y), Point2D::new(x1, y))),
        );
    }
    Ok(FillGeometry::Lines(lines))
}

/// Fraction of an element sampled next to a vertex to see which way it leaves.
const DEPARTURE_FRACTION: f64 = 1e-3;

/// One intersection of a scan line with a boundary element.
#[derive(Debug, Clone, Copy)]
struct Hit {
    x: f64,
    /// Side of the scan line the element heads to when the hit is one of its
    /// endpoints; `None` for a hit strictly inside the element.
    departure: Option<f64>,
}

/// Sorted X coordinates where `scan` meets the boundary.
///
/// Hits closer than [`EPSILON`] are the same point reported by two elements.
/// At a shared vertex the pair collapses to one crossing when the edges leave
/// on opposite sides of the scan line. When both edges stay on one side (a
/// notch tip touching the line) both hits are kept, so parity is unchanged.
fn crossings(boundary: &[BoundaryElement], scan: &BoundaryElement) -> Vec<f64> {
    let y = scan.start().y;
    let mut hits: Vec<Hit> = boundary
        .iter()
        .flat_map(|e| {
            e.intersect(scan).into_iter().map(move |p| {
                let departure = if p.approx_eq(&e.start(), EPSILON) {
                    Some(e.point_at(DEPARTURE_FRACTION).y - y)
                } else if p.approx_eq(&e.end(), EPSILON) {
                    Some(e.point_at(1.0 - DEPARTURE_FRACTION).y - y)
                } else {
                    None
                };
                Hit { x: p.x, departure }
            })
        })
        .collect();
    hits.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut xs = Vec::with_capacity(hits.len());
    let mut i = 0;
    while i < hits.len() {
        let mut j = i + 1;
        while j < hits.len() && hits[j].x - hits[j - 1].x < EPSILON {
            j += 1;
        }
        match &hits[i..j] {
            [a, b] if same_side(a.departure, b.departure) => xs.extend([a.x, b.x]),
            group => xs.push(group[0].x),
        }
        i = j;
    }
    xs
}

fn same_side(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0),
        _ => false,
    }
}

/// Pairs sorted crossings left to right. An odd leftover, the rightmost
/// value, is discarded.
pub fn pair_crossings(mut xs: Vec<f64>) -> Vec<(f64, f64)> {
    xs.sort_by(f64::total_cmp);
    xs.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}
