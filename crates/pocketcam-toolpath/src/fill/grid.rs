//! Point-grid fill: interior sample points on a regular lattice.

use crate::cancel::CancelFlag;
use crate::classifier::point_inside;
use crate::error::{PocketError, PocketResult};
use crate::fill::{FillGeometry, FillParameters};
use crate::linearize::{linearize, linearized_bounding_box};
use crate::toolpath::ToolProfile;
use pocketcam_core::{BoundaryElement, Point2D};

/// Samples the bounding box (grown by `bbox_margin`) every `grid_step`
/// along both axes and keeps the points inside the boundary.
///
/// The grid does not depend on the tool. Cancellation is checked once per
/// column.
pub fn compute(
    boundary: &[BoundaryElement],
    _tool: &ToolProfile,
    params: &FillParameters,
    cancel: &CancelFlag,
) -> PocketResult<FillGeometry> {
    let lines = linearize(boundary, params.linearize_tolerance);
    let bbox = linearized_bounding_box(&lines)
        .ok_or_else(|| PocketError::Inapplicable("boundary has no elements".to_string()))?
        .expanded(params.bbox_margin);

    let step = params.grid_step;
    let columns = (bbox.width() / step).ceil() as usize;
    let rows = (bbox.height() / step).ceil() as usize;

    let mut points = Vec::new();
    for i in 0..columns {
        cancel.check()?;
        let x = bbox.left + i as f64 * step;
        for j in 0..rows {
            let p = Point2D::new(x, bbox.bottom + j as f64 * step);
            if point_inside(&p, &lines) {
                points.push(p);
            }
        }
    }
    Ok(FillGeometry::Points(points))
}
