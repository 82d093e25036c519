//! Radial sweep fill: concentric arcs around the bounding-box center.
//!
//! Each ring is sampled at fixed angular increments. A sample is safe when it
//! lies inside the boundary and farther than the tool radius from every
//! wall. Runs of consecutive safe samples become arcs.

use crate::cancel::CancelFlag;
use crate::classifier::{is_clear_of_walls, point_inside};
use crate::error::{PocketError, PocketResult};
use crate::fill::{FillGeometry, FillParameters, SweepRing};
use crate::linearize::{linearize, linearized_bounding_box};
use crate::toolpath::ToolProfile;
use pocketcam_core::{Arc, BoundaryElement, LineSegment, Point2D};
use tracing::debug;

/// Per-ring sweep state.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SweepState {
    Outside,
    /// Inside a run of safe samples that began at `start` and was last safe
    /// at `last`.
    Inside { start: f64, last: f64 },
}

/// Samples rings of a fixed center against a linearized boundary.
#[derive(Debug, Clone)]
pub struct RingSweep<'a> {
    pub center: Point2D,
    pub lines: &'a [LineSegment],
    /// Minimum wall distance; the tool radius.
    pub clearance: f64,
    /// Angular increment in degrees.
    pub angle_step: f64,
}

impl<'a> RingSweep<'a> {
    pub fn new(center: Point2D, lines: &'a [LineSegment], clearance: f64, angle_step: f64) -> Self {
        Self {
            center,
            lines,
            clearance,
            angle_step,
        }
    }

    fn is_safe(&self, p: &Point2D) -> bool {
        point_inside(p, self.lines) && is_clear_of_walls(p, self.lines, self.clearance)
    }

    /// Sweeps one ring from 0 to 360 degrees.
    ///
    /// Arcs run from the first to the last safe sample of each run. A run
    /// made of a single sample covers no angle and is dropped.
    pub fn sweep_ring(&self, radius: f64) -> SweepRing {
        let circle = Arc::circle(self.center, radius);
        let samples = (360.0 / self.angle_step + 1e-9).floor() as usize;
        let mut arcs = Vec::new();
        let mut state = SweepState::Outside;

        // A run ends at its last safe sample rather than the first unsafe
        // angle, so no arc reaches into the clearance band.
        let close_run = |start: f64, last: f64, arcs: &mut Vec<Arc>| {
            if last - start > self.angle_step * 0.5 {
                arcs.push(Arc::new(self.center, radius, start, last));
            }
        };

        for i in 0..=samples {
            let angle = (i as f64 * self.angle_step).min(360.0);
            let safe = self.is_safe(&circle.point_at_angle(angle));
            state = match (state, safe) {
                (SweepState::Outside, true) => SweepState::Inside {
                    start: angle,
                    last: angle,
                },
                (SweepState::Inside { start, .. }, true) => SweepState::Inside { start, last: angle },
                (SweepState::Inside { start, last }, false) => {
                    close_run(start, last, &mut arcs);
                    SweepState::Outside
                }
                (SweepState::Outside, false) => SweepState::Outside,
            };
        }
        if let SweepState::Inside { start, last } = state {
            close_run(start, last, &mut arcs);
        }

        SweepRing { radius, arcs }
    }
}

/// Ring radii `k * step` for k = 1, 2, .. while the previous radius is below
/// `max_radius`; the last ring may overshoot.
pub fn ring_radii(max_radius: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    (1..)
        .map(|k| k as f64 * step)
        .take_while(|r| r - step < max_radius)
        .collect()
}

/// Radial sweep over the bounding box of the linearized boundary.
pub fn compute(
    boundary: &[BoundaryElement],
    tool: &ToolProfile,
    params: &FillParameters,
    cancel: &CancelFlag,
) -> PocketResult<FillGeometry> {
    let lines = linearize(boundary, params.linearize_tolerance);
    let bbox = linearized_bounding_box(&lines)
        .ok_or_else(|| PocketError::Inapplicable("boundary has no elements".to_string()))?;

    let radii = ring_radii(bbox.half_diagonal(), tool.radius());
    let sweep = RingSweep::new(bbox.center(), &lines, tool.radius(), params.angle_step);
    debug!(
        "Radial sweep: {} rings around ({:.3}, {:.3})",
        radii.len(),
        sweep.center.x,
        sweep.center.y
    );

    let rings = sweep_rings(&sweep, &radii, cancel)?;
    Ok(FillGeometry::Rings(rings))
}

#[cfg(not(feature = "parallel"))]
fn sweep_rings(
    sweep: &RingSweep<'_>,
    radii: &[f64],
    cancel: &CancelFlag,
) -> PocketResult<Vec<SweepRing>> {
    radii
        .iter()
        .map(|&r| {
            cancel.check()?;
            Ok(sweep.sweep_ring(r))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn sweep_rings(
    sweep: &RingSweep<'_>,
    radii: &[f64],
    cancel: &CancelFlag,
) -> PocketResult<Vec<SweepRing>> {
    use rayon::prelude::*;

    let mut rings = radii
        .par_iter()
        .map(|&r| {
            cancel.check()?;
            Ok(sweep.sweep_ring(r))
        })
        .collect::<PocketResult<Vec<_>>>()?;
    rings.sort_by(|a, b| a.radius.total_cmp(&b.radius));
    Ok(rings)
}
