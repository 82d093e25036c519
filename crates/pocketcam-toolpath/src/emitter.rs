//! Toolpath emission: geometry to an ordered, multi-pass motion program.

use crate::multipass::MultiPassConfig;
use crate::toolpath::{ToolProfile, Toolpath, ToolpathSegment, ToolpathSegmentType};
use pocketcam_core::{BoundaryElement, Point2D, Point3D, EPSILON};
use tracing::debug;

/// Replays pocket geometry as tool motions.
///
/// The emitter borrows the tool mutably and advances its
/// `current_position` with every motion, so consecutive operations continue
/// from where the previous one left off.
pub struct ToolpathEmitter<'a> {
    tool: &'a mut ToolProfile,
    toolpath: Toolpath,
}

impl<'a> ToolpathEmitter<'a> {
    pub fn new(tool: &'a mut ToolProfile, depth: f64) -> Self {
        let toolpath = Toolpath::new(tool.diameter, -depth.abs());
        Self { tool, toolpath }
    }

    /// Emits the full pocket program.
    ///
    /// The tool retracts, moves over the first offset-path point, then for
    /// every distinct pass depth cuts the offset path followed by the fill elements.
    /// Gaps between consecutive elements are bridged by retract, rapid and
    /// plunge. The program ends with a retract to safe height.
    pub fn emit_pocket(
        mut self,
        offset_path: &[BoundaryElement],
        fill: &[BoundaryElement],
    ) -> Toolpath {
        let Some(first) = offset_path.first().or_else(|| fill.first()) else {
            return self.toolpath;
        };

        let safe = self.tool.safe_height;
        let here = self.tool.current_position;
        self.rapid_to(Point3D::new(here.x, here.y, safe));
        self.rapid_to(first.start().with_z(safe));

        let depths =
            MultiPassConfig::for_tool(self.toolpath.depth, self.tool.diameter).cutting_depths();
        for &z in &depths {
            for element in offset_path.iter().chain(fill) {
                self.cut(element, z);
            }
        }

        let here = self.tool.current_position;
        self.rapid_to(Point3D::new(here.x, here.y, safe));

        debug!(
            "Emitted {} segments over {} passes",
            self.toolpath.segments.len(),
            depths.len()
        );
        self.toolpath
    }

    fn cut(&mut self, element: &BoundaryElement, z: f64) {
        self.move_to_start(element.start(), z);
        let start = self.tool.current_position;
        let feed = self.tool.feed_rate;
        let segment = match element {
            BoundaryElement::Line(line) => ToolpathSegment::new(
                ToolpathSegmentType::LinearMove,
                start,
                line.end.with_z(z),
                feed,
            ),
            BoundaryElement::Arc(arc) => {
                ToolpathSegment::new_arc(arc.clockwise, start, arc.end().with_z(z), arc.center, feed)
            }
        };
        self.push(segment);
    }

    /// Brings the tool to `start` at depth `z`, lifting over any gap.
    fn move_to_start(&mut self, start: Point2D, z: f64) {
        let safe = self.tool.safe_height;
        let here = self.tool.current_position;
        if !here.xy().approx_eq(&start, EPSILON) {
            if (here.z - safe).abs() > EPSILON {
                self.rapid_to(Point3D::new(here.x, here.y, safe));
            }
            self.rapid_to(start.with_z(safe));
        }
        let here = self.tool.current_position;
        if (here.z - z).abs() > EPSILON {
            let feed = self.tool.feed_rate;
            self.push(ToolpathSegment::new(
                ToolpathSegmentType::LinearMove,
                here,
                Point3D::new(here.x, here.y, z),
                feed,
            ));
        }
    }

    fn rapid_to(&mut self, target: Point3D) {
        let here = self.tool.current_position;
        if here == target {
            return;
        }
        let feed = self.tool.feed_rate;
        self.push(ToolpathSegment::new(
            ToolpathSegmentType::RapidMove,
            here,
            target,
            feed,
        ));
    }

    fn push(&mut self, segment: ToolpathSegment) {
        self.tool.current_position = segment.end;
        self.toolpath.add_segment(segment);
    }
}
