//! Motion records produced by the emitter.

use crate::error::{PocketError, PocketResult};
use pocketcam_core::{Point2D, Point3D, EPSILON};
use serde::{Deserialize, Serialize};

/// Default height for rapid moves, above the stock top.
pub const DEFAULT_SAFE_HEIGHT: f64 = 5.0;

/// Default cutting feed rate in mm/min.
pub const DEFAULT_FEED_RATE: f64 = 100.0;

/// Types of toolpath segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolpathSegmentType {
    RapidMove,
    LinearMove,
    ArcCW,
    ArcCCW,
}

impl ToolpathSegmentType {
    /// True for feed-rate governed motions.
    pub fn is_cutting(&self) -> bool {
        !matches!(self, ToolpathSegmentType::RapidMove)
    }
}

/// A single motion of a toolpath.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolpathSegment {
    pub segment_type: ToolpathSegmentType,
    pub start: Point3D,
    pub end: Point3D,
    /// Arc center, present for `ArcCW`/`ArcCCW` only.
    pub center: Option<Point2D>,
    pub feed_rate: f64,
}

impl ToolpathSegment {
    /// Creates a new straight segment.
    pub fn new(
        segment_type: ToolpathSegmentType,
        start: Point3D,
        end: Point3D,
        feed_rate: f64,
    ) -> Self {
        Self {
            segment_type,
            start,
            end,
            center: None,
            feed_rate,
        }
    }

    /// Creates a new arc segment.
    pub fn new_arc(
        clockwise: bool,
        start: Point3D,
        end: Point3D,
        center: Point2D,
        feed_rate: f64,
    ) -> Self {
        let segment_type = if clockwise {
            ToolpathSegmentType::ArcCW
        } else {
            ToolpathSegmentType::ArcCCW
        };
        Self {
            segment_type,
            start,
            end,
            center: Some(center),
            feed_rate,
        }
    }

    /// Travel length; arcs are measured along the curve.
    pub fn length(&self) -> f64 {
        let Some(center) = self.center else {
            return self.start.distance_to(&self.end);
        };
        let radius = center.distance_to(&self.start.xy());
        let a0 = self.start.xy().angle_from(&center);
        let a1 = self.end.xy().angle_from(&center);
        let mut sweep = match self.segment_type {
            ToolpathSegmentType::ArcCW => (a0 - a1).rem_euclid(360.0),
            _ => (a1 - a0).rem_euclid(360.0),
        };
        // Coincident endpoints on an arc mean a full turn
        if sweep < EPSILON {
            sweep = 360.0;
        }
        radius * sweep.to_radians()
    }
}

/// A complete toolpath made up of multiple segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toolpath {
    pub segments: Vec<ToolpathSegment>,
    pub tool_diameter: f64,
    pub depth: f64,
}

impl Toolpath {
    /// Creates a new empty toolpath.
    pub fn new(tool_diameter: f64, depth: f64) -> Self {
        Self {
            segments: Vec::new(),
            tool_diameter,
            depth,
        }
    }

    /// Adds a segment to the toolpath.
    pub fn add_segment(&mut self, segment: ToolpathSegment) {
        self.segments.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Gets the total length of the toolpath.
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(ToolpathSegment::length).sum()
    }

    /// Segments that remove material.
    pub fn cutting_segments(&self) -> impl Iterator<Item = &ToolpathSegment> {
        self.segments.iter().filter(|s| s.segment_type.is_cutting())
    }

    /// Where the tool ends up after the last segment.
    pub fn final_position(&self) -> Option<Point3D> {
        self.segments.last().map(|s| s.end)
    }
}

/// The cutting tool and its machine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolProfile {
    pub diameter: f64,
    pub safe_height: f64,
    pub feed_rate: f64,
    /// Advanced by every emitted motion.
    pub current_position: Point3D,
}

impl ToolProfile {
    /// Creates a tool parked at the origin, at the default safe height.
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            safe_height: DEFAULT_SAFE_HEIGHT,
            feed_rate: DEFAULT_FEED_RATE,
            current_position: Point3D::new(0.0, 0.0, DEFAULT_SAFE_HEIGHT),
        }
    }

    pub fn with_safe_height(mut self, safe_height: f64) -> Self {
        self.safe_height = safe_height;
        self.current_position.z = safe_height;
        self
    }

    pub fn with_feed_rate(mut self, feed_rate: f64) -> Self {
        self.feed_rate = feed_rate;
        self
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn validate(&self) -> PocketResult<()> {
        if !(self.diameter.is_finite() && self.diameter > 0.0) {
            return Err(PocketError::InvalidParameters(format!(
                "tool diameter must be positive, got {}",
                self.diameter
            )));
        }
        if !self.safe_height.is_finite() {
            return Err(PocketError::InvalidParameters(
                "safe height must be finite".to_string(),
            ));
        }
        if !(self.feed_rate.is_finite() && self.feed_rate > 0.0) {
            return Err(PocketError::InvalidParameters(format!(
                "feed rate must be positive, got {}",
                self.feed_rate
            )));
        }
        Ok(())
    }
}

impl Default for ToolProfile {
    fn default() -> Self {
        Self::new(3.175)
    }
}
