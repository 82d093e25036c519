//! Boundary linearization: mixed line/arc sequences to pure chords.

use pocketcam_core::{BoundaryElement, BoundingBox, LineSegment};

/// Concatenates the chord approximation of every element, in order.
///
/// Each arc is replaced by chords whose sagitta stays within `tolerance`;
/// lines pass through unchanged.
pub fn linearize(elements: &[BoundaryElement], tolerance: f64) -> Vec<LineSegment> {
    elements
        .iter()
        .flat_map(|element| element.linearize(tolerance))
        .collect()
}

/// Bounding box of the chord endpoints, or `None` when there are no chords.
pub fn linearized_bounding_box(lines: &[LineSegment]) -> Option<BoundingBox> {
    BoundingBox::from_points(lines.iter().flat_map(|l| [l.start, l.end]))
}
