use pocketcam_core::{Arc, BoundaryElement, BoundaryId, ClosedBoundary, Point2D};
use pocketcam_toolpath::{build_offset_path, PocketError};

fn stadium() -> ClosedBoundary {
    ClosedBoundary::new(
        BoundaryId(1),
        "stadium",
        vec![
            BoundaryElement::line(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)),
            Arc::new(Point2D::new(10.0, 5.0), 5.0, 270.0, 90.0).into(),
            BoundaryElement::line(Point2D::new(10.0, 10.0), Point2D::new(0.0, 10.0)),
            Arc::new(Point2D::new(0.0, 5.0), 5.0, 90.0, 270.0).into(),
        ],
    )
}

#[test]
fn test_zero_offset_reproduces_endpoints() {
    let boundaries = [
        ClosedBoundary::rectangle(BoundaryId(2), "rect", -3.0, 2.0, 7.0, 4.0),
        stadium(),
    ];
    for boundary in &boundaries {
        let path = build_offset_path(&boundary.elements, 0.0).unwrap();
        assert_eq!(path.len(), boundary.len());
        for (orig, off) in boundary.elements.iter().zip(&path) {
            assert!(off.start().approx_eq(&orig.start(), 1e-9), "{}", boundary.name);
            assert!(off.end().approx_eq(&orig.end(), 1e-9), "{}", boundary.name);
        }
    }
}

#[test]
fn test_tangent_arcs_offset_exactly() {
    let path = build_offset_path(&stadium().elements, 1.0).unwrap();
    let BoundaryElement::Arc(arc) = path[1] else {
        panic!("expected an arc");
    };
    assert_eq!(arc.center, Point2D::new(10.0, 5.0));
    assert!((arc.radius - 4.0).abs() < 1e-9);
    assert!(path[0].start().approx_eq(&Point2D::new(0.0, 1.0), 1e-9));
    for i in 0..path.len() {
        let next = &path[(i + 1) % path.len()];
        assert!(path[i].end().approx_eq(&next.start(), 1e-9));
    }
}

#[test]
fn test_arc_offset_at_sharp_corner_is_approximate() {
    // Half circle closed by a diagonal; the arc's end corner is not tangent.
    let boundary = ClosedBoundary::new(
        BoundaryId(3),
        "d",
        vec![
            BoundaryElement::line(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)),
            Arc::new(Point2D::new(10.0, 5.0), 5.0, 270.0, 90.0).into(),
            BoundaryElement::line(Point2D::new(10.0, 10.0), Point2D::new(0.0, 0.0)),
        ],
    );
    let path = build_offset_path(&boundary.elements, 1.0).unwrap();
    let BoundaryElement::Arc(arc) = path[1] else {
        panic!("expected an arc");
    };
    // Center and radius come from the offset start point
    assert_eq!(arc.center, Point2D::new(10.0, 5.0));
    assert!((arc.radius - 4.0).abs() < 1e-9);
    assert!((arc.end().distance_to(&arc.center) - 4.0).abs() < 1e-9);
    // The averaged corner point is off that radius, leaving a small gap
    let gap = arc.end().distance_to(&path[2].start());
    assert!(gap > 1e-3 && gap < 0.5, "gap {}", gap);
}

#[test]
fn test_degenerate_inputs() {
    assert!(matches!(
        build_offset_path(&[], 0.0),
        Err(PocketError::Inapplicable(_))
    ));
    let single = [BoundaryElement::line(
        Point2D::new(0.0, 0.0),
        Point2D::new(1.0, 0.0),
    )];
    assert!(matches!(
        build_offset_path(&single, 0.0),
        Err(PocketError::Inapplicable(_))
    ));
}
