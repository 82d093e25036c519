use pocketcam_core::{Arc, BoundaryElement, Point2D};

#[test]
fn test_horizontal_ray_against_square_edges() {
    let edges = [
        BoundaryElement::line(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)),
        BoundaryElement::line(Point2D::new(10.0, 0.0), Point2D::new(10.0, 10.0)),
        BoundaryElement::line(Point2D::new(10.0, 10.0), Point2D::new(0.0, 10.0)),
        BoundaryElement::line(Point2D::new(0.0, 10.0), Point2D::new(0.0, 0.0)),
    ];
    let ray = BoundaryElement::line(Point2D::new(-10.0, 3.0), Point2D::new(20.0, 3.0));
    let mut xs: Vec<f64> = edges
        .iter()
        .flat_map(|e| e.intersect(&ray))
        .map(|p| p.x)
        .collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(xs.len(), 2);
    assert!((xs[0] - 0.0).abs() < 1e-9);
    assert!((xs[1] - 10.0).abs() < 1e-9);
}

#[test]
fn test_arc_arc_respects_sweeps() {
    let upper = BoundaryElement::Arc(Arc::new(Point2D::new(0.0, 0.0), 5.0, 0.0, 180.0));
    let other = BoundaryElement::Arc(Arc::circle(Point2D::new(8.0, 0.0), 5.0));
    let hits = upper.intersect(&other);
    assert_eq!(hits.len(), 1);
    assert!(hits[0].approx_eq(&Point2D::new(4.0, 3.0), 1e-9));
}

#[test]
fn test_degenerate_inputs_never_intersect() {
    let zero_line = BoundaryElement::line(Point2D::new(1.0, 1.0), Point2D::new(1.0, 1.0));
    let line = BoundaryElement::line(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
    assert!(zero_line.intersect(&line).is_empty());

    let zero_arc = BoundaryElement::Arc(Arc::new(Point2D::new(0.0, 0.0), 0.0, 0.0, 90.0));
    assert!(zero_arc.intersect(&line).is_empty());
}
