use pocketcam_core::{Arc, BoundaryElement, Point2D};

/// Largest distance between a chord's midpoint and the true arc.
fn max_sagitta(arc: &Arc, tolerance: f64) -> f64 {
    arc.linearize(tolerance)
        .iter()
        .map(|chord| {
            let mid = chord.point_at(0.5);
            (arc.radius - mid.distance_to(&arc.center)).abs()
        })
        .fold(0.0, f64::max)
}

#[test]
fn test_chord_deviation_within_tolerance() {
    let arcs = [
        Arc::new(Point2D::new(0.0, 0.0), 10.0, 0.0, 90.0),
        Arc::new(Point2D::new(5.0, -3.0), 2.5, 30.0, 300.0),
        Arc::new_clockwise(Point2D::new(0.0, 0.0), 50.0, 180.0, 10.0),
        Arc::circle(Point2D::new(1.0, 1.0), 4.0),
    ];
    for arc in &arcs {
        for tolerance in [1.0, 0.5, 0.1, 0.01, 0.001] {
            let dev = max_sagitta(arc, tolerance);
            assert!(
                dev <= tolerance + 1e-12,
                "arc {:?} tolerance {} deviation {}",
                arc,
                tolerance,
                dev
            );
        }
    }
}

#[test]
fn test_chord_count_grows_as_tolerance_shrinks() {
    let arc = Arc::new(Point2D::new(0.0, 0.0), 20.0, 10.0, 250.0);
    let tolerances = [5.0, 2.0, 1.0, 0.5, 0.1, 0.05, 0.01, 0.001];
    let counts: Vec<usize> = tolerances.iter().map(|t| arc.linearize(*t).len()).collect();
    for w in counts.windows(2) {
        assert!(w[1] >= w[0], "chord counts not monotonic: {:?}", counts);
    }
    assert!(counts.last().unwrap() > counts.first().unwrap());
}

#[test]
fn test_linearized_chords_lie_on_arc_vertices() {
    let arc = Arc::new(Point2D::new(2.0, 2.0), 3.0, 0.0, 180.0);
    for chord in arc.linearize(0.05) {
        assert!((chord.start.distance_to(&arc.center) - 3.0).abs() < 1e-9);
        assert!((chord.end.distance_to(&arc.center) - 3.0).abs() < 1e-9);
    }
}

#[test]
fn test_element_linearize_preserves_endpoints() {
    let element: BoundaryElement = Arc::new_clockwise(Point2D::new(0.0, 0.0), 5.0, 90.0, 0.0).into();
    let chords = element.linearize(0.1);
    assert!(chords[0].start.approx_eq(&element.start(), 1e-9));
    assert!(chords.last().unwrap().end.approx_eq(&element.end(), 1e-9));
}
