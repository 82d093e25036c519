use pocketcam_core::{BoundaryElement, BoundaryId, ClosedBoundary, LineSegment, Point2D};
use pocketcam_toolpath::fill::radial;
use pocketcam_toolpath::{
    linearize, CancelFlag, FillGeometry, FillParameters, PocketError, PocketStrategy, SweepRing,
    ToolProfile,
};

fn square() -> ClosedBoundary {
    ClosedBoundary::rectangle(BoundaryId(1), "square", 0.0, 0.0, 10.0, 10.0)
}

fn rings_of(fill: FillGeometry) -> Vec<SweepRing> {
    match fill {
        FillGeometry::Rings(rings) => rings,
        other => panic!("expected rings, got {:?}", other),
    }
}

fn min_wall_distance(p: &Point2D, walls: &[LineSegment]) -> f64 {
    walls
        .iter()
        .map(|w| w.distance_to_point(p))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn test_circle_rings_inside_and_outside() {
    let circle = ClosedBoundary::circle(BoundaryId(2), "c", Point2D::new(0.0, 0.0), 10.0);
    let tool = ToolProfile::new(2.0);
    let params = FillParameters::default();
    let rings = rings_of(
        radial::compute(&circle.elements, &tool, &params, &CancelFlag::new()).unwrap(),
    );

    for ring in &rings {
        if ring.radius < 10.0 - tool.radius() {
            assert_eq!(ring.arcs.len(), 1, "ring {}", ring.radius);
            assert!((ring.angular_span() - 360.0).abs() <= params.angle_step + 1e-9);
        } else if ring.radius > 10.0 + tool.radius() {
            assert!(ring.arcs.is_empty(), "ring {}", ring.radius);
        }
    }
}

#[test]
fn test_reference_square_rings() {
    let tool = ToolProfile::new(2.0);
    let rings = rings_of(
        PocketStrategy::RadialSweep
            .compute(
                &square().elements,
                &tool,
                &FillParameters::default(),
                &CancelFlag::new(),
            )
            .unwrap(),
    );

    let radii: Vec<f64> = rings.iter().map(|r| r.radius).collect();
    assert_eq!(radii, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

    for ring in &rings[..3] {
        assert_eq!(ring.arcs.len(), 1);
        assert!(ring.arcs[0].is_full_circle());
    }
    for pair in rings.windows(2) {
        assert!(pair[1].angular_span() <= pair[0].angular_span() + 1e-9);
    }
    // Beyond 4 * sqrt(2) no point of the ring is clear of the walls
    for ring in &rings[5..] {
        assert!(ring.arcs.is_empty(), "ring {}", ring.radius);
    }
    assert!(rings.last().unwrap().arcs.is_empty());
}

#[test]
fn test_square_fill_stays_clear_of_walls() {
    let boundary = square();
    let walls = linearize(&boundary.elements, 0.1);
    let tool = ToolProfile::new(2.0);
    let fill = PocketStrategy::RadialSweep
        .compute(
            &boundary.elements,
            &tool,
            &FillParameters::default(),
            &CancelFlag::new(),
        )
        .unwrap();
    assert!(!fill.is_empty());

    for element in fill.elements() {
        let BoundaryElement::Arc(arc) = element else {
            panic!("radial fill yields arcs only");
        };
        for p in [arc.start(), arc.end()] {
            assert!(min_wall_distance(&p, &walls) > tool.radius());
        }
        for chord in arc.linearize(0.01) {
            assert!(min_wall_distance(&chord.end, &walls) > tool.radius() - 1e-6);
        }
    }
}

#[test]
fn test_scan_line_l_shape() {
    let l_shape = ClosedBoundary::from_polygon(
        BoundaryId(3),
        "L",
        &[
            Point2D::new(0.0, 0.0),
            Point2D::new(8.0, 0.0),
            Point2D::new(8.0, 2.5),
            Point2D::new(2.5, 2.5),
            Point2D::new(2.5, 8.0),
            Point2D::new(0.0, 8.0),
        ],
    );
    let fill = PocketStrategy::ScanLine
        .compute(
            &l_shape.elements,
            &ToolProfile::new(2.0),
            &FillParameters::default(),
            &CancelFlag::new(),
        )
        .unwrap();
    let FillGeometry::Lines(lines) = fill else {
        panic!("expected lines");
    };
    // Scan lines at y = 18, 17, .., -9; those within 0..=8 hit the shape
    assert_eq!(lines.len(), 9);
    for line in &lines {
        assert!(line.start.x.abs() < 1e-9);
        let expected_end = if line.start.y < 2.5 { 8.0 } else { 2.5 };
        assert!((line.end.x - expected_end).abs() < 1e-9, "y {}", line.start.y);
    }
}

#[test]
fn test_point_grid_dispatch() {
    let fill = PocketStrategy::PointGrid
        .compute(
            &square().elements,
            &ToolProfile::new(2.0),
            &FillParameters::default(),
            &CancelFlag::new(),
        )
        .unwrap();
    assert!(matches!(fill, FillGeometry::Points(_)));
    assert!(fill.elements().is_empty());
    assert!(fill
        .points()
        .iter()
        .all(|p| p.x >= 0.0 && p.x <= 10.0 && p.y >= 0.0 && p.y <= 10.0));
}

#[test]
fn test_cancelled_fill() {
    let cancel = CancelFlag::new();
    cancel.cancel();
    for strategy in [
        PocketStrategy::PointGrid,
        PocketStrategy::RadialSweep,
        PocketStrategy::ScanLine,
    ] {
        let result = strategy.compute(
            &square().elements,
            &ToolProfile::new(2.0),
            &FillParameters::default(),
            &cancel,
        );
        assert!(matches!(result, Err(PocketError::Cancelled)), "{}", strategy);
    }
}

#[test]
fn test_invalid_tool_rejected() {
    let result = PocketStrategy::RadialSweep.compute(
        &square().elements,
        &ToolProfile::new(-1.0),
        &FillParameters::default(),
        &CancelFlag::new(),
    );
    assert!(matches!(result, Err(PocketError::InvalidParameters(_))));
}
