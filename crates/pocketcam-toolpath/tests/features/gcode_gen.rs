use pocketcam_core::{BoundaryId, ClosedBoundary, MeasurementSystem};
use pocketcam_toolpath::{
    CancelFlag, GcodeGenerator, OperationList, PocketParameters, PocketStrategy, ToolProfile,
};

fn program(strategy: PocketStrategy) -> (String, usize) {
    let square = ClosedBoundary::rectangle(BoundaryId(1), "square", 0.0, 0.0, 10.0, 10.0);
    let tool = ToolProfile::new(2.0);
    let mut list = OperationList::new();
    list.add_pocket(
        &square,
        &tool,
        PocketParameters::new(1.5).with_strategy(strategy),
        &CancelFlag::new(),
    )
    .unwrap();

    let mut machine = tool.clone();
    let toolpaths = list.emit_all(&mut machine);
    let segments = toolpaths.iter().map(|t| t.segments.len()).sum();
    let generator = GcodeGenerator::new(MeasurementSystem::Metric, tool.safe_height, tool.feed_rate);
    (generator.generate(&toolpaths), segments)
}

#[test]
fn test_header_body_footer_order() {
    let (gcode, segments) = program(PocketStrategy::ScanLine);
    let commands: Vec<&str> = gcode.lines().filter(|l| !l.starts_with(';')).collect();

    assert_eq!(&commands[..3], &["G21", "G90", "F100.0"]);
    assert_eq!(commands.last(), Some(&"G0 X0.000 Y0.000 Z5.000"));
    assert_eq!(commands.len(), 3 + segments + 1);
    assert!(commands[3..commands.len() - 1]
        .iter()
        .all(|c| c.starts_with("G0 ") || c.starts_with("G1 ")));
}

#[test]
fn test_arcs_written_with_center_offsets() {
    let (gcode, _) = program(PocketStrategy::RadialSweep);
    let arcs: Vec<&str> = gcode.lines().filter(|l| l.starts_with("G3 ")).collect();
    assert!(!arcs.is_empty());
    // The first ring is a full circle of radius 1 starting at (6, 5)
    assert!(arcs[0].starts_with("G3 X6.000 Y5.000"));
    assert!(arcs[0].ends_with("I-1.000 J0.000"));
}

#[test]
fn test_coordinates_use_three_decimals() {
    let (gcode, _) = program(PocketStrategy::ScanLine);
    for line in gcode.lines().filter(|l| !l.starts_with(';')) {
        for word in line.split_whitespace().skip(1) {
            if let Some(value) = word.strip_prefix(['X', 'Y', 'Z', 'I', 'J']) {
                let decimals = value.split('.').nth(1).map(str::len);
                assert_eq!(decimals, Some(3), "word {} in {}", word, line);
            }
        }
    }
}
