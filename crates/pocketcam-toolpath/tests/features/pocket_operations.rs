use pocketcam_core::{BoundaryElement, BoundaryId, ClosedBoundary, Point2D};
use pocketcam_toolpath::{
    CancelFlag, FillGeometry, OperationList, PocketError, PocketOperation, PocketParameters,
    PocketStrategy, ToolProfile,
};

fn boundaries() -> Vec<ClosedBoundary> {
    vec![
        ClosedBoundary::rectangle(BoundaryId(10), "left", 0.0, 0.0, 10.0, 10.0),
        ClosedBoundary::rectangle(BoundaryId(11), "right", 30.0, 0.0, 12.0, 6.0),
    ]
}

#[test]
fn test_preview_lists_offset_path_then_fill() {
    let b = boundaries();
    let op = PocketOperation::apply(
        0,
        &b[0],
        &ToolProfile::new(2.0),
        PocketParameters::new(3.0).with_offset(0.5),
        &CancelFlag::new(),
    )
    .unwrap();
    let preview = op.preview_elements();
    assert_eq!(&preview[..4], op.offset_path.as_slice());
    assert!(preview[4..]
        .iter()
        .all(|e| matches!(e, BoundaryElement::Arc(_))));
    assert_eq!(op.display_name(), "pocket 0");
}

#[test]
fn test_positive_offset_shrinks_square() {
    let b = boundaries();
    let op = PocketOperation::apply(
        0,
        &b[0],
        &ToolProfile::new(2.0),
        PocketParameters::new(3.0)
            .with_offset(1.0)
            .with_strategy(PocketStrategy::ScanLine),
        &CancelFlag::new(),
    )
    .unwrap();
    let d = 1.0 / 2.0_f64.sqrt();
    assert!(op.offset_path[0]
        .start()
        .approx_eq(&Point2D::new(d, d), 1e-9));
    let FillGeometry::Lines(lines) = &op.fill else {
        panic!("expected lines");
    };
    assert!(lines
        .iter()
        .all(|l| l.start.x >= d - 1e-9 && l.end.x <= 10.0 - d + 1e-9));
}

#[test]
fn test_list_emission_continues_tool_position() {
    let b = boundaries();
    let tool = ToolProfile::new(2.0);
    let mut list = OperationList::new();
    for boundary in &b {
        list.add_pocket(boundary, &tool, PocketParameters::new(1.0), &CancelFlag::new())
            .unwrap();
    }

    let mut machine = tool.clone();
    let toolpaths = list.emit_all(&mut machine);
    assert_eq!(toolpaths.len(), 2);
    let end_of_first = toolpaths[0].final_position().unwrap();
    assert_eq!(toolpaths[1].segments[0].start, end_of_first);
    assert_eq!(machine.current_position, toolpaths[1].final_position().unwrap());
}

#[test]
fn test_failed_apply_leaves_list_unchanged() {
    let mut list = OperationList::new();
    let tiny = ClosedBoundary::rectangle(BoundaryId(12), "tiny", 0.0, 0.0, 1.0, 1.0);
    let result = list.add_pocket(
        &tiny,
        &ToolProfile::new(2.0),
        PocketParameters::new(1.0),
        &CancelFlag::new(),
    );
    assert!(matches!(result, Err(PocketError::Inapplicable(_))));
    assert!(list.is_empty());
}

#[test]
fn test_replace_with_recomputed_operation() {
    let b = boundaries();
    let tool = ToolProfile::new(2.0);
    let mut list = OperationList::new();
    let id = list
        .add_pocket(&b[0], &tool, PocketParameters::new(1.0), &CancelFlag::new())
        .unwrap();

    let current = list.get(id).unwrap().clone();
    let params = current.params.with_strategy(PocketStrategy::ScanLine);
    let updated = current
        .recompute(&b[0], &tool, params, &CancelFlag::new())
        .unwrap();
    let previous = list.replace(updated).unwrap();

    assert!(matches!(previous.fill, FillGeometry::Rings(_)));
    assert!(matches!(list.get(id).unwrap().fill, FillGeometry::Lines(_)));
    assert_eq!(list.len(), 1);
}
