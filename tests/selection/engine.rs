use pcbuild::selection::{DeselectOutcome, DragOutcome, RejectReason, SelectOutcome};

use super::{mixed_engine, pc_engine, select};

#[test]
fn given_empty_selection_when_select_then_copy_is_appended_and_category_blocked() {
    let mut engine = pc_engine();

    let selected = select(&mut engine, "cpu-i5-13400f");

    assert_eq!(selected.instance_id, "sel:1");
    assert_eq!(selected.component_id, "cpu-i5-13400f");
    assert_eq!(selected.category, "cpu");
    assert_eq!(selected.display_name, "Intel Core i5-13400F");
    assert_eq!(engine.selection(), &[selected]);
    assert!(engine.is_category_occupied("cpu"));
    assert!(!engine.is_selectable("cpu-i5-13400f"));
    assert!(!engine.is_selectable("cpu-r7-7800x3d"));
    assert!(engine.is_selectable("gpu-rtx-4070"));
}

#[test]
fn given_occupied_category_when_select_sibling_then_rejected_and_first_choice_kept() {
    let mut engine = mixed_engine();
    let x = select(&mut engine, "cpu-x");

    let outcome = engine.attempt_select("cpu-y");

    assert_eq!(
        outcome,
        SelectOutcome::Rejected(RejectReason::CategoryOccupied {
            occupant: x.instance_id.clone()
        })
    );
    assert_eq!(engine.selection().len(), 1);
    assert_eq!(
        engine.occupant("cpu").map(|s| s.display_name.as_str()),
        Some("X")
    );
}

#[test]
fn given_same_component_when_selected_twice_then_second_is_rejected() {
    let mut engine = mixed_engine();
    select(&mut engine, "cpu-x");

    assert!(!engine.attempt_select("cpu-x").is_accepted());
    assert_eq!(engine.selection().len(), 1);
}

#[test]
fn given_unknown_component_when_select_then_rejected_without_change() {
    let mut engine = mixed_engine();
    let before = engine.snapshot();

    let outcome = engine.attempt_select("does-not-exist");

    assert_eq!(outcome, SelectOutcome::Rejected(RejectReason::UnknownComponent));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn given_non_draggable_component_when_select_then_rejected() {
    let mut engine = mixed_engine();

    let outcome = engine.attempt_select("gpu-fixed");

    assert_eq!(outcome, SelectOutcome::Rejected(RejectReason::NotDraggable));
    assert!(!engine.is_category_occupied("gpu"));
    assert!(engine.is_selectable("gpu-a"));
}

#[test]
fn given_non_draggable_component_when_category_freed_then_it_stays_unselectable() {
    let mut engine = mixed_engine();
    let a = select(&mut engine, "gpu-a");

    engine.deselect(&a.instance_id);

    assert!(engine.is_selectable("gpu-a"));
    assert!(!engine.is_selectable("gpu-fixed"));
}

#[test]
fn given_blocked_category_when_begin_drag_then_refused() {
    let mut engine = mixed_engine();
    assert_eq!(engine.begin_drag("cpu-y"), DragOutcome::Started);

    let x = select(&mut engine, "cpu-x");

    assert_eq!(
        engine.begin_drag("cpu-y"),
        DragOutcome::Refused(RejectReason::CategoryOccupied {
            occupant: x.instance_id
        })
    );
    assert_eq!(
        engine.begin_drag("gpu-fixed"),
        DragOutcome::Refused(RejectReason::NotDraggable)
    );
    assert_eq!(
        engine.begin_drag("ghost"),
        DragOutcome::Refused(RejectReason::UnknownComponent)
    );
}

#[test]
fn given_selected_instance_when_deselect_then_category_is_freed() {
    let mut engine = mixed_engine();
    let x = select(&mut engine, "cpu-x");

    let outcome = engine.deselect(&x.instance_id);

    assert_eq!(outcome, DeselectOutcome::Removed(x));
    assert!(engine.selection().is_empty());
    assert!(!engine.is_category_occupied("cpu"));
    assert!(engine.is_selectable("cpu-x"));
    assert!(engine.is_selectable("cpu-y"));

    let y = select(&mut engine, "cpu-y");
    assert_eq!(
        engine.occupant("cpu").map(|s| s.instance_id.as_str()),
        Some(y.instance_id.as_str())
    );
}

#[test]
fn given_unknown_instance_when_deselect_then_noop() {
    let mut engine = mixed_engine();
    select(&mut engine, "cpu-x");
    let before = engine.snapshot();

    assert_eq!(engine.deselect("sel:999"), DeselectOutcome::NotSelected);
    assert_eq!(engine.deselect("cpu-x"), DeselectOutcome::NotSelected);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn given_removed_instance_when_deselect_again_then_noop() {
    let mut engine = mixed_engine();
    let x = select(&mut engine, "cpu-x");
    engine.deselect(&x.instance_id);
    let y = select(&mut engine, "cpu-y");

    assert_eq!(engine.deselect(&x.instance_id), DeselectOutcome::NotSelected);
    assert_eq!(engine.selection(), &[y]);
}

#[test]
fn given_instance_ids_when_reset_then_sequence_is_not_reused() {
    let mut engine = mixed_engine();
    let first = select(&mut engine, "cpu-x");
    engine.reset();

    let second = select(&mut engine, "cpu-x");

    assert_ne!(first.instance_id, second.instance_id);
    assert_eq!(engine.deselect(&first.instance_id), DeselectOutcome::NotSelected);
}

#[test]
fn given_undeclared_category_when_selecting_twice_then_one_per_category_still_applies() {
    let mut engine = mixed_engine();
    select(&mut engine, "fan-1");

    assert!(engine.is_category_occupied("fan"));
    assert!(!engine.is_selectable("fan-1"));
    assert!(!engine.attempt_select("fan-1").is_accepted());
}

#[test]
fn given_selection_when_snapshot_then_views_follow_catalog_order() {
    let mut engine = mixed_engine();
    select(&mut engine, "gpu-a");

    let snapshot = engine.snapshot();

    let ids: Vec<&str> = snapshot
        .components
        .iter()
        .map(|view| view.component_id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["cpu-x", "cpu-y", "gpu-a", "gpu-fixed", "case-1", "fan-1"]
    );
    let selectable: Vec<bool> = snapshot.components.iter().map(|v| v.selectable).collect();
    assert_eq!(selectable, vec![true, true, false, false, true, true]);
    assert_eq!(snapshot.selection.len(), 1);
    assert!(!snapshot.complete);
}

#[test]
fn given_partial_selection_when_reset_then_initial_state_restored() {
    let mut engine = mixed_engine();
    let initial = engine.snapshot();
    select(&mut engine, "cpu-x");
    select(&mut engine, "gpu-a");

    engine.reset();

    assert_eq!(engine.snapshot(), initial);
}

#[test]
fn given_reset_when_reset_again_then_state_is_unchanged() {
    let mut engine = pc_engine();
    select(&mut engine, "cpu-i5-13400f");
    select(&mut engine, "ram-ddr5-32");

    engine.reset();
    let once = engine.snapshot();
    engine.reset();

    assert_eq!(engine.snapshot(), once);
    assert!(!engine.is_complete());
}
