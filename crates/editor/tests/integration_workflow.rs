//! Integration tests for part editing, selection and undo/redo.

use partforge_editor_lib::harness::TestHarness;
use partforge_editor_lib::state::UpdateOutcome;
use shared::{PartPatch, PartType, Vec3, Vec3Patch};

#[test]
fn test_end_to_end_gear_edit() {
    let mut h = TestHarness::new();

    let p1 = h.add_gear();
    let gear = h.part(&p1);
    assert_eq!(gear.part_type, PartType::Gear);
    assert_eq!(gear.name, "Gear 1");
    assert_eq!(gear.position, Vec3::ZERO);
    assert_eq!(gear.scale, Vec3::ONE);

    let p2 = h.add_gear();
    assert_eq!(h.part(&p2).name, "Gear 2");
    let history_after_adds = h.history_len();

    let outcome = h
        .editor
        .update_part(&p1, &PartPatch::position(Vec3Patch::x(2.0)));
    assert_eq!(outcome, UpdateOutcome::Updated);
    assert_eq!(h.part(&p1).position, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(h.part(&p2).position, Vec3::ZERO);

    // The position edit alone records nothing
    assert_eq!(h.history_len(), history_after_adds);

    // Drag-end equivalent: commit, then undo reverts only the move
    assert!(h.editor.commit_history());
    assert!(h.undo());
    assert_eq!(h.part(&p1).position, Vec3::ZERO);
    assert_eq!(h.part_count(), 2);
}

#[test]
fn test_undo_without_commit_skips_uncommitted_edit() {
    let mut h = TestHarness::new();
    let p1 = h.add_gear();
    h.move_to(&p1, Vec3::new(5.0, 0.0, 0.0));

    // Undo goes straight back to the empty scene; the move was never a step
    assert!(h.undo());
    assert_eq!(h.part_count(), 0);
    assert!(!h.undo());
}

#[test]
fn test_undo_redo_round_trip() {
    let mut h = TestHarness::new();
    let id = h.add(PartType::Motor);
    assert_eq!(h.history_len(), 2);
    assert_eq!(h.editor.history().cursor(), Some(1));

    assert!(h.undo());
    assert_eq!(h.editor.history().cursor(), Some(0));
    assert_eq!(h.part_count(), 0);

    assert!(h.redo());
    assert_eq!(h.editor.history().cursor(), Some(1));
    assert_eq!(h.part(&id).name, "Motor 1");

    assert!(!h.redo());
    assert_eq!(h.editor.history().cursor(), Some(1));
}

#[test]
fn test_branch_pruning() {
    let mut h = TestHarness::new();
    h.add_gear();
    h.add_gear();
    assert_eq!(h.history_len(), 3);

    assert!(h.undo());
    assert!(h.undo());
    assert_eq!(h.editor.history().cursor(), Some(0));

    h.add(PartType::Shaft);
    assert_eq!(h.history_len(), 2);
    assert_eq!(h.editor.history().cursor(), Some(1));
    assert!(!h.editor.can_redo());
    assert!(!h.redo());
    assert_eq!(h.names(), vec!["Shaft 1"]);
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut h = TestHarness::new();
    let a = h.add_gear();
    let b = h.add_gear();
    h.editor.select_part(Some(a.clone()));

    assert!(h.delete(&a));
    assert!(h.editor.selected().is_none());
    assert_eq!(h.part_count(), 1);
    assert!(h.editor.part(&b).is_some());
}

#[test]
fn test_delete_other_keeps_selection() {
    let mut h = TestHarness::new();
    let a = h.add_gear();
    let b = h.add_gear();
    h.editor.select_part(Some(a.clone()));

    assert!(h.delete(&b));
    assert_eq!(h.editor.selected(), Some(&a));
}

#[test]
fn test_delete_missing_is_noop() {
    let mut h = TestHarness::new();
    h.add_gear();
    let len = h.history_len();
    let version = h.editor.version();

    assert!(!h.delete("does-not-exist"));
    assert_eq!(h.part_count(), 1);
    assert_eq!(h.history_len(), len);
    assert_eq!(h.editor.version(), version);
}

#[test]
fn test_duplicate_offsets_and_names() {
    let mut h = TestHarness::new();
    let src = h.add(PartType::Bracket);
    h.editor.update_part(
        &src,
        &PartPatch {
            position: Some(Vec3Patch::all(Vec3::new(1.0, 2.0, 3.0))),
            rotation: Some(Vec3Patch::y(0.5)),
            scale: Some(Vec3Patch::z(2.0)),
            ..Default::default()
        },
    );

    let copy = h.editor.duplicate_part(&src).unwrap();
    assert_ne!(copy, src);
    let (s, c) = (h.part(&src).clone(), h.part(&copy).clone());
    assert_eq!(c.part_type, s.part_type);
    assert_eq!(c.name, format!("{} (Copy)", s.name));
    assert_eq!(c.position, Vec3::new(1.5, 2.0, 3.5));
    assert_eq!(c.rotation, s.rotation);
    assert_eq!(c.scale, s.scale);
    assert_eq!(h.editor.selected(), Some(&copy));
}

#[test]
fn test_duplicate_missing_fails() {
    let mut h = TestHarness::new();
    assert!(h.editor.duplicate_part("ghost").is_err());
    assert_eq!(h.part_count(), 0);
}

#[test]
fn test_scale_clamped_on_update() {
    let mut h = TestHarness::new();
    let id = h.add_gear();
    h.editor
        .update_part(&id, &PartPatch::scale(Vec3Patch::x(0.01)));
    assert_eq!(h.part(&id).scale.x, 0.1);
    h.editor
        .update_part(&id, &PartPatch::scale(Vec3Patch::x(-4.0)));
    assert_eq!(h.part(&id).scale.x, 0.1);
    h.editor
        .update_part(&id, &PartPatch::scale(Vec3Patch::x(3.0)));
    assert_eq!(h.part(&id).scale.x, 3.0);
}

#[test]
fn test_update_missing_part_reports_not_found() {
    let mut h = TestHarness::new();
    let outcome = h
        .editor
        .update_part("nope", &PartPatch::name("Renamed"));
    assert_eq!(outcome, UpdateOutcome::NotFound);
}

#[test]
fn test_drag_commit_single_step() {
    let mut h = TestHarness::new();
    let id = h.add(PartType::Pulley);
    let before = h.history_len();

    h.drag_to(&id, Vec3::new(0.0, 4.0, 0.0), 60);
    assert_eq!(h.history_len(), before + 1);
    assert!(h.editor.gesture().is_none());

    // A second end with nothing changed records nothing
    assert!(!h.editor.end_gesture());
    assert_eq!(h.history_len(), before + 1);
}

#[test]
fn test_structural_edit_ends_gesture() {
    let mut h = TestHarness::new();
    let id = h.add_gear();
    h.editor.begin_gesture(id.clone());
    h.add(PartType::Shaft);
    assert!(h.editor.gesture().is_none());
}

#[test]
fn test_undo_clears_selection() {
    let mut h = TestHarness::new();
    let id = h.add_gear();
    assert_eq!(h.editor.selected(), Some(&id));
    h.add_gear();
    assert!(h.undo());
    assert!(h.editor.selected().is_none());
}

#[test]
fn test_view_state_tracks_changes() {
    let mut h = TestHarness::new();
    let rx = h.editor.subscribe();
    let id = h.add(PartType::Spring);

    let view = rx.borrow().clone();
    assert_eq!(view.parts.len(), 1);
    assert_eq!(view.selected.as_ref(), Some(&id));
    assert!(view.can_undo);
    assert!(!view.can_redo);
    assert_eq!(view, h.editor.view_state());
}
