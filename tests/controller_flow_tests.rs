//! Integrationstests für den Intent→Command→Use-Case-Fluss:
//! Laden, Editing über Pixel-Intents, Undo/Redo, Viewport.

use choreo_editor::{
    EditorCommand, EditorController, EditorIntent, EditorState, MotorInfo, Spline, SplineRecord,
};
use glam::DVec2;

fn load_flat_motion(controller: &mut EditorController, state: &mut EditorState) {
    controller
        .handle_intent(
            state,
            EditorIntent::MotionLoaded {
                name: "wave".into(),
                record: SplineRecord::from_spline(&Spline::flat(1)),
            },
        )
        .expect("MotionLoaded sollte ohne Fehler durchlaufen");
}

#[test]
fn test_load_motion_frames_curve_and_seeds_history() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();

    load_flat_motion(&mut controller, &mut state);

    assert!(state.spline.is_some());
    assert_eq!(state.motion_name.as_deref(), Some("wave"));
    assert_eq!(state.history.len(), 1);
    // Der Seed-Snapshot allein ist noch kein speicherbarer Stand
    assert!(!state.is_savable());
    assert!(state.needs_redraw);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        EditorCommand::LoadMotion { name, .. } => assert_eq!(name, "wave"),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_knot_insert_via_pixel_intent_adds_segment_and_history_entry() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_flat_motion(&mut controller, &mut state);

    let pos_px = state.view.transform.forward_point(DVec2::new(0.5, 0.01));
    controller
        .handle_intent(&mut state, EditorIntent::KnotInsertRequested { pos_px })
        .expect("KnotInsertRequested sollte ohne Fehler durchlaufen");

    let spline = state.spline.as_ref().expect("Arbeitskopie fehlt");
    assert_eq!(spline.n_segments(), 2);
    assert_eq!(state.history.len(), 2);
    assert!(state.is_savable());
}

#[test]
fn test_undo_redo_walk_restores_segment_counts() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_flat_motion(&mut controller, &mut state);

    let pos_px = state.view.transform.forward_point(DVec2::new(0.5, 0.01));
    controller
        .handle_intent(&mut state, EditorIntent::KnotInsertRequested { pos_px })
        .unwrap();
    assert_eq!(state.spline.as_ref().unwrap().n_segments(), 2);

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.spline.as_ref().unwrap().n_segments(), 1);

    controller
        .handle_intent(&mut state, EditorIntent::RedoRequested)
        .unwrap();
    assert_eq!(state.spline.as_ref().unwrap().n_segments(), 2);
}

#[test]
fn test_undo_without_history_maps_to_no_command() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("UndoRequested ohne History sollte ein No-Op sein");

    assert!(state.command_log.is_empty());
}

#[test]
fn test_stretch_with_invalid_factor_is_filtered_at_mapping() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_flat_motion(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, EditorIntent::StretchRequested { factor: 0.0 })
        .expect("Ungültiger Faktor sollte gefiltert werden, nicht fehlschlagen");

    // Kein StretchCurve-Command, keine neue History-Stufe
    assert!(!state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, EditorCommand::StretchCurve { .. })));
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_stretch_doubles_duration() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_flat_motion(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, EditorIntent::StretchRequested { factor: 2.0 })
        .unwrap();

    let spline = state.spline.as_ref().unwrap();
    assert!((spline.duration() - 2.0).abs() < 1e-12);
    assert!((state.transport.duration - 2.0).abs() < 1e-12);
}

#[test]
fn test_limit_to_travel_clamps_to_player_length() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    controller
        .handle_intent(
            &mut state,
            EditorIntent::MotionPlayerSelected {
                info: MotorInfo {
                    id: 3,
                    setpoint_value_index: 0,
                    actual_value_index: 1,
                    length: 0.04,
                },
            },
        )
        .unwrap();
    load_flat_motion(&mut controller, &mut state);

    let pos_px = state.view.transform.forward_point(DVec2::new(0.5, 0.2));
    controller
        .handle_intent(&mut state, EditorIntent::KnotInsertRequested { pos_px })
        .unwrap();
    assert!(state.spline.as_ref().unwrap().max_value() > 0.04);

    controller
        .handle_intent(&mut state, EditorIntent::LimitToTravelRequested)
        .unwrap();

    let spline = state.spline.as_ref().unwrap();
    assert!(spline.max_value() <= 0.04 + 1e-12);
    assert!(spline.min_value() >= -1e-12);
}

#[test]
fn test_zoom_in_narrows_time_axis_only() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_flat_motion(&mut controller, &mut state);

    let before = *state.view.transform.viewport();
    controller
        .handle_intent(&mut state, EditorIntent::ZoomInRequested)
        .unwrap();
    let after = *state.view.transform.viewport();

    assert!(after.width() < before.width());
    assert!((after.height() - before.height()).abs() < 1e-12);
    assert!((after.center().x - before.center().x).abs() < 1e-9);
}

#[test]
fn test_drag_gesture_pans_viewport() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_flat_motion(&mut controller, &mut state);

    let before = *state.view.transform.viewport();
    controller
        .handle_intent(
            &mut state,
            EditorIntent::DragBegan {
                pos_px: DVec2::new(400.0, 300.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            EditorIntent::DragMoved {
                delta_px: DVec2::new(100.0, 0.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, EditorIntent::DragEnded)
        .unwrap();
    let after = *state.view.transform.viewport();

    // Drag nach rechts verschiebt den sichtbaren Ausschnitt nach links
    assert!(after.ll.x < before.ll.x);
    assert!((after.width() - before.width()).abs() < 1e-9);
}

#[test]
fn test_malformed_record_leaves_state_untouched_and_notifies() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_flat_motion(&mut controller, &mut state);

    let bad: SplineRecord = serde_json::from_str(
        r#"{"type": "BPoly", "coefficients": [[0.0]], "knots": [1.0, 0.0], "axis": 0}"#,
    )
    .expect("Record sollte deserialisierbar sein");

    controller
        .handle_intent(
            &mut state,
            EditorIntent::MotionLoaded {
                name: "kaputt".into(),
                record: bad,
            },
        )
        .expect("Fehlerhafter Datensatz sollte kein Controller-Fehler sein");

    assert_eq!(state.motion_name.as_deref(), Some("wave"));
    let notices = state.drain_notifications();
    assert_eq!(notices.len(), 1);
}
