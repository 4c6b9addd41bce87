//! Controller-Fluss: Selektionsmodus, Drag-Geste, Massen-Umbuchung.

use glam::Vec2;
use ruteador_mapa::{AppIntent, DragPhase, ReassignRequest};

use super::{select_route, state_with_plan};

fn drag(
    controller: &mut ruteador_mapa::AppController,
    state: &mut ruteador_mapa::AppState,
    from: Vec2,
    to: Vec2,
) {
    controller
        .handle_intent(state, AppIntent::SelectionPointerDown { screen_pos: from })
        .unwrap();
    controller
        .handle_intent(state, AppIntent::SelectionPointerMoved { screen_pos: to })
        .unwrap();
    controller
        .handle_intent(state, AppIntent::SelectionPointerUp)
        .unwrap();
}

#[test]
fn toggling_selection_mode_suspends_map_gestures() {
    let (mut controller, mut state) = state_with_plan();
    assert!(!state.selection.native_gestures_suspended());

    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();
    assert!(state.selection.active);
    assert!(state.selection.native_gestures_suspended());

    // Pan wird im Selektionsmodus verworfen
    let center_before = state.view.viewport.center;
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapPan {
                delta_screen: Vec2::new(200.0, 0.0),
            },
        )
        .unwrap();
    assert_eq!(state.view.viewport.center, center_before);

    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();
    assert!(!state.selection.active);
}

#[test]
fn full_drag_over_single_entity_opens_bulk_dialog() {
    let (mut controller, mut state) = state_with_plan();
    // Nur Ruta 1 von M1 sichtbar; Auto-Zoom hat die Marker eingepasst
    select_route(&mut controller, &mut state, "M1", 1);

    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();
    drag(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(1280.0, 720.0),
    );

    let dialog = state.ui.bulk_dialog.as_ref().expect("Bulk-Dialog offen");
    assert_eq!(dialog.mercaderista, "M1");
    assert_eq!(dialog.count, 3);
    assert_eq!(dialog.codes, vec!["A", "B", "C"]);
    // Nach der Übergabe ist der Selektionsmodus beendet
    assert!(!state.selection.active);
    assert_eq!(state.selection.drag, DragPhase::Idle);
}

#[test]
fn drag_over_mixed_entities_raises_error_instead_of_dialog() {
    let (mut controller, mut state) = state_with_plan();
    // Gesamtansicht: Marker beider Mercaderistas, Auto-Zoom über alle
    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();
    drag(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(1280.0, 720.0),
    );

    assert!(state.ui.bulk_dialog.is_none());
    assert!(state.ui.last_error.is_some());
    assert!(!state.selection.active);
}

#[test]
fn zero_area_drag_emits_nothing_and_stays_in_mode() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);
    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();

    let p = Vec2::new(640.0, 360.0);
    drag(&mut controller, &mut state, p, p);

    assert!(state.ui.bulk_dialog.is_none());
    assert!(state.ui.last_error.is_none());
    // Entarteter Drag lässt den Modus aktiv
    assert!(state.selection.active);
    assert_eq!(state.selection.drag, DragPhase::Idle);
}

#[test]
fn empty_hit_set_keeps_selection_mode_active() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);
    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();

    // Winziger Drag in der Viewport-Ecke, weit weg von den Markern
    drag(
        &mut controller,
        &mut state,
        Vec2::new(1.0, 1.0),
        Vec2::new(3.0, 3.0),
    );

    assert!(state.ui.bulk_dialog.is_none());
    assert!(state.selection.active);
}

#[test]
fn pointer_leave_completes_the_gesture_like_pointer_up() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);
    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionPointerDown {
                screen_pos: Vec2::new(0.0, 0.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionPointerMoved {
                screen_pos: Vec2::new(1280.0, 720.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::SelectionPointerLeft)
        .unwrap();

    // Die Geste darf nicht in Drawing hängen bleiben
    assert_eq!(state.selection.drag, DragPhase::Idle);
    assert!(state.ui.bulk_dialog.is_some());
}

#[test]
fn confirming_bulk_dialog_hands_request_to_host() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);
    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();
    drag(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(1280.0, 720.0),
    );
    assert!(state.ui.bulk_dialog.is_some());

    controller
        .handle_intent(&mut state, AppIntent::BulkDialogConfirmed { to_ruta: -1 })
        .unwrap();

    assert!(state.ui.bulk_dialog.is_none());
    let request = state
        .ui
        .pending_reassign
        .take()
        .expect("Umbuchungs-Anfrage erwartet");
    let ReassignRequest::Bulk {
        mercaderista,
        codes,
        to_ruta,
    } = request
    else {
        panic!("Bulk-Anfrage erwartet");
    };
    assert_eq!(mercaderista, "M1");
    assert_eq!(codes, vec!["A", "B", "C"]);
    assert_eq!(to_ruta, -1);
}

#[test]
fn cancelling_bulk_dialog_discards_the_selection() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);
    controller
        .handle_intent(&mut state, AppIntent::SelectionModeToggled)
        .unwrap();
    drag(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(1280.0, 720.0),
    );

    controller
        .handle_intent(&mut state, AppIntent::BulkDialogCancelled)
        .unwrap();

    assert!(state.ui.bulk_dialog.is_none());
    assert!(state.ui.pending_reassign.is_none());
}

#[test]
fn marker_pick_opens_move_dialog_and_confirm_hands_over_request() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);

    // Klick exakt auf Marker A (über die aktuelle Projektion)
    let screen = state
        .view
        .viewport
        .geo_to_screen(ruteador_mapa::GeoPoint::new(-12.0500, -77.0400));
    controller
        .handle_intent(&mut state, AppIntent::PdvPickRequested { screen_pos: screen })
        .unwrap();

    let dialog = state.ui.move_dialog.as_ref().expect("Move-Dialog offen");
    assert_eq!(dialog.code, "A");
    assert_eq!(dialog.from_ruta, 1);
    assert_eq!(dialog.mercaderista, "M1");

    controller
        .handle_intent(&mut state, AppIntent::MoveDialogConfirmed { to_ruta: 2 })
        .unwrap();

    assert!(state.ui.move_dialog.is_none());
    let request = state
        .ui
        .pending_reassign
        .take()
        .expect("Umbuchungs-Anfrage erwartet");
    assert_eq!(
        request,
        ReassignRequest::Single {
            mercaderista: "M1".to_string(),
            code: "A".to_string(),
            from_ruta: 1,
            to_ruta: 2,
        }
    );
}

#[test]
fn confirming_move_to_same_route_is_a_no_op() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);

    let screen = state
        .view
        .viewport
        .geo_to_screen(ruteador_mapa::GeoPoint::new(-12.0500, -77.0400));
    controller
        .handle_intent(&mut state, AppIntent::PdvPickRequested { screen_pos: screen })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::MoveDialogConfirmed { to_ruta: 1 })
        .unwrap();

    assert!(state.ui.pending_reassign.is_none());
}
