//! Handler für den Selektionsmodus und die Drag-Geste.

use glam::Vec2;

use crate::app::state::{DragPhase, MoveDialogState};
use crate::app::use_cases::selection::{bounds_from_drag, evaluate_bulk_selection, BulkOutcome};
use crate::app::AppState;

/// Aktiviert den Selektionsmodus. Der Host unterdrückt ab jetzt die
/// Karten-eigenen Gesten und zeigt den Fadenkreuz-Cursor.
pub fn enter_mode(state: &mut AppState) {
    state.selection.active = true;
    state.selection.drag = DragPhase::Idle;
    log::info!("Selektionsmodus aktiviert");
}

/// Verlässt den Selektionsmodus; die Karten-Gesten sind wieder frei.
pub fn exit_mode(state: &mut AppState) {
    state.selection.active = false;
    state.selection.drag = DragPhase::Idle;
}

/// Beginnt die Drag-Geste am Startpunkt.
pub fn begin_drag(state: &mut AppState, screen_pos: Vec2) {
    if !state.selection.active {
        return;
    }
    state.selection.drag = DragPhase::Drawing {
        start_screen: screen_pos,
        current_screen: screen_pos,
    };
}

/// Schreibt die aktuelle Pointer-Position fort.
pub fn update_drag(state: &mut AppState, screen_pos: Vec2) {
    if let DragPhase::Drawing { current_screen, .. } = &mut state.selection.drag {
        *current_screen = screen_pos;
    }
}

/// Schließt die Drag-Geste ab: Begrenzung bilden, Treffer auswerten.
///
/// Der Treffertest läuft gegen den Markerbestand zum Zeitpunkt des
/// Abschlusses, nicht gegen einen Stand von der Modus-Aktivierung.
pub fn complete_drag(state: &mut AppState) {
    let DragPhase::Drawing {
        start_screen,
        current_screen,
    } = state.selection.drag
    else {
        return;
    };
    state.selection.drag = DragPhase::Idle;

    let Some(bounds) = bounds_from_drag(&state.view.viewport, start_screen, current_screen)
    else {
        log::debug!("Entartetes Auswahl-Rechteck verworfen");
        return;
    };

    let outcome = {
        let hits = state.markers.markers_within(&bounds);
        evaluate_bulk_selection(&hits)
    };
    match outcome {
        // Leere Auswahl: Modus bleibt aktiv, kein Dialog
        BulkOutcome::Empty => {}
        BulkOutcome::Mixed => {
            state.ui.last_error =
                Some("Bitte nur Punkte eines einzelnen Mercaderistas auswählen.".to_string());
            exit_mode(state);
        }
        BulkOutcome::Selected(selection) => {
            log::info!(
                "Massenauswahl: {} Punkte von '{}'",
                selection.count,
                selection.mercaderista
            );
            state.ui.bulk_dialog = Some(selection);
            exit_mode(state);
        }
    }
}

/// Pickt den nächstgelegenen Marker im Pixel-Radius und öffnet den
/// Einzel-Umbuchungs-Dialog.
pub fn pick_marker(state: &mut AppState, screen_pos: Vec2) {
    let query = state.view.viewport.screen_to_geo(screen_pos);
    let max_distance_degrees = state.view.viewport.degrees_per_pixel()
        * f64::from(state.options.selection_pick_radius_px);

    let Some((marker, distance)) = state.markers.nearest(query) else {
        return;
    };
    if distance > max_distance_degrees {
        return;
    }

    let Some(code) = marker.code.clone() else {
        log::warn!("PDV ohne Punkt-Code kann nicht umgebucht werden");
        return;
    };

    state.ui.move_dialog = Some(MoveDialogState {
        mercaderista: marker.mercaderista.clone(),
        from_ruta: marker.ruta_id,
        code,
        razon_social: marker.razon_social.clone(),
    });
}
