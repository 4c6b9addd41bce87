//! Handler für Plan und Filter.

use std::sync::Arc;

use crate::app::state::{DragPhase, EntityFilter, RouteFilter};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{MarkerSet, PlanData, Ruta};

/// Übernimmt ein frisches Planungsergebnis.
/// Filter werden zurückgesetzt, offene Dialoge geschlossen.
pub fn set_plan(state: &mut AppState, plan: PlanData) {
    log::info!(
        "Plan geladen: {} Mercaderistas",
        plan.mercaderistas.len()
    );
    state.plan = Some(Arc::new(plan));
    state.entity_filter = EntityFilter::All;
    state.route_filter = RouteFilter::All;
    state.ui.close_dialogs();
    state.ui.last_error = None;
}

/// Verwirft den Plan und alle abgeleiteten Zustände.
pub fn clear_plan(state: &mut AppState) {
    state.plan = None;
    state.markers = MarkerSet::empty();
    state.entity_filter = EntityFilter::All;
    state.route_filter = RouteFilter::All;
    state.stitch.invalidate();
    state.stitch.active_waypoints.clear();
    state.stitch.polyline.clear();
    state.selection.active = false;
    state.selection.drag = DragPhase::Idle;
    state.ui.close_dialogs();
    state.ui.pending_reassign = None;
    state.ui.last_error = None;
}

/// Setzt den Mercaderista-Filter.
pub fn set_entity_filter(state: &mut AppState, filter: EntityFilter) {
    state.entity_filter = filter;
}

/// Setzt den Routen-Filter.
pub fn set_route_filter(state: &mut AppState, filter: RouteFilter) {
    state.route_filter = filter;
}

/// Leitet den Markerbestand aus Plan und Filtern neu ab.
pub fn rebuild_markers(state: &mut AppState) {
    state.markers = match state.plan.as_deref() {
        Some(plan) => {
            use_cases::markers::build_marker_set(plan, &state.entity_filter, &state.route_filter)
        }
        None => MarkerSet::empty(),
    };
}

/// Übernimmt die neuen Routen eines Mercaderistas aus einer
/// Umbuchungs-Antwort.
pub fn apply_route_update(state: &mut AppState, mercaderista: String, rutas: Vec<Ruta>) {
    let Some(plan) = state.plan.as_mut() else {
        log::warn!("Routen-Update ohne geladenen Plan verworfen");
        return;
    };

    if Arc::make_mut(plan).apply_route_update(&mercaderista, rutas) {
        log::info!("Routen von '{}' aktualisiert", mercaderista);
    } else {
        log::warn!(
            "Routen-Update für unbekannten Mercaderista '{}' verworfen",
            mercaderista
        );
    }
}
