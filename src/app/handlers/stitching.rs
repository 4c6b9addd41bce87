//! Handler für die Routen-Naht: Neuberechnung, Antworten, Rückfall.

use crate::app::state::RoutingMode;
use crate::app::use_cases::{route, stitch};
use crate::app::AppState;
use crate::routing::StreetLeg;

/// Setzt den Darstellungsmodus.
pub fn set_mode(state: &mut AppState, mode: RoutingMode) {
    state.stitch.mode = mode;
}

/// Bestimmt die Polylinie von Grund auf neu.
///
/// Jeder Aufruf entwertet die vorige Generation; eine noch unterwegs
/// befindliche Antwort eines früheren Auslösers kann danach nicht mehr
/// übernommen werden (last-trigger-wins).
pub fn recompute(state: &mut AppState) {
    let waypoints = match state.plan.as_deref() {
        Some(plan) => {
            route::active_route_waypoints(plan, &state.entity_filter, &state.route_filter)
        }
        None => Vec::new(),
    };

    // Keine aktive Route oder nur ein Wegpunkt: sofort leeren, keine Anfrage
    if waypoints.len() < 2 {
        state.stitch.invalidate();
        state.stitch.active_waypoints.clear();
        state.stitch.polyline.clear();
        return;
    }

    match state.stitch.mode {
        RoutingMode::Straight => {
            state.stitch.invalidate();
            state.stitch.polyline = stitch::direct_polyline(&waypoints);
            state.stitch.active_waypoints = waypoints;
        }
        RoutingMode::Smart => {
            let waypoint_count = waypoints.len();
            let generation = state.stitch.begin_request(waypoints);
            log::debug!(
                "Richtungs-Anfrage ausgelöst: Generation {generation}, {waypoint_count} Wegpunkte"
            );
        }
    }
}

/// Vernäht die Teilstücke der aktuellen Generation zur Polylinie.
pub fn apply_directions(state: &mut AppState, legs: Vec<StreetLeg>) {
    let expected = state.stitch.active_waypoints.len().saturating_sub(1);
    if legs.len() != expected {
        log::warn!(
            "Routing-Antwort unvollständig: {} statt {} Teilstücke, Luftlinien-Rückfall",
            legs.len(),
            expected
        );
        state.stitch.polyline = stitch::direct_polyline(&state.stitch.active_waypoints);
        return;
    }

    state.stitch.polyline = stitch::stitch_polyline(&state.stitch.active_waypoints, &legs);
    log::info!(
        "Route vernäht: {} Teilstücke, {} Koordinaten",
        legs.len(),
        state.stitch.polyline.len()
    );
}

/// Richtungs-Anfrage fehlgeschlagen: Luftlinien-Rückfall für die ganze
/// Route. Für den Nutzer still, für den Betrieb geloggt.
pub fn apply_fallback(state: &mut AppState, reason: &str) {
    log::warn!("Routing-Dienst nicht nutzbar ({reason}), Luftlinien-Rückfall");
    state.stitch.polyline = stitch::direct_polyline(&state.stitch.active_waypoints);
}
