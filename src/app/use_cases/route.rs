//! Use-Case: aktive Route aus Plan und Filtern ableiten.

use crate::app::state::{EntityFilter, RouteFilter};
use crate::core::{GeoPoint, PlanData};

/// Geordnete Wegpunkte der aktiven Route.
///
/// Eine Route ist nur aktiv, wenn der Routen-Filter auf eine konkrete
/// Route zeigt. PDVs ohne brauchbare Koordinaten werden übersprungen.
pub fn active_route_waypoints(
    plan: &PlanData,
    entity_filter: &EntityFilter,
    route_filter: &RouteFilter,
) -> Vec<GeoPoint> {
    let Some(target) = route_filter.route_id() else {
        return Vec::new();
    };

    let mut waypoints = Vec::new();
    for merc in &plan.mercaderistas {
        if !entity_filter.matches(&merc.mercaderista) {
            continue;
        }
        for ruta in &merc.rutas {
            if ruta.ruta_id != target {
                continue;
            }
            for pdv in ruta.pdvs_ordered() {
                if let Some(position) = pdv.position() {
                    waypoints.push(position);
                }
            }
        }
    }

    waypoints
}
