//! Use-Case: Markerbestand aus Plan und Filtern ableiten.

use crate::app::state::{EntityFilter, RouteFilter};
use crate::core::{Marker, MarkerSet, PlanData};
use crate::shared::palette;

/// Baut den Markerbestand neu auf.
///
/// Gefilterte Traversierung des Plans in Besuchsreihenfolge; Punkte ohne
/// brauchbare Koordinaten fallen vollständig heraus. Die Farbe ist eine
/// reine Funktion aus Entitäts-Index bzw. Routen-ID.
pub fn build_marker_set(
    plan: &PlanData,
    entity_filter: &EntityFilter,
    route_filter: &RouteFilter,
) -> MarkerSet {
    let global_view = entity_filter.is_all();
    let mut markers = Vec::new();

    for (entity_index, merc) in plan.mercaderistas.iter().enumerate() {
        if !entity_filter.matches(&merc.mercaderista) {
            continue;
        }

        for ruta in &merc.rutas {
            if !route_filter.matches(ruta.ruta_id) {
                continue;
            }

            let color = palette::marker_color(entity_index, ruta.ruta_id, global_view);

            for pdv in ruta.pdvs_ordered() {
                let Some(position) = pdv.position() else {
                    continue;
                };
                markers.push(Marker {
                    code: pdv.cod_live_tra.clone(),
                    position,
                    ruta_id: ruta.ruta_id,
                    mercaderista_index: entity_index,
                    mercaderista: merc.mercaderista.clone(),
                    orden: pdv.visit_order(),
                    razon_social: pdv.razon_social.clone(),
                    color,
                });
            }
        }
    }

    MarkerSet::new(markers)
}
