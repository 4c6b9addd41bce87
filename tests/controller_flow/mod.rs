//! Gemeinsame Helfer für die Controller-Fluss-Tests.

pub mod selection_and_bulk;
pub mod stitching;

use ruteador_mapa::{
    AppController, AppIntent, AppState, EntityFilter, GeoPoint, PlanData, RouteFilter, StreetLeg,
};

/// Testplan: zwei Mercaderistas, drei Routen, ein PDV mit kaputten
/// Koordinaten.
pub fn sample_plan() -> PlanData {
    serde_json::from_str(
        r#"{"mercaderistas":[
            {"mercaderista":"M1","rango":{"zona":"sur"},"rutas":[
                {"ruta_id":1,"total_pdv":4,"pdvs":[
                    {"cod_live_tra":"A","razon_social":"Bodega A","orden":1,"latitud":-12.0500,"longitud":-77.0400},
                    {"cod_live_tra":"B","razon_social":"Bodega B","orden":2,"latitud":-12.0504,"longitud":-77.0404},
                    {"cod_live_tra":"C","razon_social":"Bodega C","orden":3,"latitud":-12.0508,"longitud":-77.0408},
                    {"cod_live_tra":"X","razon_social":"Defekt","orden":4,"latitud":"n/a","longitud":-77.0}
                ]},
                {"ruta_id":2,"total_pdv":2,"pdvs":[
                    {"cod_live_tra":"D","orden":1,"latitud":-12.0600,"longitud":-77.0300},
                    {"cod_live_tra":"E","orden":2,"latitud":-12.0604,"longitud":-77.0304}
                ]}
            ]},
            {"mercaderista":"M2","rango":null,"rutas":[
                {"ruta_id":1,"total_pdv":1,"pdvs":[
                    {"cod_live_tra":"F","orden":1,"latitud":-12.0800,"longitud":-77.0100}
                ]}
            ]}
        ]}"#,
    )
    .expect("Testplan sollte parsen")
}

/// Controller und State mit geladenem Testplan und Viewport-Größe.
pub fn state_with_plan() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1280.0, 720.0],
            },
        )
        .expect("ViewportResized sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlanReceived {
                plan: sample_plan(),
            },
        )
        .expect("PlanReceived sollte funktionieren");

    (controller, state)
}

/// Wählt Mercaderista und Route über die Filter-Intents.
pub fn select_route(
    controller: &mut AppController,
    state: &mut AppState,
    mercaderista: &str,
    ruta_id: i64,
) {
    controller
        .handle_intent(
            state,
            AppIntent::EntityFilterChanged {
                filter: EntityFilter::Entity(mercaderista.to_string()),
            },
        )
        .expect("EntityFilterChanged sollte funktionieren");
    controller
        .handle_intent(
            state,
            AppIntent::RouteFilterChanged {
                filter: RouteFilter::Route(ruta_id),
            },
        )
        .expect("RouteFilterChanged sollte funktionieren");
}

/// Plausible Straßen-Teilstücke: pro Wegpunkt-Paar drei Detailpunkte,
/// Distanz knapp über der Luftlinie (wird als Straße übernommen).
pub fn street_legs_for(waypoints: &[GeoPoint]) -> Vec<StreetLeg> {
    waypoints
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let mid = GeoPoint::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0);
            StreetLeg {
                distance_meters: a.straight_distance_meters(b) * 1.2,
                points: vec![a, mid, b],
            }
        })
        .collect()
}

/// Umweg-Teilstücke: Distanz über beiden Schwellwerten, die
/// Detailgeometrie müsste verworfen werden.
pub fn detour_legs_for(waypoints: &[GeoPoint]) -> Vec<StreetLeg> {
    waypoints
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let mid = GeoPoint::new(a.lat + 0.01, a.lng + 0.01);
            StreetLeg {
                distance_meters: a.straight_distance_meters(b) * 3.0 + 300.0,
                points: vec![a, mid, b],
            }
        })
        .collect()
}
