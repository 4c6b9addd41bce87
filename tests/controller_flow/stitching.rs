//! Controller-Fluss: Routen-Naht von der Anfrage bis zur Polylinie.

use ruteador_mapa::{
    AppIntent, DirectionsOutcome, EntityFilter, GeoPoint, RouteFilter, RoutingMode, StreetLeg,
};

use super::{detour_legs_for, select_route, state_with_plan, street_legs_for};

#[test]
fn smart_mode_issues_one_pending_request_with_ordered_waypoints() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);

    let request = state
        .stitch
        .pending_request
        .as_ref()
        .expect("Offene Richtungs-Anfrage erwartet");
    assert_eq!(request.generation, state.stitch.generation);
    assert_eq!(
        request.waypoints,
        vec![
            GeoPoint::new(-12.0500, -77.0400),
            GeoPoint::new(-12.0504, -77.0404),
            GeoPoint::new(-12.0508, -77.0408),
        ]
    );
    // Noch keine Antwort → noch keine Polylinie
    assert!(state.polyline().is_empty());
}

#[test]
fn straight_mode_needs_no_request_and_emits_waypoints() {
    let (mut controller, mut state) = state_with_plan();
    controller
        .handle_intent(
            &mut state,
            AppIntent::RoutingModeChanged {
                mode: RoutingMode::Straight,
            },
        )
        .unwrap();
    select_route(&mut controller, &mut state, "M1", 1);

    assert!(state.stitch.pending_request.is_none());
    assert_eq!(
        state.polyline(),
        &[
            GeoPoint::new(-12.0500, -77.0400),
            GeoPoint::new(-12.0504, -77.0404),
            GeoPoint::new(-12.0508, -77.0408),
        ]
    );
}

#[test]
fn short_routes_clear_without_any_request() {
    let (mut controller, mut state) = state_with_plan();
    // M2 Ruta 1 hat nur einen gültigen PDV
    select_route(&mut controller, &mut state, "M2", 1);

    assert!(state.stitch.pending_request.is_none());
    assert!(state.polyline().is_empty());

    // Auch im Luftlinien-Modus bleibt die Polylinie leer
    controller
        .handle_intent(
            &mut state,
            AppIntent::RoutingModeChanged {
                mode: RoutingMode::Straight,
            },
        )
        .unwrap();
    assert!(state.polyline().is_empty());
}

#[test]
fn good_legs_are_stitched_with_full_step_geometry() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);

    let request = state.stitch.pending_request.take().expect("Anfrage offen");
    let legs = street_legs_for(&request.waypoints);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsReceived {
                generation: request.generation,
                outcome: DirectionsOutcome::Legs(legs),
            },
        )
        .unwrap();

    // Zwei Teilstücke à drei Detailpunkte, ohne Bereinigung der Nahtstellen
    assert_eq!(state.polyline().len(), 6);
    assert_eq!(state.polyline()[0], GeoPoint::new(-12.0500, -77.0400));
    assert_eq!(state.polyline()[5], GeoPoint::new(-12.0508, -77.0408));
}

#[test]
fn detour_legs_collapse_to_their_endpoints() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);

    let request = state.stitch.pending_request.take().expect("Anfrage offen");
    let legs = detour_legs_for(&request.waypoints);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsReceived {
                generation: request.generation,
                outcome: DirectionsOutcome::Legs(legs),
            },
        )
        .unwrap();

    // Pro Umweg-Teilstück nur Start und Ende
    assert_eq!(
        state.polyline(),
        &[
            GeoPoint::new(-12.0500, -77.0400),
            GeoPoint::new(-12.0504, -77.0404),
            GeoPoint::new(-12.0504, -77.0404),
            GeoPoint::new(-12.0508, -77.0408),
        ]
    );
}

#[test]
fn failed_request_falls_back_to_straight_output() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);

    let request = state.stitch.pending_request.take().expect("Anfrage offen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsReceived {
                generation: request.generation,
                outcome: DirectionsOutcome::Failed {
                    reason: "Routing-Dienst nicht erreichbar".to_string(),
                },
            },
        )
        .unwrap();

    // Rückfall entspricht exakt dem Luftlinien-Modus
    assert_eq!(state.polyline(), request.waypoints.as_slice());
    // Kein nutzerseitiger Fehler: der Rückfall ist still
    assert!(state.ui.last_error.is_none());
}

#[test]
fn leg_count_mismatch_falls_back_to_straight_output() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);

    let request = state.stitch.pending_request.take().expect("Anfrage offen");
    // Nur ein Teilstück für drei Wegpunkte: Antwort unbrauchbar
    let legs = vec![StreetLeg {
        distance_meters: 100.0,
        points: vec![request.waypoints[0], request.waypoints[1]],
    }];

    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsReceived {
                generation: request.generation,
                outcome: DirectionsOutcome::Legs(legs),
            },
        )
        .unwrap();

    assert_eq!(state.polyline(), request.waypoints.as_slice());
}

#[test]
fn late_response_of_superseded_request_is_discarded() {
    let (mut controller, mut state) = state_with_plan();

    // Erster Auslöser: Ruta 1
    select_route(&mut controller, &mut state, "M1", 1);
    let first = state.stitch.pending_request.take().expect("Anfrage offen");

    // Zweiter Auslöser bevor die erste Antwort da ist: Ruta 2
    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteFilterChanged {
                filter: RouteFilter::Route(2),
            },
        )
        .unwrap();
    let second = state.stitch.pending_request.take().expect("Anfrage offen");
    assert!(second.generation > first.generation);

    // Die erste Antwort kommt zu spät und muss verworfen werden
    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsReceived {
                generation: first.generation,
                outcome: DirectionsOutcome::Legs(street_legs_for(&first.waypoints)),
            },
        )
        .unwrap();
    assert!(state.polyline().is_empty());

    // Die zweite Antwort zählt
    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsReceived {
                generation: second.generation,
                outcome: DirectionsOutcome::Legs(street_legs_for(&second.waypoints)),
            },
        )
        .unwrap();

    assert!(!state.polyline().is_empty());
    // Nur Geometrie der Ruta 2 (D → E), nichts von Ruta 1
    assert_eq!(state.polyline()[0], GeoPoint::new(-12.0600, -77.0300));
    assert!(state
        .polyline()
        .iter()
        .all(|p| *p != GeoPoint::new(-12.0500, -77.0400)));
}

#[test]
fn mode_change_invalidates_an_inflight_request() {
    let (mut controller, mut state) = state_with_plan();
    select_route(&mut controller, &mut state, "M1", 1);
    let request = state.stitch.pending_request.take().expect("Anfrage offen");

    // Nutzer schaltet auf Luftlinie, während die Antwort unterwegs ist
    controller
        .handle_intent(
            &mut state,
            AppIntent::RoutingModeChanged {
                mode: RoutingMode::Straight,
            },
        )
        .unwrap();
    let straight = state.polyline().to_vec();
    assert_eq!(straight.len(), 3);

    // Verspätete Smart-Antwort darf das Luftlinien-Ergebnis nicht überschreiben
    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsReceived {
                generation: request.generation,
                outcome: DirectionsOutcome::Legs(street_legs_for(&request.waypoints)),
            },
        )
        .unwrap();
    assert_eq!(state.polyline(), straight.as_slice());
}

#[test]
fn entity_filter_without_route_clears_polyline() {
    let (mut controller, mut state) = state_with_plan();
    controller
        .handle_intent(
            &mut state,
            AppIntent::RoutingModeChanged {
                mode: RoutingMode::Straight,
            },
        )
        .unwrap();
    select_route(&mut controller, &mut state, "M1", 1);
    assert!(!state.polyline().is_empty());

    // Entitätswechsel setzt den Routen-Filter zurück → keine aktive Route
    controller
        .handle_intent(
            &mut state,
            AppIntent::EntityFilterChanged {
                filter: EntityFilter::Entity("M2".to_string()),
            },
        )
        .unwrap();
    assert_eq!(state.route_filter, RouteFilter::All);
    assert!(state.polyline().is_empty());
}
