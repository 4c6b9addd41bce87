//! Use-Case: Routen-Naht — pro Teilstück Straßengeometrie oder Luftlinie.

use crate::core::GeoPoint;
use crate::routing::StreetLeg;

/// Ab dieser Straßenlänge (Meter) kommt die Umweg-Prüfung überhaupt in
/// Betracht.
pub const DETOUR_MIN_STREET_METERS: f64 = 200.0;

/// Straße länger als das 2,5-fache der Luftlinie gilt als Umweg.
///
/// Beide Schwellwerte sind empirisch auf die planare Distanznäherung
/// ([`GeoPoint::straight_distance_meters`]) abgestimmt und dürfen nicht
/// unabhängig davon geändert werden.
pub const DETOUR_FACTOR: f64 = 2.5;

/// Bewertung eines Teilstücks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegDecision {
    /// Straßengeometrie übernehmen
    Street,
    /// Straße ist ein unplausibler Umweg → Luftlinie zwischen den Endpunkten
    DirectChord,
}

/// Stuft ein Teilstück ein.
///
/// Beide Bedingungen müssen zutreffen, damit die Straße verworfen wird:
/// absolute Mindestlänge und relativer Faktor zur Luftlinie.
pub fn classify_leg(straight_meters: f64, street_meters: f64) -> LegDecision {
    if street_meters > DETOUR_MIN_STREET_METERS
        && street_meters > straight_meters * DETOUR_FACTOR
    {
        LegDecision::DirectChord
    } else {
        LegDecision::Street
    }
}

/// Vernäht alle Teilstücke zu einer durchgehenden Polylinie.
///
/// Die Entscheidung fällt pro Teilstück unabhängig. An den Nahtstellen
/// können Koordinaten doppelt auftreten; das wird bewusst nicht bereinigt.
pub fn stitch_polyline(waypoints: &[GeoPoint], legs: &[StreetLeg]) -> Vec<GeoPoint> {
    let mut polyline = Vec::new();

    for (index, leg) in legs.iter().enumerate() {
        let (Some(start), Some(end)) = (waypoints.get(index), waypoints.get(index + 1)) else {
            break;
        };

        let straight_meters = start.straight_distance_meters(*end);
        match classify_leg(straight_meters, leg.distance_meters) {
            LegDecision::DirectChord => {
                polyline.push(*start);
                polyline.push(*end);
            }
            LegDecision::Street => polyline.extend_from_slice(&leg.points),
        }
    }

    polyline
}

/// Luftlinien-Polylinie: alle Wegpunkte in Besuchsreihenfolge.
/// Zugleich der Rückfall bei jedem Routing-Fehler.
pub fn direct_polyline(waypoints: &[GeoPoint]) -> Vec<GeoPoint> {
    waypoints.to_vec()
}
