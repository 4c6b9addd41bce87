//! Zustand der Routen-Naht: Modus, Polylinie, laufende Anfrage.

use crate::core::GeoPoint;
use crate::routing::StreetLeg;

/// Betriebsmodus der Routen-Darstellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingMode {
    /// Straßengeometrie mit Umweg-Erkennung
    #[default]
    Smart,
    /// Reine Luftlinien zwischen den Wegpunkten
    Straight,
}

/// Eine an den Host delegierte Richtungs-Anfrage.
///
/// Der Host holt die Anfrage per `take()` ab, erfüllt sie über einen
/// [`crate::routing::DirectionsBackend`] und meldet das Ergebnis als
/// `AppIntent::DirectionsReceived` mit derselben Generation zurück.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    /// Generation zum Verwerfen veralteter Antworten
    pub generation: u64,
    /// Wegpunkte der aktiven Route in Besuchsreihenfolge
    pub waypoints: Vec<GeoPoint>,
}

/// Ergebnis einer Richtungs-Anfrage, vom Host zurückgemeldet.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectionsOutcome {
    /// Teilstücke in Wegpunkt-Reihenfolge
    Legs(Vec<StreetLeg>),
    /// Anfrage fehlgeschlagen (Netz, Timeout, leere oder kaputte Antwort)
    Failed { reason: String },
}

/// Zustand der Routen-Naht.
#[derive(Debug, Clone, Default)]
pub struct StitchState {
    pub mode: RoutingMode,
    /// Fertige Polylinie in (Breite, Länge) für die Darstellung;
    /// wird bei jedem Auslöser von Grund auf neu bestimmt
    pub polyline: Vec<GeoPoint>,
    /// Monoton steigender Zähler; nur die zuletzt ausgelöste Anfrage zählt
    pub generation: u64,
    /// Wegpunkte, für die die aktuelle Generation gilt
    pub active_waypoints: Vec<GeoPoint>,
    /// Vom Host abzuholende offene Anfrage
    pub pending_request: Option<DirectionsRequest>,
}

impl StitchState {
    /// Erstellt einen leeren Naht-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entwertet die laufende Generation; eine danach eintreffende
    /// Antwort der alten Generation wird verworfen.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending_request = None;
    }

    /// Startet eine neue Richtungs-Anfrage und gibt deren Generation zurück.
    pub fn begin_request(&mut self, waypoints: Vec<GeoPoint>) -> u64 {
        self.invalidate();
        self.active_waypoints = waypoints.clone();
        self.pending_request = Some(DirectionsRequest {
            generation: self.generation,
            waypoints,
        });
        self.generation
    }

    /// Prüft ob eine Antwort-Generation noch die aktuelle ist.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
