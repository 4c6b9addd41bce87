//! Anbindung des Routing-Dienstes: Straßengeometrie und Distanz pro Teilstück.

pub mod osrm;

pub use osrm::OsrmClient;

use crate::core::GeoPoint;

/// Straßen-Teilstück zwischen zwei aufeinanderfolgenden Wegpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetLeg {
    /// Vom Routing-Dienst gemeldete Lauflänge in Metern
    pub distance_meters: f64,
    /// Schrittgeometrie in (Breite, Länge); die Koordinatenlisten der
    /// einzelnen Schritte sind unverändert aneinandergehängt
    pub points: Vec<GeoPoint>,
}

/// Abstraktion über den Routing-Dienst; erlaubt Tests ohne Netzwerk.
pub trait DirectionsBackend {
    /// Liefert pro aufeinanderfolgendem Wegpunkt-Paar genau ein
    /// Teilstück, in Eingabereihenfolge.
    fn fetch_directions(&self, waypoints: &[GeoPoint]) -> anyhow::Result<Vec<StreetLeg>>;
}
