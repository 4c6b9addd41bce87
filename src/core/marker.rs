//! Marker: gerenderte Verkaufspunkte und ihr indizierter Bestand.

use super::{GeoPoint, GeographicBounds, MarkerIndex};

/// Ein gerenderter Verkaufspunkt auf der Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Stabiler Punkt-Code; fehlt bei unvollständigen Rohdaten
    pub code: Option<String>,
    pub position: GeoPoint,
    /// Route, zu der der Punkt gehört
    pub ruta_id: i64,
    /// Index des Mercaderistas im Plan (Palette und Rückverweis)
    pub mercaderista_index: usize,
    /// Name des Mercaderistas bzw. Departments
    pub mercaderista: String,
    /// Besuchsreihenfolge (Tooltip)
    pub orden: i64,
    /// Firmierung (Tooltip)
    pub razon_social: String,
    /// Anzeigefarbe als CSS-Hex, reine Funktion aus Entität/Route
    pub color: &'static str,
}

/// Der abgeleitete Markerbestand inklusive Spatial-Index.
///
/// Wird bei jedem Plan- oder Filterwechsel komplett neu aufgebaut;
/// Treffertests laufen damit immer gegen den aktuellen Bestand.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    markers: Vec<Marker>,
    index: MarkerIndex,
}

impl MarkerSet {
    /// Erstellt einen leeren Bestand.
    pub fn empty() -> Self {
        Self {
            markers: Vec::new(),
            index: MarkerIndex::empty(),
        }
    }

    /// Baut den Bestand samt Index aus einer Markerliste.
    pub fn new(markers: Vec<Marker>) -> Self {
        let index =
            MarkerIndex::from_positions(markers.iter().map(|m| m.position).collect());
        Self { markers, index }
    }

    /// Read-only Sicht auf alle Marker.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Alle Marker innerhalb der Begrenzung, Rand inklusive,
    /// in Bestandsreihenfolge.
    pub fn markers_within(&self, bounds: &GeographicBounds) -> Vec<&Marker> {
        self.index
            .within_bounds(bounds)
            .into_iter()
            .filter_map(|i| self.markers.get(i))
            .collect()
    }

    /// Nächstgelegener Marker zum Suchpunkt, mit Distanz in Grad.
    pub fn nearest(&self, query: GeoPoint) -> Option<(&Marker, f64)> {
        let hit = self.index.nearest(query)?;
        let marker = self.markers.get(hit.marker_index)?;
        Some((marker, hit.distance_degrees))
    }

    /// Umschließendes Rechteck aller Marker (für Auto-Zoom).
    pub fn bounds(&self) -> Option<GeographicBounds> {
        GeographicBounds::from_points(self.markers.iter().map(|m| m.position))
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::empty()
    }
}
