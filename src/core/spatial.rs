//! Spatial-Index (KD-Tree) für schnelle Marker-Abfragen.

use kiddo::{KdTree, SquaredEuclidean};

use crate::core::{GeoPoint, GeographicBounds};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des Markers im zugrunde liegenden Bestand
    pub marker_index: usize,
    /// Euklidische Distanz zum Suchpunkt in Grad
    pub distance_degrees: f64,
}

/// Read-only Spatial-Index über den Positionen eines Markerbestands.
#[derive(Debug, Clone)]
pub struct MarkerIndex {
    tree: KdTree<f64, 2>,
    positions: Vec<GeoPoint>,
}

impl MarkerIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Positionen.
    /// Die Treffer-Indizes entsprechen der Eingabereihenfolge.
    pub fn from_positions(positions: Vec<GeoPoint>) -> Self {
        let entries: Vec<[f64; 2]> = positions.iter().map(|p| [p.lat, p.lng]).collect();
        let tree: KdTree<f64, 2> = (&entries).into();
        Self { tree, positions }
    }

    /// Gibt die Anzahl indexierter Positionen zurück.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn keine Positionen im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Findet die nächstgelegene Position zum Suchpunkt.
    pub fn nearest(&self, query: GeoPoint) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.lat, query.lng]);

        Some(SpatialMatch {
            marker_index: result.item as usize,
            distance_degrees: result.distance.sqrt(),
        })
    }

    /// Findet alle Positionen innerhalb einer geografischen Begrenzung,
    /// Rand inklusive.
    ///
    /// Nutzt den KD-Tree mit einer umschließenden Kreisabfrage und prüft
    /// anschließend exakt gegen das Rechteck.
    pub fn within_bounds(&self, bounds: &GeographicBounds) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }

        let center = bounds.center();
        let half_lat = (bounds.north_east.lat - bounds.south_west.lat) / 2.0;
        let half_lng = (bounds.north_east.lng - bounds.south_west.lng) / 2.0;
        // Radius des umschließenden Kreises (Diagonale / 2)
        let radius_sq = half_lat * half_lat + half_lng * half_lng;

        let mut hits: Vec<usize> = self
            .tree
            .within::<SquaredEuclidean>(&[center.lat, center.lng], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let index = entry.item as usize;
                let position = self.positions.get(index)?;
                // Exakte Rechteck-Prüfung nach dem KD-Tree-Vorfilter
                bounds.contains(*position).then_some(index)
            })
            .collect();

        hits.sort_unstable();
        hits
    }
}
