//! Geografische Basistypen: Punkte und Begrenzungsrechtecke.

use serde::{Deserialize, Serialize};

/// Meter pro Grad der planaren Luftlinien-Näherung.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Ein geografischer Punkt in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Geo-Punkt.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Luftlinien-Distanz in Metern, planare Näherung.
    ///
    /// Grad-Differenzen werden als planar behandelt und mit
    /// [`METERS_PER_DEGREE`] skaliert. Die Umweg-Schwellwerte der
    /// Routen-Naht sind auf genau diese Näherung abgestimmt; eine
    /// geodätische Formel würde andere Teilstücke als Umweg einstufen.
    pub fn straight_distance_meters(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt() * METERS_PER_DEGREE
    }

    /// Prüft ob beide Koordinaten endliche Zahlen sind.
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Achsen-aligniertes geografisches Begrenzungsrechteck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicBounds {
    /// Südwestliche Ecke (minimale Breite/Länge)
    pub south_west: GeoPoint,
    /// Nordöstliche Ecke (maximale Breite/Länge)
    pub north_east: GeoPoint,
}

impl GeographicBounds {
    /// Baut das Rechteck aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            south_west: GeoPoint::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: GeoPoint::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Kleinstes Rechteck um alle Punkte. `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Erweitert das Rechteck so, dass der Punkt enthalten ist.
    pub fn extend(&mut self, point: GeoPoint) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gültig nur wenn die beiden Ecken verschieden sind.
    /// Ein Null-Flächen-Drag ergibt damit keine Selektion.
    pub fn is_valid(&self) -> bool {
        self.south_west != self.north_east
    }

    /// Punkt-im-Rechteck-Test, Rand inklusive.
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}
