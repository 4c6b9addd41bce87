//! Core-Domänentypen: Geo-Punkte, Plan, Marker, Viewport, Spatial-Index.

pub mod geo;
pub mod marker;
/// Core-Datenmodelle für Planungsergebnisse
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - PlanData: Container für alle Mercaderistas mit ihren Routen
/// - Ruta: Einzelne Route mit geordneten Verkaufspunkten
/// - Pdv: Einzelner Verkaufspunkt mit Position und Besuchsreihenfolge
pub mod plan;
pub mod spatial;
pub mod viewport;

pub use geo::{GeoPoint, GeographicBounds, METERS_PER_DEGREE};
pub use marker::{Marker, MarkerSet};
pub use plan::{Mercaderista, Pdv, PlanData, Ruta};
pub use spatial::{MarkerIndex, SpatialMatch};
pub use viewport::MapViewport;
