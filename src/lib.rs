//! Ruteador-Mapa Library.
//! Kern des Karten-Moduls als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod planning;
pub mod routing;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, BulkSelection, DirectionsOutcome,
    DirectionsRequest, DragPhase, EntityFilter, MoveDialogState, ReassignRequest, RouteFilter,
    RoutingMode, SelectionState, StitchState, UiState, ViewState,
};
pub use core::{
    GeoPoint, GeographicBounds, MapViewport, Marker, MarkerIndex, MarkerSet, Mercaderista, Pdv,
    PlanData, Ruta,
};
pub use routing::{DirectionsBackend, OsrmClient, StreetLeg};
pub use shared::MapOptions;
