use glam::Vec2;

use crate::app::state::{EntityFilter, RouteFilter, RoutingMode};
use crate::core::{PlanData, Ruta};
use crate::routing::StreetLeg;

/// Mutierende App-Commands, ausgeführt vom Controller.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Plan übernehmen (setzt Filter zurück, schließt Dialoge)
    SetPlan { plan: PlanData },
    /// Plan und alle abgeleiteten Zustände verwerfen
    ClearPlan,
    /// Mercaderista-Filter setzen
    SetEntityFilter { filter: EntityFilter },
    /// Routen-Filter setzen
    SetRouteFilter { filter: RouteFilter },
    /// Routen-Darstellungsmodus setzen
    SetRoutingMode { mode: RoutingMode },
    /// Markerbestand aus Plan und Filtern neu ableiten
    RebuildMarkers,
    /// Polylinie neu bestimmen: leeren, Luftlinie oder Richtungs-Anfrage
    RecomputePolyline,
    /// Straßen-Teilstücke der aktuellen Generation vernähen
    ApplyDirections { legs: Vec<StreetLeg> },
    /// Richtungs-Anfrage fehlgeschlagen → Luftlinien-Rückfall
    ApplyDirectionsFallback { reason: String },
    /// Neue Routen eines Mercaderistas in den Plan übernehmen
    ApplyRouteUpdate {
        mercaderista: String,
        rutas: Vec<Ruta>,
    },

    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Karte um ein Pixel-Delta verschieben
    PanMap { delta_screen: Vec2 },
    /// Karte zoomen
    ZoomMap { factor: f64 },
    /// Viewport auf den Markerbestand einpassen
    FitViewToMarkers,

    /// Selektionsmodus aktivieren
    EnterSelectionMode,
    /// Selektionsmodus verlassen
    ExitSelectionMode,
    /// Drag-Geste beginnen
    BeginSelectionDrag { screen_pos: Vec2 },
    /// Drag-Geste fortschreiben
    UpdateSelectionDrag { screen_pos: Vec2 },
    /// Drag abschließen: Begrenzung bilden, Treffer prüfen, Dialog öffnen
    CompleteSelectionDrag,

    /// Nächstgelegenen Marker picken und Einzel-Dialog öffnen
    PickMarker { screen_pos: Vec2 },
    /// Einzel-Umbuchung bestätigen (Anfrage an den Host übergeben)
    ConfirmMoveDialog { to_ruta: i64 },
    /// Einzel-Umbuchungs-Dialog schließen
    CloseMoveDialog,
    /// Massen-Umbuchung bestätigen (Anfrage an den Host übergeben)
    ConfirmBulkDialog { to_ruta: i64 },
    /// Massen-Umbuchungs-Dialog schließen
    CloseBulkDialog,
    /// Fehlermeldung löschen
    DismissError,
}
