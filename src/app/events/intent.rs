use glam::Vec2;

use crate::app::state::{DirectionsOutcome, EntityFilter, RouteFilter, RoutingMode};
use crate::core::{PlanData, Ruta};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Planungsergebnis empfangen (Antwort des Planungs-Backends)
    PlanReceived { plan: PlanData },
    /// Plan verwerfen (zurück zur Startansicht)
    PlanCleared,
    /// Mercaderista-Filter geändert (setzt den Routen-Filter zurück)
    EntityFilterChanged { filter: EntityFilter },
    /// Routen-Filter geändert
    RouteFilterChanged { filter: RouteFilter },
    /// Routen-Darstellungsmodus umgeschaltet (Smart/Luftlinie)
    RoutingModeChanged { mode: RoutingMode },
    /// Antwort des Routing-Dienstes eingetroffen (vom Host zurückgemeldet)
    DirectionsReceived {
        generation: u64,
        outcome: DirectionsOutcome,
    },

    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um ein Pixel-Delta verschieben (bei aktivem Selektionsmodus
    /// unterdrückt)
    MapPan { delta_screen: Vec2 },
    /// Karte zoomen (bei aktivem Selektionsmodus unterdrückt)
    MapZoom { factor: f64 },

    /// Selektionsmodus ein- bzw. ausschalten
    SelectionModeToggled,
    /// Pointer-Down im Viewport (Screen-Koordinaten relativ zum
    /// Karten-Ursprung)
    SelectionPointerDown { screen_pos: Vec2 },
    /// Pointer-Bewegung während der Geste
    SelectionPointerMoved { screen_pos: Vec2 },
    /// Pointer losgelassen: Geste abschließen
    SelectionPointerUp,
    /// Pointer hat den Viewport verlassen: wirkt wie Pointer-Up,
    /// damit die Geste nicht hängen bleibt
    SelectionPointerLeft,

    /// PDV per Klick angewählt (öffnet den Einzel-Umbuchungs-Dialog)
    PdvPickRequested { screen_pos: Vec2 },
    /// Einzel-Umbuchung bestätigt
    MoveDialogConfirmed { to_ruta: i64 },
    /// Einzel-Umbuchungs-Dialog abgebrochen
    MoveDialogCancelled,
    /// Massen-Umbuchung bestätigt
    BulkDialogConfirmed { to_ruta: i64 },
    /// Massen-Umbuchungs-Dialog abgebrochen
    BulkDialogCancelled,
    /// Antwort einer Umbuchung eingetroffen: neue Routen eines
    /// Mercaderistas
    RouteUpdateReceived {
        mercaderista: String,
        rutas: Vec<Ruta>,
    },
    /// Fehlermeldung quittiert
    ErrorDismissed,
}
