//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::{DirectionsOutcome, RouteFilter};
use super::{AppCommand, AppIntent, AppState};


/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PlanReceived { plan } => vec![
            AppCommand::SetPlan { plan },
            AppCommand::RebuildMarkers,
            AppCommand::FitViewToMarkers,
            AppCommand::RecomputePolyline,
        ],
        AppIntent::PlanCleared => vec![AppCommand::ClearPlan],
        AppIntent::EntityFilterChanged { filter } => vec![
            AppCommand::SetEntityFilter { filter },
            // Der Routen-Filter gilt nur innerhalb des gewählten Mercaderistas
            AppCommand::SetRouteFilter {
                filter: RouteFilter::All,
            },
            AppCommand::RebuildMarkers,
            AppCommand::FitViewToMarkers,
            AppCommand::RecomputePolyline,
        ],
        AppIntent::RouteFilterChanged { filter } => vec![
            AppCommand::SetRouteFilter { filter },
            AppCommand::RebuildMarkers,
            AppCommand::FitViewToMarkers,
            AppCommand::RecomputePolyline,
        ],
        AppIntent::RoutingModeChanged { mode } => vec![
            AppCommand::SetRoutingMode { mode },
            AppCommand::RecomputePolyline,
        ],
        AppIntent::DirectionsReceived {
            generation,
            outcome,
        } => {
            // Nur die zuletzt ausgelöste Anfrage ist maßgeblich; verspätete
            // Antworten älterer Generationen werden hier verworfen.
            if !state.stitch.is_current(generation) {
                log::debug!(
                    "Veraltete Routing-Antwort verworfen: Generation {generation}, aktuell {}",
                    state.stitch.generation
                );
                return Vec::new();
            }
            match outcome {
                DirectionsOutcome::Legs(legs) => {
                    vec![AppCommand::ApplyDirections { legs }]
                }
                DirectionsOutcome::Failed { reason } => {
                    vec![AppCommand::ApplyDirectionsFallback { reason }]
                }
            }
        }

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::MapPan { delta_screen } => {
            // Während aktiver Selektion sind die Karten-Gesten ausgesetzt
            if state.selection.native_gestures_suspended() {
                Vec::new()
            } else {
                vec![AppCommand::PanMap { delta_screen }]
            }
        }
        AppIntent::MapZoom { factor } => {
            if state.selection.native_gestures_suspended() {
                Vec::new()
            } else {
                vec![AppCommand::ZoomMap { factor }]
            }
        }

        AppIntent::SelectionModeToggled => {
            if state.selection.active {
                vec![AppCommand::ExitSelectionMode]
            } else {
                vec![AppCommand::EnterSelectionMode]
            }
        }
        AppIntent::SelectionPointerDown { screen_pos } => {
            if state.selection.active {
                vec![AppCommand::BeginSelectionDrag { screen_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::SelectionPointerMoved { screen_pos } => {
            if state.selection.is_drawing() {
                vec![AppCommand::UpdateSelectionDrag { screen_pos }]
            } else {
                Vec::new()
            }
        }
        // Pointer-Leave schließt die Geste genauso ab wie Pointer-Up
        AppIntent::SelectionPointerUp | AppIntent::SelectionPointerLeft => {
            if state.selection.is_drawing() {
                vec![AppCommand::CompleteSelectionDrag]
            } else {
                Vec::new()
            }
        }

        AppIntent::PdvPickRequested { screen_pos } => {
            // Im Selektionsmodus sind Marker nicht klickbar
            if state.selection.active {
                Vec::new()
            } else {
                vec![AppCommand::PickMarker { screen_pos }]
            }
        }
        AppIntent::MoveDialogConfirmed { to_ruta } => {
            vec![AppCommand::ConfirmMoveDialog { to_ruta }]
        }
        AppIntent::MoveDialogCancelled => vec![AppCommand::CloseMoveDialog],
        AppIntent::BulkDialogConfirmed { to_ruta } => {
            vec![AppCommand::ConfirmBulkDialog { to_ruta }]
        }
        AppIntent::BulkDialogCancelled => vec![AppCommand::CloseBulkDialog],
        AppIntent::RouteUpdateReceived {
            mercaderista,
            rutas,
        } => vec![
            AppCommand::ApplyRouteUpdate {
                mercaderista,
                rutas,
            },
            AppCommand::RebuildMarkers,
            AppCommand::FitViewToMarkers,
            AppCommand::RecomputePolyline,
        ],
        AppIntent::ErrorDismissed => vec![AppCommand::DismissError],
    }
}
