/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung
/// (Plan, Filter, View, Selektion, Routen-Naht, Dialoge).
mod app_state;
mod filters;
mod selection;
mod stitch;
mod ui;
mod view;

pub use app_state::AppState;
pub use filters::{EntityFilter, RouteFilter};
pub use selection::{DragPhase, SelectionState};
pub use stitch::{DirectionsOutcome, DirectionsRequest, RoutingMode, StitchState};
pub use ui::{BulkSelection, MoveDialogState, ReassignRequest, UiState};
pub use view::ViewState;
