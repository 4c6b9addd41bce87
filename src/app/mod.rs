//! Application-Layer: Controller, State, Events, Handler und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{
    AppState, BulkSelection, DirectionsOutcome, DirectionsRequest, DragPhase, EntityFilter,
    MoveDialogState, ReassignRequest, RouteFilter, RoutingMode, SelectionState, StitchState,
    UiState, ViewState,
};
