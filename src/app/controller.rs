//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Plan & Filter ===
            AppCommand::SetPlan { plan } => handlers::plan::set_plan(state, plan),
            AppCommand::ClearPlan => handlers::plan::clear_plan(state),
            AppCommand::SetEntityFilter { filter } => {
                handlers::plan::set_entity_filter(state, filter)
            }
            AppCommand::SetRouteFilter { filter } => {
                handlers::plan::set_route_filter(state, filter)
            }
            AppCommand::RebuildMarkers => handlers::plan::rebuild_markers(state),
            AppCommand::ApplyRouteUpdate {
                mercaderista,
                rutas,
            } => handlers::plan::apply_route_update(state, mercaderista, rutas),

            // === Routen-Naht ===
            AppCommand::SetRoutingMode { mode } => handlers::stitching::set_mode(state, mode),
            AppCommand::RecomputePolyline => handlers::stitching::recompute(state),
            AppCommand::ApplyDirections { legs } => {
                handlers::stitching::apply_directions(state, legs)
            }
            AppCommand::ApplyDirectionsFallback { reason } => {
                handlers::stitching::apply_fallback(state, &reason)
            }

            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanMap { delta_screen } => handlers::view::pan(state, delta_screen),
            AppCommand::ZoomMap { factor } => handlers::view::zoom(state, factor),
            AppCommand::FitViewToMarkers => handlers::view::fit_to_markers(state),

            // === Selektion ===
            AppCommand::EnterSelectionMode => handlers::selection::enter_mode(state),
            AppCommand::ExitSelectionMode => handlers::selection::exit_mode(state),
            AppCommand::BeginSelectionDrag { screen_pos } => {
                handlers::selection::begin_drag(state, screen_pos)
            }
            AppCommand::UpdateSelectionDrag { screen_pos } => {
                handlers::selection::update_drag(state, screen_pos)
            }
            AppCommand::CompleteSelectionDrag => handlers::selection::complete_drag(state),
            AppCommand::PickMarker { screen_pos } => {
                handlers::selection::pick_marker(state, screen_pos)
            }

            // === Dialoge ===
            AppCommand::ConfirmMoveDialog { to_ruta } => {
                handlers::dialog::confirm_move(state, to_ruta)
            }
            AppCommand::CloseMoveDialog => handlers::dialog::close_move(state),
            AppCommand::ConfirmBulkDialog { to_ruta } => {
                handlers::dialog::confirm_bulk(state, to_ruta)
            }
            AppCommand::CloseBulkDialog => handlers::dialog::close_bulk(state),
            AppCommand::DismissError => handlers::dialog::dismiss_error(state),
        }

        Ok(())
    }
}
