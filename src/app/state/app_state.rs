use std::sync::Arc;

use crate::app::CommandLog;
use crate::core::{GeoPoint, MarkerSet, PlanData};
use crate::shared::MapOptions;

use super::{EntityFilter, RouteFilter, SelectionState, StitchState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladener Plan (None = noch keine Planung empfangen)
    pub plan: Option<Arc<PlanData>>,
    /// Abgeleiteter Markerbestand für Darstellung und Treffertest
    pub markers: MarkerSet,
    /// Filter auf Mercaderista
    pub entity_filter: EntityFilter,
    /// Filter auf Route (nur mit konkretem Mercaderista sinnvoll)
    pub route_filter: RouteFilter,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selektions-State
    pub selection: SelectionState,
    /// Zustand der Routen-Naht
    pub stitch: StitchState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Dienste, Timeout, Radien)
    pub options: MapOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            plan: None,
            markers: MarkerSet::empty(),
            entity_filter: EntityFilter::All,
            route_filter: RouteFilter::All,
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            stitch: StitchState::new(),
            command_log: CommandLog::new(),
            options: MapOptions::default(),
        }
    }

    /// Gibt zurück, ob ein Plan geladen ist.
    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Aktuelle Polylinie der aktiven Route.
    pub fn polyline(&self) -> &[GeoPoint] {
        &self.stitch.polyline
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
