//! UI-Zustand: Dialoge, offene Umbuchungen, Fehlermeldungen.

/// Abgeschlossene, validierte Massenauswahl für den Umbuchungs-Dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkSelection {
    /// Name des (einzigen) betroffenen Mercaderistas
    pub mercaderista: String,
    /// Punkt-Codes der getroffenen Marker, in Bestandsreihenfolge.
    /// Marker ohne Code zählen in `count`, tauchen hier aber nicht auf.
    pub codes: Vec<String>,
    /// Anzahl getroffener Marker
    pub count: usize,
}

/// Zustand des Einzel-Umbuchungs-Dialogs.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDialogState {
    pub mercaderista: String,
    /// Aktuelle Route des PDV
    pub from_ruta: i64,
    /// Punkt-Code des PDV
    pub code: String,
    /// Firmierung für die Dialog-Überschrift
    pub razon_social: String,
}

/// Eine an den Host delegierte Umbuchungs-Anfrage.
///
/// Der Host erfüllt sie über den Planungs-Client und meldet die neuen
/// Routen als `AppIntent::RouteUpdateReceived` zurück.
#[derive(Debug, Clone, PartialEq)]
pub enum ReassignRequest {
    /// Einzelner PDV auf eine andere Route
    Single {
        mercaderista: String,
        code: String,
        from_ruta: i64,
        /// Zielroute; `-1` legt backendseitig eine neue Route an
        to_ruta: i64,
    },
    /// Mehrere PDVs eines Mercaderistas auf eine andere Route
    Bulk {
        mercaderista: String,
        codes: Vec<String>,
        /// Zielroute; `-1` legt backendseitig eine neue Route an
        to_ruta: i64,
    },
}

/// UI-Zustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Offener Einzel-Umbuchungs-Dialog
    pub move_dialog: Option<MoveDialogState>,
    /// Offener Massen-Umbuchungs-Dialog
    pub bulk_dialog: Option<BulkSelection>,
    /// Vom Host abzuholende Umbuchungs-Anfrage
    pub pending_reassign: Option<ReassignRequest>,
    /// Letzte nutzerseitige Fehlermeldung (Validierung, Backend)
    pub last_error: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schließt alle offenen Dialoge.
    pub fn close_dialogs(&mut self) {
        self.move_dialog = None;
        self.bulk_dialog = None;
    }
}
