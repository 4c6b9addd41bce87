//! Use-Case: Massenauswahl prüfen und zur Umbuchung übergeben.

use crate::app::state::BulkSelection;
use crate::core::Marker;

/// Ergebnis der Auswertung einer abgeschlossenen Rechteck-Selektion.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkOutcome {
    /// Kein Marker getroffen; der Selektionsmodus bleibt aktiv
    Empty,
    /// Marker mehrerer Mercaderistas getroffen; nutzerseitiger
    /// Validierungsfehler, keine Übergabe
    Mixed,
    /// Gültige Auswahl eines einzelnen Mercaderistas
    Selected(BulkSelection),
}

/// Wertet die getroffenen Marker aus.
///
/// Die Umbuchung arbeitet pro Mercaderista; eine Auswahl über mehrere
/// Mercaderistas hinweg wird abgelehnt. Marker ohne Punkt-Code zählen
/// mit, liefern aber keinen Code für die Nutzlast.
pub fn evaluate_bulk_selection(hits: &[&Marker]) -> BulkOutcome {
    let Some(first) = hits.first() else {
        return BulkOutcome::Empty;
    };

    if hits.iter().any(|m| m.mercaderista != first.mercaderista) {
        return BulkOutcome::Mixed;
    }

    let codes: Vec<String> = hits.iter().filter_map(|m| m.code.clone()).collect();

    BulkOutcome::Selected(BulkSelection {
        mercaderista: first.mercaderista.clone(),
        codes,
        count: hits.len(),
    })
}
