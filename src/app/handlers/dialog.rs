//! Handler für Umbuchungs-Dialoge und Fehlermeldungen.

use crate::app::state::ReassignRequest;
use crate::app::AppState;

/// Bestätigt die Einzel-Umbuchung und übergibt sie als offene Anfrage
/// an den Host.
pub fn confirm_move(state: &mut AppState, to_ruta: i64) {
    let Some(dialog) = state.ui.move_dialog.take() else {
        return;
    };

    if to_ruta == dialog.from_ruta {
        log::debug!("Umbuchung auf dieselbe Route ignoriert");
        return;
    }

    state.ui.pending_reassign = Some(ReassignRequest::Single {
        mercaderista: dialog.mercaderista,
        code: dialog.code,
        from_ruta: dialog.from_ruta,
        to_ruta,
    });
}

/// Schließt den Einzel-Umbuchungs-Dialog ohne Aktion.
pub fn close_move(state: &mut AppState) {
    state.ui.move_dialog = None;
}

/// Bestätigt die Massen-Umbuchung und übergibt sie als offene Anfrage
/// an den Host.
pub fn confirm_bulk(state: &mut AppState, to_ruta: i64) {
    let Some(selection) = state.ui.bulk_dialog.take() else {
        return;
    };

    if selection.codes.is_empty() {
        log::warn!("Massenauswahl ohne Punkt-Codes, keine Umbuchung möglich");
        return;
    }

    state.ui.pending_reassign = Some(ReassignRequest::Bulk {
        mercaderista: selection.mercaderista,
        codes: selection.codes,
        to_ruta,
    });
}

/// Schließt den Massen-Umbuchungs-Dialog ohne Aktion.
pub fn close_bulk(state: &mut AppState) {
    state.ui.bulk_dialog = None;
}

/// Löscht die aktuelle Fehlermeldung.
pub fn dismiss_error(state: &mut AppState) {
    state.ui.last_error = None;
}
