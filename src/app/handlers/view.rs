//! Handler für Viewport-Operationen.

use glam::Vec2;

use crate::app::AppState;

/// Übernimmt die neue Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport.viewport_size = Vec2::new(size[0], size[1]);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_screen: Vec2) {
    state.view.viewport.pan_by_screen(delta_screen);
}

/// Zoomt die Karte multiplikativ.
pub fn zoom(state: &mut AppState, factor: f64) {
    state.view.viewport.zoom_by(factor);
}

/// Passt den Viewport auf den Markerbestand ein (Auto-Zoom).
/// Während aktiver Selektion unterbleibt das, damit die Geste stabil bleibt.
pub fn fit_to_markers(state: &mut AppState) {
    if state.selection.active {
        return;
    }
    let Some(bounds) = state.markers.bounds() else {
        return;
    };
    state
        .view
        .viewport
        .fit_bounds(&bounds, state.options.fit_bounds_padding_px);
}
