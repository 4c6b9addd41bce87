//! Farbpalette: reine Funktionen von Entität/Route auf eine Anzeigefarbe.

/// Globale Palette: eine Farbe pro Mercaderista in der Gesamtansicht.
pub const ENTITY_COLORS: [&str; 21] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0",
    "#f032e6", "#bcf60c", "#fabebe", "#008080", "#e6beff", "#9a6324", "#fffac8",
    "#800000", "#aaffc3", "#808000", "#ffd8b1", "#000075", "#808080", "#000000",
];

/// Routen-Palette: eine Farbe pro Route innerhalb eines Mercaderistas.
pub const ROUTE_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
    "#7f7f7f", "#bcbd22", "#17becf",
];

/// Polylinien-Farbe im Smart-Modus (violett).
pub const POLYLINE_COLOR_SMART: &str = "#9333ea";
/// Polylinien-Farbe im Luftlinien-Modus (grau).
pub const POLYLINE_COLOR_STRAIGHT: &str = "#6b7280";

/// Farbe eines Mercaderistas in der Gesamtansicht.
pub fn entity_color(entity_index: usize) -> &'static str {
    ENTITY_COLORS[entity_index % ENTITY_COLORS.len()]
}

/// Farbe einer Route in der gefilterten Ansicht.
/// Routen-IDs zählen ab 1; andere Werte werden per `rem_euclid` in die
/// Palette gefaltet statt zu unterlaufen.
pub fn route_color(ruta_id: i64) -> &'static str {
    let index = (ruta_id - 1).rem_euclid(ROUTE_COLORS.len() as i64) as usize;
    ROUTE_COLORS[index]
}

/// Markerfarbe: Gesamtansicht färbt nach Entität, gefilterte Ansicht
/// nach Route.
pub fn marker_color(entity_index: usize, ruta_id: i64, global_view: bool) -> &'static str {
    if global_view {
        entity_color(entity_index)
    } else {
        route_color(ruta_id)
    }
}
