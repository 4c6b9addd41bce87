//! Use-Case: Drag-Rechteck in eine geografische Begrenzung übersetzen.

use glam::Vec2;

use crate::core::{GeographicBounds, MapViewport};

/// Wandelt die beiden Drag-Ecken über die aktuelle Projektion in eine
/// geografische Begrenzung um.
///
/// Entartete Rechtecke (beide Ecken auf demselben Geo-Punkt) ergeben
/// keine Begrenzung; der Drag wird dann stillschweigend verworfen.
pub fn bounds_from_drag(
    viewport: &MapViewport,
    start_screen: Vec2,
    end_screen: Vec2,
) -> Option<GeographicBounds> {
    let a = viewport.screen_to_geo(start_screen);
    let b = viewport.screen_to_geo(end_screen);
    let bounds = GeographicBounds::from_corners(a, b);
    bounds.is_valid().then_some(bounds)
}
