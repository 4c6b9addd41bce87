//! Karten-Viewport: Web-Mercator-Projektion zwischen Screen-Pixeln und
//! Geo-Koordinaten, Pan/Zoom und Auto-Einpassung.

use glam::{DVec2, Vec2};

use super::{GeoPoint, GeographicBounds};

/// Kachelgröße der Mercator-Weltkarte in Pixeln bei Zoom 0.
const TILE_SIZE: f64 = 256.0;

/// Breitengrad-Grenze der Web-Mercator-Projektion.
const LATITUDE_LIMIT: f64 = 85.051_128_78;

/// Viewport über einer Web-Mercator-Karte.
///
/// Übersetzt zwischen Screen-Pixeln (Ursprung links oben im Viewport)
/// und geografischen Koordinaten, analog zur Projektion des Kartenhosts.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    /// Geografisches Zentrum des Viewports
    pub center: GeoPoint,
    /// Mercator-Zoomstufe
    pub zoom: f64,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
}

impl MapViewport {
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 19.0;

    /// Erstellt einen Viewport mit der Startansicht der Anwendung.
    pub fn new() -> Self {
        Self {
            center: GeoPoint::new(-12.0464, -77.0428),
            zoom: 6.0,
            viewport_size: Vec2::ZERO,
        }
    }

    /// Pixel-Breite der gesamten Weltkarte auf der aktuellen Zoomstufe.
    fn world_scale(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Projiziert einen Geo-Punkt in Welt-Pixel der aktuellen Zoomstufe.
    fn project(&self, point: GeoPoint) -> DVec2 {
        let scale = self.world_scale();
        let lat = point.lat.clamp(-LATITUDE_LIMIT, LATITUDE_LIMIT).to_radians();
        let x = (point.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - ((lat.tan() + 1.0 / lat.cos()).ln()) / std::f64::consts::PI) / 2.0 * scale;
        DVec2::new(x, y)
    }

    /// Kehrt die Projektion um: Welt-Pixel → Geo-Punkt.
    fn unproject(&self, world: DVec2) -> GeoPoint {
        let scale = self.world_scale();
        let lng = world.x / scale * 360.0 - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * world.y / scale);
        let lat = n.sinh().atan().to_degrees();
        GeoPoint::new(lat, lng)
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport-Ursprung)
    /// in geografische Koordinaten.
    pub fn screen_to_geo(&self, screen: Vec2) -> GeoPoint {
        let center_world = self.project(self.center);
        let offset = DVec2::new(
            (screen.x - self.viewport_size.x / 2.0) as f64,
            (screen.y - self.viewport_size.y / 2.0) as f64,
        );
        self.unproject(center_world + offset)
    }

    /// Konvertiert geografische Koordinaten in Screen-Koordinaten.
    pub fn geo_to_screen(&self, point: GeoPoint) -> Vec2 {
        let center_world = self.project(self.center);
        let world = self.project(point);
        Vec2::new(
            (world.x - center_world.x) as f32 + self.viewport_size.x / 2.0,
            (world.y - center_world.y) as f32 + self.viewport_size.y / 2.0,
        )
    }

    /// Längengrad pro Screen-Pixel auf der aktuellen Zoomstufe.
    /// Dient der Umrechnung von Pixel-Radien in Grad-Radien.
    pub fn degrees_per_pixel(&self) -> f64 {
        360.0 / self.world_scale()
    }

    /// Verschiebt das Kartenzentrum um das Pixel-Delta.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        let world = self.project(self.center) + DVec2::new(delta.x as f64, delta.y as f64);
        self.center = self.unproject(world);
    }

    /// Multiplikativer Zoom; `factor` 2.0 verdoppelt den Maßstab.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom + factor.log2()).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Passt Zentrum und Zoom so an, dass die Begrenzung mit dem
    /// angegebenen Rand vollständig sichtbar ist.
    pub fn fit_bounds(&mut self, bounds: &GeographicBounds, padding_px: f32) {
        self.center = bounds.center();

        let available = DVec2::new(
            (self.viewport_size.x - 2.0 * padding_px).max(1.0) as f64,
            (self.viewport_size.y - 2.0 * padding_px).max(1.0) as f64,
        );

        // Ausdehnung der Begrenzung in Welt-Pixeln bei Zoom 0
        let zero = Self {
            center: self.center,
            zoom: 0.0,
            viewport_size: self.viewport_size,
        };
        let sw = zero.project(bounds.south_west);
        let ne = zero.project(bounds.north_east);
        let extent = DVec2::new((ne.x - sw.x).abs(), (ne.y - sw.y).abs());

        let zoom_x = if extent.x > 0.0 {
            (available.x / extent.x).log2()
        } else {
            Self::ZOOM_MAX
        };
        let zoom_y = if extent.y > 0.0 {
            (available.y / extent.y).log2()
        } else {
            Self::ZOOM_MAX
        };

        self.zoom = zoom_x.min(zoom_y).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new()
    }
}
