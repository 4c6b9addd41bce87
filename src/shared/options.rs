//! Zentrale Konfiguration für das Ruteador-Karten-Modul.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Externe Dienste ─────────────────────────────────────────────────

/// Basis-URL des öffentlichen OSRM-Routing-Dienstes.
pub const ROUTING_BASE_URL: &str = "https://router.project-osrm.org";
/// Basis-URL des Planungs-Backends.
pub const PLANNING_BASE_URL: &str = "http://127.0.0.1:8000";
/// Timeout für HTTP-Anfragen in Sekunden. Ein Timeout wird wie jeder
/// andere Anfragefehler behandelt (Luftlinien-Rückfall).
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// ── Karte ───────────────────────────────────────────────────────────

/// Rand beim automatischen Einpassen auf den Markerbestand, in Pixeln.
pub const FIT_BOUNDS_PADDING_PX: f32 = 50.0;
/// Pick-Radius für Marker-Klicks in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 12.0;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `ruteador_mapa.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapOptions {
    /// Basis-URL des Routing-Dienstes
    pub routing_base_url: String,
    /// Basis-URL des Planungs-Backends
    pub planning_base_url: String,
    /// HTTP-Timeout in Sekunden
    pub request_timeout_secs: u64,
    /// Rand beim Auto-Zoom in Pixeln
    pub fit_bounds_padding_px: f32,
    /// Pick-Radius für Marker-Klicks in Screen-Pixeln
    pub selection_pick_radius_px: f32,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            routing_base_url: ROUTING_BASE_URL.to_string(),
            planning_base_url: PLANNING_BASE_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            fit_bounds_padding_px: FIT_BOUNDS_PADDING_PX,
            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,
        }
    }
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ruteador_mapa"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ruteador_mapa.toml")
    }

    /// HTTP-Timeout als `Duration`.
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}
