//! Zustand der Rechteck-Selektion als expliziter Zustandsautomat.

use glam::Vec2;

/// Phase der Drag-Geste.
///
/// Pointer-Leave wird wie Pointer-Up behandelt; die Geste kann dadurch
/// nicht in `Drawing` hängen bleiben.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Zwischen Pointer-Down und Pointer-Up bzw. Pointer-Leave
    Drawing {
        /// Startpunkt relativ zum Viewport-Ursprung
        start_screen: Vec2,
        /// Zuletzt gemeldete Pointer-Position
        current_screen: Vec2,
    },
}

/// Auswahlbezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selektionsmodus aktiv: der Host setzt den Fadenkreuz-Cursor
    /// und unterdrückt die Karten-eigenen Gesten
    pub active: bool,
    pub drag: DragPhase,
}

impl SelectionState {
    /// Erstellt einen inaktiven Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Während des Modus sind Pan/Zoom/Tastatur der Karte gesperrt.
    pub fn native_gestures_suspended(&self) -> bool {
        self.active
    }

    /// Läuft gerade eine Drag-Geste?
    pub fn is_drawing(&self) -> bool {
        matches!(self.drag, DragPhase::Drawing { .. })
    }
}
