//! Filter auf Mercaderista und Route.

/// Filter auf einen Mercaderista (bzw. Department im Bolsa-Modus).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntityFilter {
    /// Gesamtansicht über alle Mercaderistas
    #[default]
    All,
    /// Nur der benannte Mercaderista
    Entity(String),
}

impl EntityFilter {
    /// Prüft ob ein Mercaderista-Name den Filter passiert.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            EntityFilter::All => true,
            EntityFilter::Entity(selected) => selected == name,
        }
    }

    /// Gesamtansicht aktiv?
    pub fn is_all(&self) -> bool {
        matches!(self, EntityFilter::All)
    }
}

/// Filter auf eine Route innerhalb der gewählten Entität.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteFilter {
    /// Alle Routen
    #[default]
    All,
    /// Nur die Route mit dieser ID
    Route(i64),
}

impl RouteFilter {
    /// Prüft ob eine Routen-ID den Filter passiert.
    pub fn matches(&self, ruta_id: i64) -> bool {
        match self {
            RouteFilter::All => true,
            RouteFilter::Route(selected) => *selected == ruta_id,
        }
    }

    /// Konkrete Routen-ID, falls gesetzt.
    pub fn route_id(&self) -> Option<i64> {
        match self {
            RouteFilter::All => None,
            RouteFilter::Route(id) => Some(*id),
        }
    }
}
