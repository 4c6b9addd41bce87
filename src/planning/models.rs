//! Wire-Formen des Planungs-Backends für Umbuchungen.

use serde::{Deserialize, Serialize};

use crate::core::{PlanData, Ruta};

/// Nutzlast der Einzel-Umbuchung (`/rutas/reasignar-pdv`).
///
/// `rango` und `rutas` des betroffenen Mercaderistas werden unverändert
/// zurückgereicht; das Backend rechnet auf dieser Basis weiter.
#[derive(Debug, Clone, Serialize)]
pub struct ReassignPdvPayload {
    pub mercaderista: String,
    pub cod_live_tra: String,
    pub from_ruta: i64,
    /// Zielroute; `-1` bedeutet "neue Route anlegen"
    pub to_ruta: i64,
    pub rango: serde_json::Value,
    pub rutas: Vec<Ruta>,
}

impl ReassignPdvPayload {
    /// Baut die Nutzlast aus dem Plan. `None` wenn der Mercaderista
    /// nicht (mehr) im Plan steht.
    pub fn from_plan(
        plan: &PlanData,
        mercaderista: &str,
        cod_live_tra: &str,
        from_ruta: i64,
        to_ruta: i64,
    ) -> Option<Self> {
        let merc = plan.find_mercaderista(mercaderista)?;
        Some(Self {
            mercaderista: merc.mercaderista.clone(),
            cod_live_tra: cod_live_tra.to_string(),
            from_ruta,
            to_ruta,
            rango: merc.rango.clone(),
            rutas: merc.rutas.clone(),
        })
    }
}

/// Nutzlast der Massen-Umbuchung (`/rutas/reasignar-masivo`).
#[derive(Debug, Clone, Serialize)]
pub struct BulkReassignPayload {
    pub mercaderista: String,
    pub codigos_pdv: Vec<String>,
    /// Zielroute; `-1` bedeutet "neue Route anlegen"
    pub to_ruta: i64,
    pub rutas: Vec<Ruta>,
    pub rango: serde_json::Value,
}

impl BulkReassignPayload {
    /// Baut die Nutzlast aus dem Plan. `None` wenn der Mercaderista
    /// nicht (mehr) im Plan steht.
    pub fn from_plan(
        plan: &PlanData,
        mercaderista: &str,
        codigos_pdv: Vec<String>,
        to_ruta: i64,
    ) -> Option<Self> {
        let merc = plan.find_mercaderista(mercaderista)?;
        Some(Self {
            mercaderista: merc.mercaderista.clone(),
            codigos_pdv,
            to_ruta,
            rutas: merc.rutas.clone(),
            rango: merc.rango.clone(),
        })
    }
}

/// Antwort beider Umbuchungs-Endpunkte: die neu berechneten Routen
/// eines Mercaderistas.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteUpdate {
    pub mercaderista: String,
    #[serde(default)]
    pub rutas: Vec<Ruta>,
}
