//! Datenmodell des Planungsergebnisses: Mercaderistas → Rutas → Verkaufspunkte.

use serde::{Deserialize, Deserializer, Serialize};

use super::GeoPoint;

/// Vollständiges Planungsergebnis des Backends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanData {
    /// Alle Mercaderistas (bzw. Departments im Bolsa-Modus)
    #[serde(default)]
    pub mercaderistas: Vec<Mercaderista>,
}

/// Ein Mercaderista mit seinen zugewiesenen Routen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mercaderista {
    /// Name bzw. Department-Bezeichnung
    pub mercaderista: String,
    /// Vom Backend verwalteter Einsatzbereich; wird bei Umbuchungen
    /// unverändert zurückgereicht
    #[serde(default)]
    pub rango: serde_json::Value,
    #[serde(default)]
    pub rutas: Vec<Ruta>,
}

/// Eine Route mit geordneten Verkaufspunkten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruta {
    pub ruta_id: i64,
    /// Anzahl Verkaufspunkte laut Backend (Anzeige)
    #[serde(default)]
    pub total_pdv: u32,
    #[serde(default)]
    pub pdvs: Vec<Pdv>,
}

/// Ein Verkaufspunkt (PDV) aus dem Planungsergebnis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pdv {
    /// Stabiler Punkt-Code; kann im Rohdatensatz fehlen
    #[serde(default, deserialize_with = "flexible_string")]
    pub cod_live_tra: Option<String>,
    /// Firmierung des Verkaufspunkts
    #[serde(default)]
    pub razon_social: String,
    /// Besuchsreihenfolge innerhalb der Route; fehlend zählt als 0
    #[serde(default)]
    pub orden: Option<i64>,
    /// Breitengrad; das Backend liefert wahlweise Zahl oder String
    #[serde(default, deserialize_with = "flexible_float")]
    pub latitud: Option<f64>,
    /// Längengrad; das Backend liefert wahlweise Zahl oder String
    #[serde(default, deserialize_with = "flexible_float")]
    pub longitud: Option<f64>,
}

impl Pdv {
    /// Geo-Position, sofern beide Koordinaten endliche Zahlen sind.
    ///
    /// Punkte mit unbrauchbaren Koordinaten werden vollständig ignoriert,
    /// nie teilweise übernommen.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.latitud, self.longitud) {
            (Some(lat), Some(lng)) => {
                let point = GeoPoint::new(lat, lng);
                point.is_finite().then_some(point)
            }
            _ => None,
        }
    }

    /// Besuchsreihenfolge, fehlend als 0.
    pub fn visit_order(&self) -> i64 {
        self.orden.unwrap_or(0)
    }
}

impl Ruta {
    /// PDVs in Besuchsreihenfolge.
    ///
    /// Stabile Sortierung nach `orden`; gleiche Werte behalten die
    /// Reihenfolge des Rohdatensatzes.
    pub fn pdvs_ordered(&self) -> Vec<&Pdv> {
        let mut ordered: Vec<&Pdv> = self.pdvs.iter().collect();
        ordered.sort_by_key(|pdv| pdv.visit_order());
        ordered
    }
}

impl PlanData {
    /// Findet einen Mercaderista per Name.
    pub fn find_mercaderista(&self, name: &str) -> Option<&Mercaderista> {
        self.mercaderistas
            .iter()
            .find(|merc| merc.mercaderista == name)
    }

    /// Ersetzt die Routen eines Mercaderistas (Antwort einer Umbuchung).
    /// Gibt `false` zurück wenn der Name unbekannt ist.
    pub fn apply_route_update(&mut self, name: &str, rutas: Vec<Ruta>) -> bool {
        let Some(merc) = self
            .mercaderistas
            .iter_mut()
            .find(|merc| merc.mercaderista == name)
        else {
            return false;
        };
        merc.rutas = rutas;
        true
    }
}

/// Zahl, String oder null — alles andere wird zu `None` statt zum
/// Parse-Abbruch des gesamten Plans.
fn flexible_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

/// Punkt-Codes kommen je nach Quelldatei als String oder Zahl.
fn flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}
