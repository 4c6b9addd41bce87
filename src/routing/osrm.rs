//! OSRM-Client: Fußgänger-Routing mit Schrittgeometrie und Distanz pro
//! Teilstück.

use anyhow::{bail, Context};
use serde::Deserialize;

use super::{DirectionsBackend, StreetLeg};
use crate::core::GeoPoint;

/// Antwort des OSRM `route`-Endpunkts, reduziert auf die konsumierten Felder.
#[derive(Debug, Deserialize)]
struct OsrmResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    #[serde(default)]
    legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
struct OsrmLeg {
    /// Lauflänge des Teilstücks in Metern
    distance: f64,
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
struct OsrmStep {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON-Koordinaten in (Länge, Breite)
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}

impl From<OsrmLeg> for StreetLeg {
    /// GeoJSON liefert (Länge, Breite); die Karte erwartet (Breite, Länge).
    /// Doppelte Koordinaten an Schrittgrenzen bleiben erhalten.
    fn from(leg: OsrmLeg) -> Self {
        let points = leg
            .steps
            .iter()
            .flat_map(|step| step.geometry.coordinates.iter())
            .map(|c| GeoPoint::new(c[1], c[0]))
            .collect();
        StreetLeg {
            distance_meters: leg.distance,
            points,
        }
    }
}

/// Blocking-Client für den OSRM-Routing-Dienst.
pub struct OsrmClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl OsrmClient {
    /// Erstellt einen Client mit Timeout.
    pub fn new(base_url: &str, timeout: std::time::Duration) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("HTTP-Client konnte nicht erstellt werden")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Baut die Routen-URL: Koordinaten als `lng,lat`-Paare im
    /// Fußgänger-Profil, Schrittdetails an, Gesamt-Überblick aus.
    fn route_url(&self, waypoints: &[GeoPoint]) -> String {
        let coordinates = waypoints
            .iter()
            .map(|p| format!("{},{}", p.lng, p.lat))
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/route/v1/foot/{}?steps=true&geometries=geojson&overview=false",
            self.base_url, coordinates
        )
    }
}

impl DirectionsBackend for OsrmClient {
    fn fetch_directions(&self, waypoints: &[GeoPoint]) -> anyhow::Result<Vec<StreetLeg>> {
        if waypoints.len() < 2 {
            bail!("Richtungs-Anfrage benötigt mindestens zwei Wegpunkte");
        }

        let url = self.route_url(waypoints);
        log::debug!("Routing-Anfrage: {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .context("Routing-Dienst nicht erreichbar")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Routing-Dienst antwortete mit HTTP {status}");
        }

        let parsed: OsrmResponse = response
            .json()
            .context("Routing-Antwort nicht lesbar")?;

        let Some(route) = parsed.routes.into_iter().next() else {
            bail!("Routing-Antwort enthält keine Route");
        };

        Ok(route.legs.into_iter().map(StreetLeg::from).collect())
    }
}
