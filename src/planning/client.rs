//! Blocking-Client für das Planungs-Backend.

use std::path::Path;

use anyhow::{bail, Context};

use super::{BulkReassignPayload, ReassignPdvPayload, RouteUpdate};
use crate::core::PlanData;

/// Planungsmodus des Backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningMode {
    /// Rutenoptimierung für vorab zugewiesene Vendedores
    Asignado { frecuencia: Frequency },
    /// Territorien-Entwurf über eine Punkte-Bolsa
    Bolsa { capacidad: u32 },
}

/// Besuchsfrequenz im Asignado-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Semanal,
    Quincenal,
    Mensual,
}

impl Frequency {
    fn as_str(self) -> &'static str {
        match self {
            Frequency::Semanal => "SEMANAL",
            Frequency::Quincenal => "QUINCENAL",
            Frequency::Mensual => "MENSUAL",
        }
    }
}

/// Parameter des Planungslaufs.
#[derive(Debug, Clone, Copy)]
pub struct PlanningParams {
    pub mode: PlanningMode,
    /// Toleranz der Routengrößen (0.0–1.0)
    pub flex: f64,
    /// Samstag als halber Arbeitstag
    pub sabado: bool,
}

/// Blocking-Client für das Planungs-Backend. Die Antworten werden als
/// opake Strukturen übernommen; Planungslogik bleibt serverseitig.
pub struct PlanningClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PlanningClient {
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

    /// Lädt den Stammdatensatz hoch und startet die Planung.
    pub fn planificar(&self, file: &Path, params: &PlanningParams) -> anyhow::Result<PlanData> {
        let mut form = reqwest::blocking::multipart::Form::new()
            .file("file", file)
            .with_context(|| format!("Stammdatei nicht lesbar: {}", file.display()))?
            .text("flex", params.flex.to_string())
            .text("sabado", params.sabado.to_string());

        form = match params.mode {
            PlanningMode::Asignado { frecuencia } => form
                .text("modo", "ASIGNADO")
                .text("frecuencia", frecuencia.as_str()),
            PlanningMode::Bolsa { capacidad } => form
                .text("modo", "BOLSA")
                .text("capacidad", capacidad.to_string()),
        };

        let response = self
            .http
            .post(format!("{}/planificar", self.base_url))
            .multipart(form)
            .send()
            .context("Planungs-Backend nicht erreichbar")?;

        Self::json_or_bail(response, "Planung")
    }

    /// Bucht einen einzelnen PDV auf eine andere Route um.
    pub fn reassign_pdv(&self, payload: &ReassignPdvPayload) -> anyhow::Result<RouteUpdate> {
        let response = self
            .http
            .post(format!("{}/rutas/reasignar-pdv", self.base_url))
            .json(payload)
            .send()
            .context("Planungs-Backend nicht erreichbar")?;

        Self::json_or_bail(response, "Einzel-Umbuchung")
    }

    /// Bucht mehrere PDVs eines Mercaderistas auf eine andere Route um.
    pub fn reassign_bulk(&self, payload: &BulkReassignPayload) -> anyhow::Result<RouteUpdate> {
        let response = self
            .http
            .post(format!("{}/rutas/reasignar-masivo", self.base_url))
            .json(payload)
            .send()
            .context("Planungs-Backend nicht erreichbar")?;

        Self::json_or_bail(response, "Massen-Umbuchung")
    }

    fn json_or_bail<T: serde::de::DeserializeOwned>(
        response: reqwest::blocking::Response,
        operation: &str,
    ) -> anyhow::Result<T> {
        let status = response.status();
        if !status.is_success() {
            bail!("{operation} fehlgeschlagen: HTTP {status}");
        }
        response
            .json()
            .with_context(|| format!("Antwort der {operation} nicht lesbar"))
    }
}
