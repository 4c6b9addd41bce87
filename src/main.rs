//! Ruteador-Mapa Vorschau-Werkzeug.
//!
//! Lädt ein Planungsergebnis (JSON), wählt Mercaderista und Route und
//! vernäht die Route über den Routing-Dienst zu einer Polylinie.
//! Die Koordinatenliste landet als JSON auf stdout.

use std::path::PathBuf;

use anyhow::{bail, Context};
use ruteador_mapa::routing::DirectionsBackend;
use ruteador_mapa::{
    AppController, AppIntent, AppState, DirectionsOutcome, EntityFilter, MapOptions, OsrmClient,
    PlanData, RouteFilter, RoutingMode,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Ruteador-Mapa v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse(std::env::args().skip(1))?;
    run(args)
}

/// Aufrufargumente des Vorschau-Werkzeugs.
struct CliArgs {
    plan_path: PathBuf,
    mercaderista: String,
    ruta_id: i64,
    /// Luftlinien-Modus statt Straßen-Naht
    straight: bool,
}

impl CliArgs {
    fn parse(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut positional = Vec::new();
        let mut straight = false;

        for arg in args {
            match arg.as_str() {
                "--straight" => straight = true,
                _ => positional.push(arg),
            }
        }

        let [plan_path, mercaderista, ruta_id] = positional.as_slice() else {
            bail!("Aufruf: Ruteador-Mapa <plan.json> <mercaderista> <ruta_id> [--straight]");
        };

        Ok(Self {
            plan_path: PathBuf::from(plan_path),
            mercaderista: mercaderista.clone(),
            ruta_id: ruta_id
                .parse()
                .with_context(|| format!("Routen-ID nicht lesbar: {ruta_id}"))?,
            straight,
        })
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    // Optionen aus TOML laden (oder Standardwerte)
    let options = MapOptions::load_from_file(&MapOptions::config_path());

    let plan_text = std::fs::read_to_string(&args.plan_path)
        .with_context(|| format!("Plan-Datei nicht lesbar: {}", args.plan_path.display()))?;
    let plan: PlanData = serde_json::from_str(&plan_text).context("Plan-JSON nicht lesbar")?;

    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options = options;

    controller.handle_intent(&mut state, AppIntent::PlanReceived { plan })?;
    if args.straight {
        controller.handle_intent(
            &mut state,
            AppIntent::RoutingModeChanged {
                mode: RoutingMode::Straight,
            },
        )?;
    }
    controller.handle_intent(
        &mut state,
        AppIntent::EntityFilterChanged {
            filter: EntityFilter::Entity(args.mercaderista.clone()),
        },
    )?;
    controller.handle_intent(
        &mut state,
        AppIntent::RouteFilterChanged {
            filter: RouteFilter::Route(args.ruta_id),
        },
    )?;

    // Offene Richtungs-Anfrage gegen den Routing-Dienst erfüllen
    if let Some(request) = state.stitch.pending_request.take() {
        let client = OsrmClient::new(
            &state.options.routing_base_url,
            state.options.request_timeout(),
        )?;
        let outcome = match client.fetch_directions(&request.waypoints) {
            Ok(legs) => DirectionsOutcome::Legs(legs),
            Err(e) => DirectionsOutcome::Failed {
                reason: format!("{e:#}"),
            },
        };
        controller.handle_intent(
            &mut state,
            AppIntent::DirectionsReceived {
                generation: request.generation,
                outcome,
            },
        )?;
    }

    if state.polyline().is_empty() {
        log::warn!(
            "Keine Polylinie für '{}', Ruta {} (Route leer oder nicht gefunden)",
            args.mercaderista,
            args.ruta_id
        );
    }

    println!("{}", serde_json::to_string_pretty(state.polyline())?);
    Ok(())
}
