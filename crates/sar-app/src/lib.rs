//! Mission launcher
//!
//! Thin wiring around the mission core: logging setup, layered settings,
//! the simulated demo scenario, and a ctrl-c hook into the mission's
//! interrupt flag. Everything probabilistic in the demo comes from the
//! scenario's seed, so a run is reproducible end to end.

pub mod scenario;

use anyhow::Context;
use mission_control::{Mission, MissionReport};
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub use scenario::ScenarioConfig;

/// Application settings: mission tuning plus the demo scenario
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub mission: mission_control::MissionConfig,
    pub scenario: ScenarioConfig,
    /// Also print the report as JSON
    pub emit_json: bool,
}

/// Initialize the global tracing subscriber
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load settings: defaults, overridden by an optional `sar.toml`, overridden
/// by `SAR_`-prefixed environment variables
pub fn load_settings() -> anyhow::Result<AppSettings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("sar").required(false))
        .add_source(config::Environment::with_prefix("SAR").separator("__"))
        .build()
        .context("building configuration")?;
    settings
        .try_deserialize()
        .context("deserializing configuration")
}

/// Run the full simulated mission and print the report
pub async fn run_demo(settings: AppSettings) -> anyhow::Result<MissionReport> {
    let mut link = scenario::build_flight_link(&settings.scenario);
    let mut vision = scenario::build_vision(&settings.scenario);
    let mut audio = scenario::build_audio(&settings.scenario, settings.mission.search_altitude_m);

    let mut mission = Mission::new(settings.mission);

    let interrupt = mission.interrupt_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("ctrl-c received, requesting mission interrupt");
            interrupt.trip();
        }
    });

    let report = mission.run(&mut link, &mut vision, &mut audio).await;

    println!("\n{report}\n");
    if settings.emit_json {
        println!("{}", report.to_json().context("serializing report")?);
    }
    info!(outcome = %report.outcome, victims = report.victim_count(), "mission finished");
    Ok(report)
}
