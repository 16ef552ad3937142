//! Bail-out mode host simulator.
//!
//! Plays a scripted match against the bail-out controller and prints a JSON
//! summary.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │              BAIL-OUT CONTROLLER              │
//!    Host "level failed"  │  ┌──────────────┐    ┌───────────────────┐   │
//!    ─────────────────────┼─▶│ orchestrator │───▶│ feedback          │   │
//!                         │  │ (gate, count)│    │ debouncer + anim  │───┼──▶ indicator,
//!                         │  └──────┬───────┘    └───────────────────┘   │    animation,
//!                         │         │ first failure                      │    counter text
//!                         │         ▼                                    │
//!                         │  ┌──────────────┐   poll every interval      │
//!                         │  │   monitor    │◀───────────────────────────┼──── session facade
//!                         │  │ last standing│────────────────────────────┼──▶ force match end
//!                         │  └──────────────┘                            │
//!                         │                                              │
//!                         │  config (store, watcher) · lifecycle         │
//!                         │  (teardown) · observability (logs, metrics)  │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use bailout_mode::config::loader::load_config;
use bailout_mode::config::watcher::{ConfigWatcher, DEFAULT_POLL_INTERVAL};
use bailout_mode::config::ConfigStore;
use bailout_mode::observability::logging;
use bailout_mode::sim::{run_scenario, Scenario};

#[derive(Parser)]
#[command(name = "bailout-sim")]
#[command(about = "Play a scripted match against the bail-out controller", long_about = None)]
struct Cli {
    /// Scenario file (TOML).
    scenario: PathBuf,

    /// Config file overriding the scenario's [config] table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload the config file while the scenario runs.
    #[arg(short, long, requires = "config")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::DEFAULT_FILTER);

    let cli = Cli::parse();
    tracing::info!("bailout-sim v{} starting", env!("CARGO_PKG_VERSION"));

    let mut scenario = Scenario::load(&cli.scenario)?;
    if let Some(path) = &cli.config {
        scenario.config = load_config(path)?;
    }

    tracing::info!(
        events = scenario.events.len(),
        mode = ?scenario.gameplay.mode,
        fail_effect_duration_secs = scenario.config.fail_effect_duration_secs,
        "Scenario loaded"
    );

    let store = ConfigStore::new(scenario.config.clone());

    // Dropping the watcher stops it, so it lives until the scenario is done.
    let _watcher = match &cli.config {
        Some(path) if cli.watch => {
            Some(ConfigWatcher::new(path, store.clone()).watch(DEFAULT_POLL_INTERVAL)?)
        }
        _ => None,
    };

    let summary = run_scenario(scenario, store).await;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
