//! Game server entry point.
//!
//! Reads JSON requests from stdin, one per line, and writes one JSON reply per
//! line to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use tokio::io::{BufReader, stdin, stdout};

use runtime::{RuntimeConfig, ScenarioLibrary, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    config
        .game
        .validate()
        .context("invalid session configuration")?;

    let scenarios = match &config.scenario_dir {
        Some(dir) => ScenarioLibrary::load_dir(dir)
            .with_context(|| format!("failed to load scenarios from {}", dir.display()))?,
        None => ScenarioLibrary::new(),
    };

    tracing::info!(
        entities = config.game.entity_count,
        scenarios = scenarios.len(),
        "game server ready"
    );

    let store = SessionStore::with_scenarios(config, scenarios);
    game_server::serve(&store, BufReader::new(stdin()), stdout()).await?;

    tracing::info!(games = store.len().await, "input closed, shutting down");
    Ok(())
}
