//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Configuration for the session store and its workers.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Template every new session is built from.
    pub game: GameConfig,
    /// Capacity of each session's command queue.
    pub command_buffer_size: usize,
    /// Capacity of each session's event broadcast channel.
    pub event_buffer_size: usize,
    /// Directory holding `*.ron` / `*.json` scenario files.
    pub scenario_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            command_buffer_size: 32,
            event_buffer_size: 100,
            scenario_dir: None,
        }
    }
}

impl RuntimeConfig {
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `SESSION_ENTITY_COUNT`
    /// - `SESSION_COMMAND_BUFFER`
    /// - `SESSION_EVENT_BUFFER`
    /// - `SCENARIO_DIR`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(count) = read_env::<usize>("SESSION_ENTITY_COUNT") {
            config.game = config.game.with_entity_count(count);
        }

        if let Some(capacity) = read_env::<usize>("SESSION_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        if let Some(capacity) = read_env::<usize>("SESSION_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config.scenario_dir = read_env::<PathBuf>("SCENARIO_DIR");

        config
    }

    pub fn with_scenario_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scenario_dir = Some(dir.into());
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
