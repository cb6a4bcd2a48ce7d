use crate::state::Position;

/// Errors raised when a [`GameConfig`] cannot produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a session needs at least one entity")]
    NoEntities,

    #[error("{entity_count} entities configured but only {spawns} spawn positions")]
    NotEnoughSpawns { entity_count: usize, spawns: usize },

    #[error("{entity_count} entities configured, at most {max} are supported")]
    TooManyEntities { entity_count: usize, max: usize },

    #[error("max health must be positive")]
    ZeroHealth,
}

/// Session configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GameConfig {
    /// Number of entity slots (N) in every new session.
    pub entity_count: usize,
    /// Starting and maximum health of every entity.
    pub max_health: u32,
    /// Damage dealt per attack.
    pub strength: u32,
    pub map_label: String,
    /// Spawn cell of entity `i`; needs at least `entity_count` entries.
    pub spawn_positions: Vec<Position>,
}

impl GameConfig {
    pub const DEFAULT_ENTITY_COUNT: usize = 4;
    /// Upper bound on the roster; keeps every slot index well inside `u32`.
    pub const MAX_ENTITY_COUNT: usize = 1024;
    pub const DEFAULT_MAX_HEALTH: u32 = 10;
    pub const DEFAULT_STRENGTH: u32 = 5;
    pub const DEFAULT_MAP_LABEL: &'static str = "default";
    pub const DEFAULT_SPAWNS: [Position; 4] = [
        Position::new(4, 4),
        Position::new(6, 3),
        Position::new(3, 6),
        Position::new(7, 6),
    ];

    pub fn new() -> Self {
        Self {
            entity_count: Self::DEFAULT_ENTITY_COUNT,
            max_health: Self::DEFAULT_MAX_HEALTH,
            strength: Self::DEFAULT_STRENGTH,
            map_label: Self::DEFAULT_MAP_LABEL.to_string(),
            spawn_positions: Self::DEFAULT_SPAWNS.to_vec(),
        }
    }

    /// Resizes the roster. Slots beyond the default spawns are lined up on
    /// row `r = 0` starting at `q = 0`. Oversized counts are left for
    /// [`GameConfig::validate`] to reject.
    pub fn with_entity_count(mut self, entity_count: usize) -> Self {
        self.entity_count = entity_count;
        let extra = self.spawn_positions.len()..entity_count.min(Self::MAX_ENTITY_COUNT);
        self.spawn_positions
            .extend(extra.map(|q| Position::new(q as i32, 0)));
        self
    }

    pub fn with_stats(mut self, max_health: u32, strength: u32) -> Self {
        self.max_health = max_health;
        self.strength = strength;
        self
    }

    pub fn with_map_label(mut self, map_label: impl Into<String>) -> Self {
        self.map_label = map_label.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity_count == 0 {
            return Err(ConfigError::NoEntities);
        }
        if self.entity_count > Self::MAX_ENTITY_COUNT {
            return Err(ConfigError::TooManyEntities {
                entity_count: self.entity_count,
                max: Self::MAX_ENTITY_COUNT,
            });
        }
        if self.spawn_positions.len() < self.entity_count {
            return Err(ConfigError::NotEnoughSpawns {
                entity_count: self.entity_count,
                spawns: self.spawn_positions.len(),
            });
        }
        if self.max_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
