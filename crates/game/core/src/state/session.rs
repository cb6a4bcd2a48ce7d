use crate::config::{ConfigError, GameConfig};

use super::{EntityId, EntitySlot, Position};

/// Sub-state of the current turn.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Phase {
    /// The owner may submit one move.
    #[default]
    Planning,
    /// The owner may attack any number of times, then end the turn.
    Moving,
}

/// Derived view of whether the session can still progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "camelCase"))]
pub enum Outcome {
    InProgress,
    /// Exactly one entity is still standing.
    Victory { winner: EntityId },
    /// Everyone is down.
    Draw,
}

/// Authoritative state of one game.
///
/// Runtime layers clone or query a session but mutate it exclusively through
/// [`crate::engine::SessionEngine`]. The entity list keeps its length for the
/// session's whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Session {
    pub entities: Vec<EntitySlot>,
    pub turn_owner: EntityId,
    pub phase: Phase,
    pub map_label: String,
}

impl Session {
    /// Creates a session with the configured spawns and stats.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let entities = config
            .spawn_positions
            .iter()
            .take(config.entity_count)
            .enumerate()
            .map(|(index, &position)| {
                EntitySlot::spawn(
                    EntityId::from(index),
                    position,
                    config.max_health,
                    config.strength,
                )
            })
            .collect();

        Ok(Self {
            entities,
            turn_owner: EntityId::FIRST,
            phase: Phase::Planning,
            map_label: config.map_label.clone(),
        })
    }

    /// Number of entity slots (N).
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entity(&self, id: EntityId) -> Option<&EntitySlot> {
        self.entities.get(id.index())
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntitySlot> {
        self.entities.get_mut(id.index())
    }

    pub fn position(&self, id: EntityId) -> Option<Position> {
        self.entity(id).map(|slot| slot.position)
    }

    pub fn alive_entities(&self) -> impl Iterator<Item = &EntitySlot> {
        self.entities.iter().filter(|slot| slot.is_alive())
    }

    /// Reports whether the game has been decided.
    pub fn outcome(&self) -> Outcome {
        let mut alive = self.alive_entities();
        match (alive.next(), alive.next()) {
            (None, _) => Outcome::Draw,
            (Some(winner), None) => Outcome::Victory { winner: winner.id },
            (Some(_), Some(_)) => Outcome::InProgress,
        }
    }

    /// Checks every structural invariant of the session.
    pub fn holds_invariants(&self) -> bool {
        self.turn_owner.index() < self.entities.len()
            && self.entities.iter().all(EntitySlot::holds_invariants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_first_owner_planning() {
        let session = Session::new(&GameConfig::default()).unwrap();

        assert_eq!(session.entity_count(), GameConfig::DEFAULT_ENTITY_COUNT);
        assert_eq!(session.turn_owner, EntityId::FIRST);
        assert_eq!(session.phase, Phase::Planning);
        assert_eq!(session.map_label, GameConfig::DEFAULT_MAP_LABEL);
        assert!(session.holds_invariants());

        for (index, slot) in session.entities.iter().enumerate() {
            assert_eq!(slot.id, EntityId::from(index));
            assert_eq!(slot.health, 10);
            assert_eq!(slot.max_health, 10);
            assert_eq!(slot.strength, 5);
            assert_eq!(slot.last_path, vec![slot.position]);
        }
    }

    #[test]
    fn outcome_tracks_survivors() {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        assert_eq!(session.outcome(), Outcome::InProgress);

        for slot in session.entities.iter_mut().skip(1) {
            slot.health = 0;
        }
        assert_eq!(
            session.outcome(),
            Outcome::Victory {
                winner: EntityId(0)
            }
        );

        session.entities[0].health = 0;
        assert_eq!(session.outcome(), Outcome::Draw);
    }

    #[test]
    fn phase_parses_case_insensitively() {
        assert_eq!("MOVING".parse::<Phase>().unwrap(), Phase::Moving);
        assert_eq!(Phase::Planning.to_string(), "planning");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn session_round_trips_through_json() {
        let session = Session::new(&GameConfig::default()).unwrap();
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["turnOwner"], 0);
        assert_eq!(json["phase"], "planning");
        assert_eq!(json["entities"][0]["lastPath"][0]["q"], 4);

        let decoded: Session = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, session);
    }

    #[test]
    fn outcome_is_tagged_by_status() {
        let json = serde_json::to_value(Outcome::Victory {
            winner: EntityId(2),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"status": "victory", "winner": 2}));
    }
}
