//! Turn hand-off.
//!
//! Ending a turn passes ownership to the next living entity in slot order and
//! resets the phase to `Planning`. Defeated slots are skipped.

use crate::action::ActionTransition;
use crate::engine::next_alive_owner;
use crate::state::{EntityId, Phase, Session};

use super::SessionError;
use super::validation::{ensure_entity, ensure_phase, ensure_turn_owner};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnAction {
    pub actor: EntityId,
}

impl EndTurnAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    /// Successor that will own the next turn.
    ///
    /// A scan that finds nobody, or wraps back to the actor itself, means no
    /// opponent is left standing and the game is over.
    fn successor(&self, session: &Session) -> Result<EntityId, SessionError> {
        next_alive_owner(session, self.actor)
            .filter(|&next| next != self.actor)
            .ok_or(SessionError::NoAliveEntities)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TurnChange {
    pub previous: EntityId,
    pub next: EntityId,
    /// Defeated slots passed over during the scan.
    pub skipped: usize,
}

impl ActionTransition for EndTurnAction {
    type Error = SessionError;
    type Result = TurnChange;

    fn pre_validate(&self, session: &Session) -> Result<(), Self::Error> {
        ensure_entity(session, self.actor)?;
        ensure_turn_owner(session, self.actor)?;
        ensure_phase(session, Phase::Moving)?;
        self.successor(session).map(|_| ())
    }

    fn apply(&self, session: &mut Session) -> Result<Self::Result, Self::Error> {
        let next = self.successor(session)?;
        let count = session.entity_count();
        let skipped = (next.index() + count - self.actor.index()) % count - 1;

        session.turn_owner = next;
        session.phase = Phase::Planning;

        Ok(TurnChange {
            previous: self.actor,
            next,
            skipped,
        })
    }

    fn post_validate(&self, session: &Session) -> Result<(), Self::Error> {
        debug_assert!(
            session
                .entity(session.turn_owner)
                .is_some_and(|slot| slot.is_alive()),
            "turn owner must be alive after a hand-off"
        );
        Ok(())
    }
}
