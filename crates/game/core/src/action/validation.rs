//! Precondition helpers shared by the turn-bound actions.
//!
//! Callers chain these in the documented order so the first failing check
//! decides the reported rejection.

use crate::state::{EntityId, EntitySlot, Phase, Session};

use super::SessionError;

/// Resolves `id` to its slot or rejects it as out of range.
pub(super) fn ensure_entity(session: &Session, id: EntityId) -> Result<&EntitySlot, SessionError> {
    session.entity(id).ok_or(SessionError::InvalidActor {
        actor: i64::from(id.0),
    })
}

pub(super) fn ensure_turn_owner(session: &Session, actor: EntityId) -> Result<(), SessionError> {
    if session.turn_owner != actor {
        return Err(SessionError::NotYourTurn {
            actor,
            turn_owner: session.turn_owner,
        });
    }
    Ok(())
}

pub(super) fn ensure_phase(session: &Session, expected: Phase) -> Result<(), SessionError> {
    if session.phase != expected {
        return Err(SessionError::WrongPhase {
            expected,
            actual: session.phase,
        });
    }
    Ok(())
}
