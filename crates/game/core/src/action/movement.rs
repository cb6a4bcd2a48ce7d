use crate::action::ActionTransition;
use crate::geometry;
use crate::state::{EntityId, Phase, Position, Session};

use super::SessionError;
use super::validation::{ensure_entity, ensure_phase, ensure_turn_owner};

/// Path submission for the current turn owner.
///
/// `path[0]` must be the actor's current cell; the actor ends on the last
/// cell and the whole path is kept for replay.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub path: Vec<Position>,
}

impl MoveAction {
    pub fn new(actor: EntityId, path: Vec<Position>) -> Self {
        Self { actor, path }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    pub steps: usize,
}

impl ActionTransition for MoveAction {
    type Error = SessionError;
    type Result = MoveOutcome;

    fn pre_validate(&self, session: &Session) -> Result<(), Self::Error> {
        let actor = ensure_entity(session, self.actor)?;
        ensure_turn_owner(session, self.actor)?;
        ensure_phase(session, Phase::Planning)?;

        let start = *self.path.first().ok_or(SessionError::EmptyPath)?;
        if start != actor.position {
            return Err(SessionError::PathNotContiguousWithPosition {
                start,
                position: actor.position,
            });
        }

        if let Some(step) = geometry::first_broken_step(&self.path) {
            return Err(SessionError::NonAdjacentStep { step });
        }

        Ok(())
    }

    fn apply(&self, session: &mut Session) -> Result<Self::Result, Self::Error> {
        let destination = *self.path.last().ok_or(SessionError::EmptyPath)?;
        let actor = session
            .entity_mut(self.actor)
            .ok_or(SessionError::InvalidActor {
                actor: i64::from(self.actor.0),
            })?;

        let from = actor.position;
        actor.position = destination;
        actor.last_path = self.path.clone();
        session.phase = Phase::Moving;

        Ok(MoveOutcome {
            from,
            to: destination,
            steps: self.path.len() - 1,
        })
    }

    fn post_validate(&self, session: &Session) -> Result<(), Self::Error> {
        debug_assert_eq!(session.phase, Phase::Moving);
        debug_assert_eq!(
            session.position(self.actor),
            self.path.last().copied(),
            "actor must stand on the last path cell"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn session() -> Session {
        Session::new(&GameConfig::default()).unwrap()
    }

    fn p(q: i32, r: i32) -> Position {
        Position::new(q, r)
    }

    fn check(session: &Session, actor: u32, path: Vec<Position>) -> Result<(), SessionError> {
        MoveAction::new(EntityId(actor), path).pre_validate(session)
    }

    #[test]
    fn accepts_contiguous_path_and_enters_moving() {
        let mut session = session();
        let action = MoveAction::new(EntityId(0), vec![p(4, 4), p(5, 4), p(6, 5)]);

        action.pre_validate(&session).unwrap();
        let outcome = action.apply(&mut session).unwrap();

        assert_eq!(outcome.from, p(4, 4));
        assert_eq!(outcome.to, p(6, 5));
        assert_eq!(outcome.steps, 2);
        assert_eq!(session.entities[0].position, p(6, 5));
        assert_eq!(session.entities[0].last_path, action.path);
        assert_eq!(session.phase, Phase::Moving);
        assert_eq!(session.turn_owner, EntityId(0));
    }

    #[test]
    fn single_cell_path_is_a_legal_stay() {
        let mut session = session();
        let action = MoveAction::new(EntityId(0), vec![p(4, 4)]);

        action.pre_validate(&session).unwrap();
        action.apply(&mut session).unwrap();

        assert_eq!(session.entities[0].position, p(4, 4));
        assert_eq!(session.phase, Phase::Moving);
    }

    #[test]
    fn rejections_follow_check_order() {
        let mut session = session();

        assert_eq!(
            check(&session, 9, vec![]),
            Err(SessionError::InvalidActor { actor: 9 })
        );
        assert_eq!(
            check(&session, 1, vec![]),
            Err(SessionError::NotYourTurn {
                actor: EntityId(1),
                turn_owner: EntityId(0)
            })
        );
        assert_eq!(check(&session, 0, vec![]), Err(SessionError::EmptyPath));
        assert_eq!(
            check(&session, 0, vec![p(1, 1), p(1, 2)]),
            Err(SessionError::PathNotContiguousWithPosition {
                start: p(1, 1),
                position: p(4, 4)
            })
        );
        assert_eq!(
            check(&session, 0, vec![p(4, 4), p(5, 5), p(7, 5)]),
            Err(SessionError::NonAdjacentStep { step: 2 })
        );

        session.phase = Phase::Moving;
        assert_eq!(
            check(&session, 0, vec![p(4, 4), p(5, 4)]),
            Err(SessionError::WrongPhase {
                expected: Phase::Planning,
                actual: Phase::Moving
            })
        );
    }
}
