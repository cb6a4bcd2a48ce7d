use crate::action::ActionTransition;
use crate::geometry;
use crate::state::{EntityId, Phase, Session};

use super::SessionError;
use super::validation::{ensure_entity, ensure_phase, ensure_turn_owner};

/// Melee attack against an adjacent, living entity.
///
/// Damage equals the attacker's strength, clamped so health never drops below
/// zero. There is no variance, armor or resistance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub attacker: EntityId,
    pub target: EntityId,
}

impl AttackAction {
    pub fn new(attacker: EntityId, target: EntityId) -> Self {
        Self { attacker, target }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AttackOutcome {
    pub target: EntityId,
    /// Health actually removed (may be less than strength near zero).
    pub damage: u32,
    pub remaining_health: u32,
    pub defeated: bool,
}

impl ActionTransition for AttackAction {
    type Error = SessionError;
    type Result = AttackOutcome;

    fn pre_validate(&self, session: &Session) -> Result<(), Self::Error> {
        let attacker = ensure_entity(session, self.attacker)?;
        let target = ensure_entity(session, self.target)?;
        ensure_turn_owner(session, self.attacker)?;
        ensure_phase(session, Phase::Moving)?;

        if self.attacker == self.target {
            return Err(SessionError::SelfTargetedAttack);
        }

        if !geometry::is_adjacent(attacker.position, target.position) {
            return Err(SessionError::TargetNotAdjacent {
                attacker: attacker.position,
                target: target.position,
            });
        }

        if !target.is_alive() {
            return Err(SessionError::TargetAlreadyDefeated {
                target: self.target,
            });
        }

        Ok(())
    }

    fn apply(&self, session: &mut Session) -> Result<Self::Result, Self::Error> {
        let strength = ensure_entity(session, self.attacker)?.strength;
        let target = session
            .entity_mut(self.target)
            .ok_or(SessionError::InvalidActor {
                actor: i64::from(self.target.0),
            })?;

        let damage = target.take_damage(strength);

        Ok(AttackOutcome {
            target: self.target,
            damage,
            remaining_health: target.health,
            defeated: !target.is_alive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::Position;

    /// Default session with entity 0 moved next to entity 1 and in `Moving`.
    fn engaged() -> Session {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        session.entities[0].teleport(Position::new(5, 4));
        session.phase = Phase::Moving;
        session
    }

    fn attack(session: &mut Session, attacker: u32, target: u32) -> Result<AttackOutcome, SessionError> {
        let action = AttackAction::new(EntityId(attacker), EntityId(target));
        action.pre_validate(session)?;
        action.apply(session)
    }

    #[test]
    fn damage_is_strength_and_clamps_at_zero() {
        let mut session = engaged();

        let first = attack(&mut session, 0, 1).unwrap();
        assert_eq!(first.damage, 5);
        assert_eq!(first.remaining_health, 5);
        assert!(!first.defeated);

        session.entities[0].strength = 7;
        let second = attack(&mut session, 0, 1).unwrap();
        assert_eq!(second.damage, 5);
        assert_eq!(second.remaining_health, 0);
        assert!(second.defeated);

        assert_eq!(session.phase, Phase::Moving);
        assert_eq!(session.turn_owner, EntityId(0));
    }

    #[test]
    fn defeated_targets_cannot_be_attacked() {
        let mut session = engaged();
        session.entities[1].health = 0;

        assert_eq!(
            attack(&mut session, 0, 1),
            Err(SessionError::TargetAlreadyDefeated {
                target: EntityId(1)
            })
        );
    }

    #[test]
    fn rejections_follow_check_order() {
        let mut session = engaged();

        assert_eq!(
            attack(&mut session, 0, 4),
            Err(SessionError::InvalidActor { actor: 4 })
        );
        assert_eq!(
            attack(&mut session, 2, 1),
            Err(SessionError::NotYourTurn {
                actor: EntityId(2),
                turn_owner: EntityId(0)
            })
        );
        assert_eq!(
            attack(&mut session, 0, 0),
            Err(SessionError::SelfTargetedAttack)
        );
        assert_eq!(
            attack(&mut session, 0, 2),
            Err(SessionError::TargetNotAdjacent {
                attacker: Position::new(5, 4),
                target: Position::new(3, 6)
            })
        );

        session.entities[2].health = 0;
        assert_eq!(
            attack(&mut session, 0, 2),
            Err(SessionError::TargetNotAdjacent {
                attacker: Position::new(5, 4),
                target: Position::new(3, 6)
            }),
            "adjacency is checked before liveness"
        );

        session.phase = Phase::Planning;
        assert_eq!(
            attack(&mut session, 0, 1),
            Err(SessionError::WrongPhase {
                expected: Phase::Moving,
                actual: Phase::Planning
            })
        );
        assert_eq!(session.entities[1].health, 10);
    }
}
