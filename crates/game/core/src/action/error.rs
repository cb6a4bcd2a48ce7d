//! Rule rejections.
//!
//! Every variant is a rejection of a well-typed request, never a fault: the
//! session is left exactly as it was before the call.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Phase, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum SessionError {
    #[error("invalid actor {actor}")]
    InvalidActor { actor: i64 },

    #[error("not your turn: {actor} acted while {turn_owner} owns the turn")]
    NotYourTurn {
        actor: EntityId,
        turn_owner: EntityId,
    },

    #[error("wrong phase: requires {expected}, session is {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("empty path")]
    EmptyPath,

    #[error("path must start from current position {position}, got {start}")]
    PathNotContiguousWithPosition { start: Position, position: Position },

    #[error("invalid path: step {step} is not adjacent to the previous cell")]
    NonAdjacentStep { step: usize },

    #[error("an entity cannot attack itself")]
    SelfTargetedAttack,

    #[error("target at {target} is not adjacent to attacker at {attacker}")]
    TargetNotAdjacent { attacker: Position, target: Position },

    #[error("target {target} is already defeated")]
    TargetAlreadyDefeated { target: EntityId },

    #[error("game over: no other entity is alive to take the turn")]
    NoAliveEntities,
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        use SessionError::*;
        match self {
            InvalidActor { .. }
            | EmptyPath
            | PathNotContiguousWithPosition { .. }
            | NonAdjacentStep { .. }
            | SelfTargetedAttack => ErrorSeverity::Validation,
            NotYourTurn { .. }
            | WrongPhase { .. }
            | TargetNotAdjacent { .. }
            | TargetAlreadyDefeated { .. } => ErrorSeverity::Recoverable,
            NoAliveEntities => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use SessionError::*;
        match self {
            InvalidActor { .. } => "INVALID_ACTOR",
            NotYourTurn { .. } => "NOT_YOUR_TURN",
            WrongPhase { .. } => "WRONG_PHASE",
            EmptyPath => "EMPTY_PATH",
            PathNotContiguousWithPosition { .. } => "PATH_NOT_CONTIGUOUS_WITH_POSITION",
            NonAdjacentStep { .. } => "NON_ADJACENT_STEP",
            SelfTargetedAttack => "SELF_TARGETED_ATTACK",
            TargetNotAdjacent { .. } => "TARGET_NOT_ADJACENT",
            TargetAlreadyDefeated { .. } => "TARGET_ALREADY_DEFEATED",
            NoAliveEntities => "NO_ALIVE_ENTITIES",
        }
    }
}
