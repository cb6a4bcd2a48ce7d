//! Events published by a session worker.

use serde::{Deserialize, Serialize};

use game_core::{
    AttackOutcome, EntityId, Outcome, Position, ScenarioOutcome, SessionError, TurnChange,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SessionEvent {
    /// A path was accepted; clients replay `path` to animate the move.
    MoveAccepted {
        actor: EntityId,
        path: Vec<Position>,
    },

    AttackResolved {
        attacker: EntityId,
        outcome: AttackOutcome,
    },

    TurnEnded(TurnChange),

    ScenarioApplied {
        map_label: String,
        outcome: ScenarioOutcome,
    },

    /// A request was refused; the session did not change.
    ActionRejected {
        action: String,
        error: SessionError,
    },

    /// The set of surviving entities no longer allows play to continue.
    GameOver { outcome: Outcome },
}
