//! Turn rotation and action execution pipeline.
//!
//! The [`SessionEngine`] is the authoritative reducer for one [`Session`].
//! Every mutation flows through [`SessionEngine::execute`], which runs the
//! action's `pre_validate → apply → post_validate` pipeline. A rejected
//! action never reaches `apply`, so the session is untouched on failure.

mod transition;
mod turns;

pub use turns::next_alive_owner;

use crate::action::{
    Action, ActionResult, AttackAction, AttackOutcome, EndTurnAction, MoveAction, MoveOutcome,
    ScenarioAction, ScenarioOutcome, SessionError, TurnChange,
};
use crate::state::{EntityId, Outcome, Position, Session};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExecutionOutcome {
    /// Action-specific execution result.
    pub action_result: ActionResult,
    /// Game status right after the action.
    pub outcome: Outcome,
}

/// Session engine that validates and applies actions against one session.
///
/// The engine borrows the session mutably for its lifetime; callers that need
/// concurrent access serialize at a higher level (one owner per session).
pub struct SessionEngine<'a> {
    session: &'a mut Session,
}

impl<'a> SessionEngine<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &*self.session
    }

    /// Executes an action by routing it through the transition pipeline.
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, SessionError> {
        let action_result = transition::execute_transition(action, self.session)?;

        debug_assert!(
            self.session.holds_invariants(),
            "session invariants violated after {}",
            action.as_str()
        );

        Ok(ExecutionOutcome {
            action_result,
            outcome: self.session.outcome(),
        })
    }

    /// Submits a movement path for `actor` during `Planning`.
    pub fn submit_move(
        &mut self,
        actor: EntityId,
        path: Vec<Position>,
    ) -> Result<MoveOutcome, SessionError> {
        transition::drive(&MoveAction::new(actor, path), self.session)
    }

    /// Resolves a melee attack during `Moving`.
    pub fn submit_attack(
        &mut self,
        attacker: EntityId,
        target: EntityId,
    ) -> Result<AttackOutcome, SessionError> {
        transition::drive(&AttackAction::new(attacker, target), self.session)
    }

    /// Ends `actor`'s turn and hands ownership to the next living entity.
    pub fn end_turn(&mut self, actor: EntityId) -> Result<TurnChange, SessionError> {
        transition::drive(&EndTurnAction::new(actor), self.session)
    }

    /// Overlays a scenario layout. Never rejected.
    pub fn apply_scenario(
        &mut self,
        map_label: Option<String>,
        positions: Option<Vec<Position>>,
    ) -> ScenarioOutcome {
        match transition::drive(&ScenarioAction::new(map_label, positions), self.session) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }
}
