//! Session actions.
//!
//! Each action is a plain request record that implements [`ActionTransition`]:
//! all legality checks happen in `pre_validate` against the untouched session,
//! and `apply` commits only once validation has passed.
//!
//! # Module Structure
//!
//! - `error`: rejection taxonomy shared by every action
//! - `validation`: precondition helpers (actor range, turn owner, phase)
//! - `movement`: path submission during `Planning`
//! - `combat`: melee attacks during `Moving`
//! - `turn`: turn hand-off with dead-entity skipping
//! - `scenario`: administrative layout overlay

mod combat;
mod error;
mod movement;
mod scenario;
mod turn;
mod validation;

pub use combat::{AttackAction, AttackOutcome};
pub use error::SessionError;
pub use movement::{MoveAction, MoveOutcome};
pub use scenario::{ScenarioAction, ScenarioOutcome};
pub use turn::{EndTurnAction, TurnChange};

use crate::state::{EntityId, Session};

/// Defines how a concrete action variant mutates a session.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the session **before** mutation.
    fn pre_validate(&self, _session: &Session) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the session directly.
    ///
    /// Only called after `pre_validate` succeeded on the same session.
    fn apply(&self, session: &mut Session) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the session **after** mutation.
    fn post_validate(&self, _session: &Session) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum dispatched by [`crate::engine::SessionEngine::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Attack(AttackAction),
    EndTurn(EndTurnAction),
    /// Administrative override; not tied to any entity's turn.
    Scenario(ScenarioAction),
}

impl Action {
    /// Returns the entity performing this action, `None` for scenario overlays.
    pub fn actor(&self) -> Option<EntityId> {
        match self {
            Action::Move(action) => Some(action.actor),
            Action::Attack(action) => Some(action.attacker),
            Action::EndTurn(action) => Some(action.actor),
            Action::Scenario(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Attack(_) => "attack",
            Action::EndTurn(_) => "end_turn",
            Action::Scenario(_) => "scenario",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<AttackAction> for Action {
    fn from(action: AttackAction) -> Self {
        Self::Attack(action)
    }
}

impl From<EndTurnAction> for Action {
    fn from(action: EndTurnAction) -> Self {
        Self::EndTurn(action)
    }
}

impl From<ScenarioAction> for Action {
    fn from(action: ScenarioAction) -> Self {
        Self::Scenario(action)
    }
}

/// Action-specific result of a successful execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Move(MoveOutcome),
    Attack(AttackOutcome),
    EndTurn(TurnChange),
    Scenario(ScenarioOutcome),
}
