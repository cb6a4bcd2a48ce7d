//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition, SessionError};
use crate::state::Session;

/// Runs a transition through the three-phase pipeline and returns its result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the session and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
pub(super) fn drive<T>(transition: &T, session: &mut Session) -> Result<T::Result, T::Error>
where
    T: ActionTransition,
{
    transition.pre_validate(session)?;
    let result = transition.apply(session)?;
    transition.post_validate(session)?;
    Ok(result)
}

/// Routes each action type to its transition and wraps the result in
/// [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    session: &mut Session,
) -> Result<ActionResult, SessionError> {
    match action {
        Action::Move(transition) => drive(transition, session).map(ActionResult::Move),
        Action::Attack(transition) => drive(transition, session).map(ActionResult::Attack),
        Action::EndTurn(transition) => drive(transition, session).map(ActionResult::EndTurn),
        Action::Scenario(transition) => match drive(transition, session) {
            Ok(outcome) => Ok(ActionResult::Scenario(outcome)),
            Err(never) => match never {},
        },
    }
}
