//! Session worker that owns one authoritative [`game_core::Session`].
//!
//! Receives commands from [`crate::SessionHandle`], executes actions via
//! [`game_core::SessionEngine`], and publishes events to the session's
//! [`EventBus`]. Commands are processed one at a time, which serializes every
//! read-modify-write against the session.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use game_core::{
    Action, ActionResult, ExecutionOutcome, GameError, Outcome, Session, SessionEngine,
    SessionError,
};

use crate::api::SessionId;
use crate::events::{EventBus, SessionEvent};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Validate and apply an action.
    Execute {
        action: Action,
        reply: oneshot::Sender<Result<ExecutionOutcome, SessionError>>,
    },
    /// Read a copy of the current session.
    Snapshot { reply: oneshot::Sender<Session> },
}

/// Background task that processes one session's commands.
pub struct SessionWorker {
    id: SessionId,
    session: Session,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub fn new(
        id: SessionId,
        session: Session,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        debug!(
            session = %id,
            entities = session.entity_count(),
            map = %session.map_label,
            "session worker initialized"
        );

        Self {
            id,
            session,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        info!(session = %self.id, "session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { action, reply } => {
                let result = self.execute(&action);
                if reply.send(result).is_err() {
                    debug!(session = %self.id, "Execute reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                if reply.send(self.session.clone()).is_err() {
                    debug!(session = %self.id, "Snapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, SessionError> {
        let outcome_before = self.session.outcome();
        let mut engine = SessionEngine::new(&mut self.session);

        match engine.execute(action) {
            Ok(executed) => {
                debug!(
                    session = %self.id,
                    action = action.as_str(),
                    actor = ?action.actor(),
                    "action applied"
                );
                self.publish_result(action, &executed);

                if executed.outcome != outcome_before && executed.outcome != Outcome::InProgress {
                    info!(session = %self.id, outcome = ?executed.outcome, "game decided");
                    self.event_bus.publish(SessionEvent::GameOver {
                        outcome: executed.outcome,
                    });
                }
                Ok(executed)
            }
            Err(error) => {
                debug!(
                    session = %self.id,
                    action = action.as_str(),
                    actor = ?action.actor(),
                    severity = error.severity().as_str(),
                    code = error.error_code(),
                    %error,
                    "action rejected"
                );
                self.event_bus.publish(SessionEvent::ActionRejected {
                    action: action.as_str().to_string(),
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    fn publish_result(&self, action: &Action, executed: &ExecutionOutcome) {
        let event = match (&executed.action_result, action) {
            (ActionResult::Move(_), Action::Move(request)) => SessionEvent::MoveAccepted {
                actor: request.actor,
                path: request.path.clone(),
            },
            (ActionResult::Attack(outcome), Action::Attack(request)) => {
                SessionEvent::AttackResolved {
                    attacker: request.attacker,
                    outcome: *outcome,
                }
            }
            (ActionResult::EndTurn(change), _) => SessionEvent::TurnEnded(*change),
            (ActionResult::Scenario(outcome), _) => SessionEvent::ScenarioApplied {
                map_label: self.session.map_label.clone(),
                outcome: *outcome,
            },
            _ => return,
        };
        self.event_bus.publish(event);
    }
}
