//! Cloneable façade for issuing commands to one session.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for each
//! game operation plus event subscription.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{
    Action, AttackAction, EndTurnAction, EntityId, ExecutionOutcome, MoveAction, Position,
    ScenarioAction, Session,
};

use super::SessionId;
use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, SessionEvent};
use crate::workers::Command;

/// Client-facing handle to interact with a session worker
#[derive(Clone)]
pub struct SessionHandle {
    id: SessionId,
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(
        id: SessionId,
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            id,
            command_tx,
            event_bus,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Execute any action against the session.
    ///
    /// Rule rejections come back as [`RuntimeError::Rejected`].
    pub async fn execute(&self, action: Action) -> Result<ExecutionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Execute {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        let outcome = reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?;
        Ok(outcome?)
    }

    pub async fn submit_move(
        &self,
        actor: EntityId,
        path: Vec<Position>,
    ) -> Result<ExecutionOutcome> {
        self.execute(MoveAction::new(actor, path).into()).await
    }

    pub async fn submit_attack(
        &self,
        attacker: EntityId,
        target: EntityId,
    ) -> Result<ExecutionOutcome> {
        self.execute(AttackAction::new(attacker, target).into()).await
    }

    pub async fn end_turn(&self, actor: EntityId) -> Result<ExecutionOutcome> {
        self.execute(EndTurnAction::new(actor).into()).await
    }

    pub async fn apply_scenario(
        &self,
        map_label: Option<String>,
        positions: Option<Vec<Position>>,
    ) -> Result<ExecutionOutcome> {
        self.execute(ScenarioAction::new(map_label, positions).into())
            .await
    }

    /// Query the current session (read-only copy)
    pub async fn snapshot(&self) -> Result<Session> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to this session's events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe()
    }
}
