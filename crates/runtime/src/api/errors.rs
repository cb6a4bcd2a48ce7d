//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule rejections, registry misses, worker coordination failures and
//! scenario loading problems so transports can map them consistently.
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ConfigError, SessionError};

use super::SessionId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("game {id} not found")]
    SessionNotFound { id: SessionId },

    /// The session rules refused the request; the session is unchanged.
    #[error(transparent)]
    Rejected(#[from] SessionError),

    #[error("invalid game configuration")]
    InvalidConfig(#[from] ConfigError),

    #[error("scenario '{name}' not found")]
    ScenarioNotFound { name: String },

    #[error("failed to load scenario {}: {reason}", path.display())]
    InvalidScenario { path: PathBuf, reason: String },

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),
}

impl RuntimeError {
    /// Returns the rule rejection, if this error is one.
    pub fn as_rejection(&self) -> Option<&SessionError> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }
}
