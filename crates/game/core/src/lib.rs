//! Deterministic session rules for the hex-grid tactical game.
//!
//! `game-core` defines the canonical rules (geometry, actions, turn rotation)
//! and exposes pure, synchronous APIs over a single [`Session`] value. It owns
//! no registry and performs no I/O; the runtime crate serializes access and
//! the transport encodes results. All session mutation flows through
//! [`engine::SessionEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod state;

pub use action::{
    Action, ActionResult, ActionTransition, AttackAction, AttackOutcome, EndTurnAction,
    MoveAction, MoveOutcome, ScenarioAction, ScenarioOutcome, SessionError, TurnChange,
};
pub use config::{ConfigError, GameConfig};
pub use engine::{ExecutionOutcome, SessionEngine, next_alive_owner};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{is_adjacent, validate_path};
pub use state::{EntityId, EntitySlot, Outcome, Phase, Position, Session};
