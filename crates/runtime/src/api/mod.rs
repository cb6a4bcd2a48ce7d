//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! transports can stay focused on framing and I/O.

pub mod dispatch;
pub mod errors;
pub mod handle;
pub mod messages;
mod session_id;

pub use dispatch::{GameRequest, GameResponse, dispatch};
pub use errors::{Result, RuntimeError};
pub use handle::SessionHandle;
pub use messages::{
    AttackRequest, EndTurnRequest, EntitySnapshot, MoveRequest, OperationResponse,
    ScenarioRequest, SessionSnapshot,
};
pub use session_id::SessionId;
