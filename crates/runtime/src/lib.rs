//! Asynchronous session runtime for the tactical game core.
//!
//! Every game lives in its own worker task that owns the authoritative
//! [`game_core::Session`]; callers talk to it through a cloneable
//! [`SessionHandle`] obtained from the [`SessionStore`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes handles, request/response records and [`dispatch`]
//! - [`store`] hosts the session registry
//! - [`events`] provides the per-session broadcast bus
//! - [`scenario`] loads named layouts from disk
//! - [`config`] reads runtime settings from the environment
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod events;
pub mod scenario;
pub mod store;

mod workers;

pub use api::{
    GameRequest, GameResponse, OperationResponse, Result, RuntimeError, SessionHandle, SessionId,
    SessionSnapshot, dispatch,
};
pub use config::RuntimeConfig;
pub use events::{EventBus, SessionEvent};
pub use scenario::{Scenario, ScenarioLibrary};
pub use store::SessionStore;
