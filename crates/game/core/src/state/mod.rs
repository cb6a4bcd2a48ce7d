//! Authoritative session state representation.
//!
//! This module owns the data structures that describe entity slots, turn
//! ownership and the active map. Runtime layers clone or query this state but
//! mutate it exclusively through the engine.
mod common;
mod entity;
mod session;

pub use common::{EntityId, Position};
pub use entity::EntitySlot;
pub use session::{Outcome, Phase, Session};
