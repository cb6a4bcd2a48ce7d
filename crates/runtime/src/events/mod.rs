//! Session event stream.
//!
//! Every accepted or rejected action is published on the owning session's bus
//! so observers (spectators, replay recorders) can follow a game without
//! polling snapshots.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::SessionEvent;
