//! Worker tasks that back the runtime orchestration.
//!
//! Each session is owned by exactly one [`SessionWorker`] task.

mod session;

pub use session::{Command, SessionWorker};
