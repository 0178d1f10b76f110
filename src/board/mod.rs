//! Task store - the board's single source of truth
//!
//! All mutation goes through [`TaskStore`]; the TUI only reflects what the
//! store holds. "Now" is passed into every time-dependent operation so the
//! logic runs identically under test without a real clock.

mod error;
mod export;
mod store;
mod task;

pub use error::{BoardError, Result};
pub use store::{Statistics, TaskStore};
pub use task::{Priority, Status, Task, TaskDraft};
