//! plinth-task - minimal start/stop wrapper for background work.
//!
//! A [`Task`] owns a two-state machine (stopped/running), a buffered stop
//! channel, and a caller-supplied async loop body that it spawns
//! fire-and-forget on start. Cooperative exit is the loop body's
//! responsibility: it must observe its [`StopSignal`].

pub mod error;
pub mod task;

pub use error::{TaskError, TaskResult};
pub use task::{LoopFuture, StopSignal, Task, Tasker};
