//! Error types for plinth-task.

use thiserror::Error;

/// Task lifecycle errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TaskError {
    /// Start was called while the task is running (T001).
    #[error("[T001] background task already running")]
    AlreadyRunning,

    /// Start was called before the task was marked initialized (T002).
    #[error("[T002] task not initialized properly")]
    NotInitialized,

    /// Start was called with no loop body installed (T003).
    #[error("[T003] no loop function defined")]
    NoLoop,

    /// Stop was called while the task is not running (T004).
    #[error("[T004] background task not running")]
    NotRunning,
}

/// Result type alias for [`TaskError`].
pub type TaskResult<T> = Result<T, TaskError>;
