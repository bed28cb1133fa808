//! Named background task with an explicit stopped/running state machine.

use crate::error::{TaskError, TaskResult};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Stop signals buffered per task; stop never blocks on a slow loop body.
const STOP_BUFFER: usize = 2;

/// Future returned by a task loop body.
pub type LoopFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

type LoopFn = Box<dyn FnMut(StopSignal) -> LoopFuture + Send>;

/// Anything that can be started and stopped as a background unit.
pub trait Tasker {
    fn start(&self) -> TaskResult<()>;
    fn stop(&self) -> TaskResult<()>;
}

/// Cooperative stop signal handed to the loop body on each start.
///
/// The body decides when to observe it; [`Task::stop`] only posts the
/// signal and returns.
pub struct StopSignal {
    rx: mpsc::Receiver<()>,
}

impl StopSignal {
    /// Resolve once a stop has been posted or the owning task was dropped.
    pub async fn stopped(&mut self) {
        let _ = self.rx.recv().await;
    }

    /// Non-blocking check for a pending stop.
    pub fn should_stop(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Disconnected) => true,
            Err(TryRecvError::Empty) => false,
        }
    }
}

/// A named background task wrapping a caller-supplied async loop body.
///
/// One exclusive lock serializes start/stop calls against each other and
/// against the status flags. The loop body runs as an independent spawned
/// future with no synchronization beyond the stop signal; any shared state
/// it touches is the caller's responsibility to protect.
pub struct Task {
    /// Name of the task, for logging purposes.
    name: String,
    inner: Mutex<Inner>,
}

struct Inner {
    initialized: bool,
    running: bool,
    stop_tx: Option<mpsc::Sender<()>>,
    body: Option<LoopFn>,
}

impl Task {
    /// Create a stopped, uninitialized task.
    pub fn new(name: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            inner: Mutex::new(Inner {
                initialized: false,
                running: false,
                stop_tx: None,
                body: None,
            }),
        }
    }

    /// Install the loop body.
    ///
    /// The closure is invoked on every start with a fresh [`StopSignal`],
    /// so a stopped task can be started again.
    pub fn set_loop<F>(&self, body: F)
    where
        F: FnMut(StopSignal) -> LoopFuture + Send + 'static,
    {
        self.inner.lock().unwrap().body = Some(Box::new(body));
    }

    /// Mark the task ready to start. Owners call this once their own setup
    /// is complete.
    pub fn mark_initialized(&self) {
        self.inner.lock().unwrap().initialized = true;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn running(&self) -> bool {
        self.inner.lock().unwrap().running
    }

    /// Spawn the loop body and mark the task running.
    ///
    /// Fire-and-forget: returns as soon as the body is spawned, without
    /// waiting for it. Must be called from within a tokio runtime.
    pub fn start(&self) -> TaskResult<()> {
        let mut inner = self.inner.lock().unwrap();

        if inner.running {
            return Err(TaskError::AlreadyRunning);
        }
        if !inner.initialized {
            return Err(TaskError::NotInitialized);
        }
        let Some(body) = inner.body.as_mut() else {
            return Err(TaskError::NoLoop);
        };

        let (tx, rx) = mpsc::channel(STOP_BUFFER);
        let fut = body(StopSignal { rx });
        inner.stop_tx = Some(tx);
        inner.running = true;

        log::info!("starting task {}", self.name);
        tokio::spawn(fut);
        Ok(())
    }

    /// Post one stop signal and mark the task stopped.
    ///
    /// Does not wait for the loop body to observe the signal and exit; a
    /// full signal buffer is not an error.
    pub fn stop(&self) -> TaskResult<()> {
        let mut inner = self.inner.lock().unwrap();

        if !inner.running {
            return Err(TaskError::NotRunning);
        }

        log::info!("stopping task {}", self.name);
        if let Some(tx) = &inner.stop_tx {
            let _ = tx.try_send(());
        }
        inner.running = false;
        Ok(())
    }
}

impl Tasker for Task {
    fn start(&self) -> TaskResult<()> {
        Task::start(self)
    }

    fn stop(&self) -> TaskResult<()> {
        Task::stop(self)
    }
}

#[cfg(test)]
#[path = "task_test.rs"]
mod tests;
