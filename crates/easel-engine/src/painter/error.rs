use std::fmt;

use crate::canvas::CanvasError;

/// Misuse of the event loop, or a failure to bring it up.
///
/// None of these leave the loop in a broken state: a rejected `post` does not
/// touch the queue, and a failed `start` leaves the loop not running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopError {
    /// The loop was never started, or has been stopped.
    NotRunning,
    /// The posted operation has nothing to apply.
    EmptyOperation,
    /// The canvas factory could not allocate a buffer.
    Canvas(CanvasError),
    /// The worker thread could not be spawned.
    Spawn(String),
    /// The worker panicked; operations still queued were discarded.
    WorkerPanicked,
    /// `stop_and_wait` was called from inside an operation; the worker cannot wait for itself.
    OnWorkerThread,
}

impl fmt::Display for LoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopError::NotRunning => f.write_str("event loop is not running"),
            LoopError::EmptyOperation => f.write_str("operation is empty"),
            LoopError::Canvas(err) => write!(f, "cannot allocate canvas: {err}"),
            LoopError::Spawn(msg) => write!(f, "cannot spawn event loop worker: {msg}"),
            LoopError::WorkerPanicked => f.write_str("event loop worker panicked"),
            LoopError::OnWorkerThread => {
                f.write_str("cannot stop the event loop from its own worker thread")
            }
        }
    }
}

impl std::error::Error for LoopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoopError::Canvas(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CanvasError> for LoopError {
    fn from(err: CanvasError) -> Self {
        LoopError::Canvas(err)
    }
}
