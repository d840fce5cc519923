//! Error types for the pipeline runtime.

use thiserror::Error;

/// Errors raised by [`crate::queue::BoundedQueue`].
///
/// The source design also rejects a null item passed to `put`; that check has
/// no counterpart here because `String` has no null representation, so the
/// type system already rules it out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// `capacity` passed to [`crate::queue::BoundedQueue::new`] was not positive.
    #[error("queue capacity must be positive, got {0}")]
    NonPositiveCapacity(i64),
}

/// Errors raised by [`crate::stage::Stage`] lifecycle operations.
///
/// The source design also has a distinct "already initialized" error for a
/// second `init` call; there is no counterpart here because
/// [`crate::Stage::new`] folds construction and initialization into one
/// fallible step, so a `Stage` value is never observable in a state where
/// re-initializing it would even type-check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StageError {
    /// `place_work` was called after the stage stopped accepting work (the
    /// sentinel was already submitted, or `fini` was already called).
    #[error("stage '{0}' is not accepting work")]
    NotRunning(String),
    /// Construction received a non-positive queue size.
    #[error("stage '{0}': {1}")]
    Queue(String, QueueError),
    /// The OS refused to spawn the stage's worker thread.
    #[error("stage '{0}': failed to spawn worker thread: {1}")]
    SpawnFailed(String, String),
}
