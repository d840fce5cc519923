//! Per-stage worker thread and the lifecycle each stage exposes to the
//! [`crate::pipeline::Pipeline`] driver.

use crate::diagnostics::log_error;
use crate::error::StageError;
use crate::queue::BoundedQueue;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// The distinguished item that flows in-band through the pipeline and tells
/// every stage, one after another, to finish and exit.
pub const SENTINEL: &str = "<END>";

/// A one-input, zero-or-one-output text transform.
///
/// Implementations live in the stage registry, not in this crate; the
/// runtime only needs to call `apply` and does not care what it does to the
/// string. Returning `None` signals a per-item failure (the source models
/// this as an allocation failure returning a null pointer); the worker logs
/// it and moves on to the next item rather than treating it as fatal.
///
/// `apply` takes `&mut self` because a transform may carry private,
/// per-instance state (see [`crate::Stage::new`]'s note on aliasing); it
/// never needs to be `Sync` because only the owning worker thread ever
/// calls it.
pub trait Transform: Send {
    /// Produces the output for one input line, or `None` on failure.
    fn apply(&mut self, input: &str) -> Option<String>;

    /// A short display name used in diagnostics. Defaults to `"stage"`.
    fn name(&self) -> &str {
        "stage"
    }
}

/// The downstream hook a stage calls with each item it produces: the next
/// stage's [`Stage::place_work`], or nothing for the terminal stage.
type Downstream = Box<dyn Fn(String) -> Result<(), StageError> + Send + Sync>;

/// Where the terminal stage's output goes. Wrapped so tests can supply an
/// in-memory buffer instead of real standard output.
pub type OutputSink = Arc<Mutex<dyn Write + Send>>;

/// A single stage in the pipeline: its queue, its dedicated worker thread,
/// and the lifecycle flags the driver inspects.
pub struct Stage {
    name: String,
    queue: Arc<BoundedQueue>,
    downstream: Mutex<Option<Downstream>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    finished: crate::latch::Latch,
    closed: AtomicBool,
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("queue_len", &self.queue.len())
            .field("closed", &self.closed.load(Ordering::Acquire))
            .finish()
    }
}

impl Stage {
    /// Constructs a stage and spawns its worker thread.
    ///
    /// This merges the source design's separate `init` step into
    /// construction: a `Stage` is never observable in an uninitialized
    /// state, so `Arc<Stage>` alone carries the `RUNNING` state from
    /// §4.4 of the design. A non-positive `queue_size` fails as
    /// [`StageError::Queue`]; the OS refusing to spawn the worker thread
    /// fails as [`StageError::SpawnFailed`]. Either way the caller gets
    /// back an error instead of a panic, so [`crate::pipeline::Pipeline::build`]
    /// can clean up any stages already built before this one.
    ///
    /// `output` receives whatever this stage produces when it turns out to
    /// be the terminal stage (no [`Stage::attach`] call, or `attach(None)`).
    /// Every stage is given one regardless of position, since only the
    /// stage the driver never attaches a downstream to will ever use it.
    pub fn new(
        name: impl Into<String>,
        queue_size: usize,
        mut transform: Box<dyn Transform>,
        output: OutputSink,
    ) -> Result<Arc<Self>, StageError> {
        let name = name.into();
        let queue = Arc::new(
            BoundedQueue::new(queue_size).map_err(|e| StageError::Queue(name.clone(), e))?,
        );

        let stage = Arc::new(Self {
            name: name.clone(),
            queue,
            downstream: Mutex::new(None),
            worker: Mutex::new(None),
            finished: crate::latch::Latch::new(),
            closed: AtomicBool::new(false),
        });

        let worker_stage = Arc::clone(&stage);
        let handle = thread::Builder::new()
            .name(format!("stage-{name}"))
            .spawn(move || worker_stage.run(transform.as_mut(), output))
            .map_err(|e| StageError::SpawnFailed(name.clone(), e.to_string()))?;

        *stage.worker.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);
        Ok(stage)
    }

    /// Installs the downstream hook, or `None` to mark this stage terminal.
    ///
    /// Must be called at most once, after construction and before the
    /// worker observes the sentinel.
    pub fn attach(&self, downstream: Option<Downstream>) {
        *self.downstream.lock().unwrap_or_else(|e| e.into_inner()) = downstream;
    }

    /// Enqueues a copy of `item`, blocking while the queue is full.
    ///
    /// If `item` is the sentinel, this also signals the queue's `finished`
    /// latch and permanently closes this stage to further `place_work`
    /// calls.
    pub fn place_work(&self, item: String) -> Result<(), StageError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StageError::NotRunning(self.name.clone()));
        }
        let is_sentinel = item == SENTINEL;
        if is_sentinel {
            self.closed.store(true, Ordering::Release);
        }
        self.queue.put(item);
        if is_sentinel {
            self.queue.signal_finished();
        }
        Ok(())
    }

    /// Blocks until the queue has signaled finished and the worker has set
    /// its own `finished` flag.
    pub fn wait_finished(&self) {
        self.queue.wait_finished();
        self.finished.wait();
    }

    /// Idempotent shutdown: ensures the queue is marked finished, then joins
    /// the worker thread.
    pub fn fini(&self) {
        self.closed.store(true, Ordering::Release);
        self.queue.signal_finished();
        let handle = self
            .worker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                log_error(&format!("stage '{}': worker thread panicked", self.name));
            }
        }
    }

    /// The display name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The worker loop: drain the queue until the sentinel or shutdown,
    /// forwarding transformed items downstream (or to `output` if this is
    /// the terminal stage), then set `finished` as the very last action.
    fn run(&self, transform: &mut dyn Transform, output: OutputSink) {
        loop {
            let Some(item) = self.queue.get() else {
                break;
            };

            if item == SENTINEL {
                let downstream = self.downstream.lock().unwrap_or_else(|e| e.into_inner());
                if let Some(downstream) = downstream.as_ref() {
                    if let Err(err) = downstream(SENTINEL.to_string()) {
                        log_error(&format!(
                            "stage '{}': failed to forward sentinel downstream: {err}",
                            self.name
                        ));
                    }
                }
                break;
            }

            let Some(out) = transform.apply(&item) else {
                log_error(&format!(
                    "stage '{}': transform produced no output for a line, dropping it",
                    self.name
                ));
                continue;
            };

            let downstream = self.downstream.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(downstream) = downstream.as_ref() {
                if let Err(err) = downstream(out) {
                    log_error(&format!(
                        "stage '{}': downstream rejected an item: {err}",
                        self.name
                    ));
                }
            } else {
                drop(downstream);
                let mut sink = output.lock().unwrap_or_else(|e| e.into_inner());
                if writeln!(sink, "{out}").is_err() {
                    log_error(&format!(
                        "stage '{}': failed to write output line",
                        self.name
                    ));
                }
            }
        }
        self.finished.signal();
    }
}
