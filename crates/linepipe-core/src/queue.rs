//! Bounded, blocking handoff queue between one producer and one consumer.
//!
//! # Locking & Wait Discipline
//!
//! A [`BoundedQueue`] is a ring buffer guarded by one [`Mutex`] plus three
//! [`Latch`]es: `not_full`, `not_empty`, and `finished`. The ring mutex is the
//! only lock ever held across a wait; the latches each carry their own
//! internal mutex and are only ever touched for the instant it takes to flip
//! a flag, never while the ring mutex is also held.
//!
//! ## Why a separate latch per condition instead of one `Condvar`
//!
//! `not_full` and `not_empty` could share a single `Condvar` tied to the ring
//! mutex, and an earlier draft did exactly that. The three-latch split earns
//! its keep for one reason: `finished` needs to broadcast-wake every blocked
//! consumer the instant shutdown is requested, without the producer or
//! consumer ever having to guess which condition they should be listening on.
//! Splitting them into independent latches makes that a call to
//! [`Latch::broadcast`] on `not_empty` with no risk of waking a producer that
//! was waiting on an unrelated predicate.
//!
//! ## The put-side race
//!
//! `put` cannot simply wait on `not_full` and then write: between the latch
//! releasing the waiter and that waiter reacquiring the ring mutex, another
//! producer could have filled the last slot. `put` re-checks `count <
//! capacity` under the mutex after every wake and loops back to waiting on
//! `not_full` if it lost the race, rather than trusting the wakeup alone.
//! `get` applies the same discipline against `not_empty`.

use crate::error::QueueError;
use crate::latch::Latch;
use std::sync::Mutex;

struct RingState {
    buffer: Vec<Option<String>>,
    head: usize,
    tail: usize,
    count: usize,
}

/// A fixed-capacity FIFO of owned [`String`]s shared by one producer and one
/// consumer thread.
pub struct BoundedQueue {
    capacity: usize,
    state: Mutex<RingState>,
    not_full: Latch,
    not_empty: Latch,
    finished: Latch,
}

impl BoundedQueue {
    /// Creates an empty queue with room for `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::NonPositiveCapacity`] if `capacity` is `0`.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::NonPositiveCapacity(0));
        }
        Ok(Self {
            capacity,
            state: Mutex::new(RingState {
                buffer: (0..capacity).map(|_| None).collect(),
                head: 0,
                tail: 0,
                count: 0,
            }),
            not_full: Latch::new_signaled(),
            not_empty: Latch::new(),
            finished: Latch::new(),
        })
    }

    /// The number of items currently queued. For diagnostics and tests only;
    /// the result is stale the instant the lock is released.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).count
    }

    /// Blocks until there is room, then enqueues `item`.
    pub fn put(&self, item: String) {
        loop {
            self.not_full.wait();
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if state.count < self.capacity {
                let tail = state.tail;
                state.buffer[tail] = Some(item);
                state.tail = (tail + 1) % self.capacity;
                state.count += 1;
                let now_full = state.count == self.capacity;
                drop(state);
                if now_full {
                    self.not_full.reset();
                } else {
                    self.not_full.signal();
                }
                self.not_empty.signal();
                return;
            }
            // Lost the race: another producer claimed the last slot between
            // our wakeup and acquiring the mutex. `not_full` must already be
            // reset by whoever did that, so loop back and wait again.
            drop(state);
        }
    }

    /// Blocks until an item is available or the queue has drained after
    /// [`BoundedQueue::signal_finished`]. Returns `None` only in the latter
    /// case.
    pub fn get(&self) -> Option<String> {
        loop {
            self.not_empty.wait();
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if state.count > 0 {
                let head = state.head;
                let item = state.buffer[head].take();
                state.head = (head + 1) % self.capacity;
                state.count -= 1;
                let now_empty = state.count == 0;
                drop(state);
                if now_empty {
                    self.not_empty.reset();
                } else {
                    self.not_empty.signal();
                }
                self.not_full.signal();
                return item;
            }
            // Empty. Either this was a broadcast wake from signal_finished
            // (check below) or a spurious wake with nothing enqueued yet.
            if self.finished.is_signaled() {
                return None;
            }
            drop(state);
        }
    }

    /// Marks the queue as finished: no more items will ever be enqueued.
    /// Wakes every consumer blocked in [`BoundedQueue::get`] so each can
    /// re-check the empty-and-finished predicate.
    ///
    /// Idempotent: calling this more than once has the same effect as
    /// calling it once.
    pub fn signal_finished(&self) {
        self.finished.signal();
        self.not_empty.broadcast();
    }

    /// Blocks until [`BoundedQueue::signal_finished`] has been called.
    pub fn wait_finished(&self) {
        self.finished.wait();
    }
}
