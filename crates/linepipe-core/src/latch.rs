//! Single-shot, manually-resettable condition.
//!
//! # Wait Discipline
//!
//! A [`Latch`] pairs a boolean flag with a [`Condvar`] instead of relying on
//! the condition variable alone. The flag is what makes "signal before wait"
//! safe: `wait` checks the flag under the mutex before it ever sleeps, so a
//! signal that happens to land before the corresponding wait is never lost.
//! `Condvar::wait_while` already loops on spurious wakeups, so callers never
//! see a wakeup with the flag still false.
//!
//! `signal` wakes one waiter (`notify_one`); callers that need every blocked
//! thread to re-check the predicate call [`Latch::broadcast`] instead. The
//! [`crate::queue::BoundedQueue`] uses `broadcast` on its `not_empty` latch
//! when shutting down, since any number of consumers could be parked there.

use std::sync::{Condvar, Mutex};

/// A boolean condition that can be waited on, signaled, and reset.
#[derive(Debug, Default)]
pub struct Latch {
    signaled: Mutex<bool>,
    condvar: Condvar,
}

impl Latch {
    /// Creates a new, unsignaled latch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            signaled: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Creates a latch that starts out signaled.
    #[must_use]
    pub fn new_signaled() -> Self {
        Self {
            signaled: Mutex::new(true),
            condvar: Condvar::new(),
        }
    }

    /// Sets the flag and wakes one waiter.
    pub fn signal(&self) {
        let mut signaled = self.signaled.lock().unwrap_or_else(|e| e.into_inner());
        *signaled = true;
        self.condvar.notify_one();
    }

    /// Sets the flag and wakes every waiter.
    ///
    /// Used when more than one thread may be blocked on the same latch and
    /// all of them need to re-evaluate their predicate, not just one.
    pub fn broadcast(&self) {
        let mut signaled = self.signaled.lock().unwrap_or_else(|e| e.into_inner());
        *signaled = true;
        self.condvar.notify_all();
    }

    /// Clears the flag. Wakes nobody.
    pub fn reset(&self) {
        let mut signaled = self.signaled.lock().unwrap_or_else(|e| e.into_inner());
        *signaled = false;
    }

    /// Blocks until the flag is observed true.
    ///
    /// Returns immediately if the flag was already set before this call.
    pub fn wait(&self) {
        let guard = self.signaled.lock().unwrap_or_else(|e| e.into_inner());
        let _guard = self
            .condvar
            .wait_while(guard, |signaled| !*signaled)
            .unwrap_or_else(|e| e.into_inner());
    }

    /// Returns the current value of the flag without blocking.
    pub fn is_signaled(&self) -> bool {
        *self.signaled.lock().unwrap_or_else(|e| e.into_inner())
    }
}
