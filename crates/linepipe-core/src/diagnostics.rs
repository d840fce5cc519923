//! The `[ERROR]` / `[INFO]` diagnostic stream.
//!
//! The teacher workspace never pulls in `log` or `tracing`: every binary
//! writes plain `println!`/`eprintln!` lines. This module keeps that shape
//! while centralizing the two prefixes the pipeline's diagnostics contract
//! requires, plus a process-wide switch for whether `[INFO]` lines are
//! emitted at all.

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enables or disables `[INFO]` output. Disabled by default.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Returns whether `[INFO]` output is currently enabled.
#[must_use]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Writes one `[ERROR]`-prefixed line to standard error.
pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Writes one `[INFO]`-prefixed line to standard error, if enabled.
pub fn log_info(message: &str) {
    if is_verbose() {
        eprintln!("[INFO] {message}");
    }
}
