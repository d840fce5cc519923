//! Concurrent stage runtime for a linear text-transformation pipeline.
//!
//! This crate is the hard part: a bounded producer-consumer handoff queue
//! (see [`queue::BoundedQueue`]), the per-stage worker that drains it
//! ([`stage::Stage`]), and the driver that wires an arbitrary chain of
//! stages together and tears it down in order ([`pipeline::Pipeline`]).
//!
//! What a stage actually does to a string — uppercase it, reverse it, log
//! it — is deliberately out of this crate. Callers supply a
//! [`stage::Transform`] implementation per stage; see `linepipe-stages` for
//! the concrete ones this workspace ships, and `linepipe-cli` for the
//! command-line front end that wires them together.
//!
//! # Example
//!
//! ```
//! use linepipe_core::{OutputSink, Pipeline, StageSpec, Transform};
//! use std::io::Cursor;
//! use std::sync::{Arc, Mutex};
//!
//! struct Shout;
//! impl Transform for Shout {
//!     fn apply(&mut self, input: &str) -> Option<String> {
//!         Some(input.to_uppercase())
//!     }
//! }
//!
//! let output: OutputSink = Arc::new(Mutex::new(Vec::new()));
//! let pipeline = Pipeline::build(
//!     vec![StageSpec { name: "shout".into(), queue_size: 4, transform: Box::new(Shout) }],
//!     Arc::clone(&output),
//! )
//! .unwrap();
//!
//! pipeline.run(Cursor::new(b"hi\n<END>\n" as &[u8]));
//!
//! let produced = String::from_utf8(output.lock().unwrap().clone()).unwrap();
//! assert_eq!(produced, "HI\nPipeline shutdown complete\n");
//! ```

mod diagnostics;
mod error;
mod latch;
mod pipeline;
mod queue;
mod stage;

pub use diagnostics::{is_verbose, log_error, log_info, set_verbose};
pub use error::{QueueError, StageError};
pub use latch::Latch;
pub use pipeline::{Pipeline, StageSpec};
pub use queue::BoundedQueue;
pub use stage::{OutputSink, Stage, Transform, SENTINEL};
