//! Concrete text transforms for `linepipe`, and the registry that hands out
//! fresh instances of them by name.
//!
//! Everything in this crate is deliberately outside the core pipeline
//! runtime's concerns (`linepipe-core`): the runtime only needs something
//! that implements [`linepipe_core::Transform`], and does not care which of
//! these it is running.

mod expander;
mod flipper;
mod logger;
mod registry;
mod rotator;
mod typewriter;
mod uppercaser;

pub use expander::Expander;
pub use flipper::Flipper;
pub use logger::Logger;
pub use registry::StageRegistry;
pub use rotator::Rotator;
pub use typewriter::{Typewriter, TypewriterConfig};
pub use uppercaser::Uppercaser;
