//! Stage registry: a compile-time stand-in for the out-of-scope dynamic
//! loader.
//!
//! The design's §6/§9 describe stages as loaded by name from an external
//! mechanism, with the one hard requirement that two chain positions naming
//! the same stage never alias each other's private state. A `HashMap` from
//! name to zero-argument constructor satisfies that requirement exactly:
//! every [`StageRegistry::resolve`] call returns a freshly built
//! [`Transform`], never a shared handle.

use linepipe_core::Transform;
use std::collections::HashMap;

use crate::expander::Expander;
use crate::flipper::Flipper;
use crate::logger::Logger;
use crate::rotator::Rotator;
use crate::typewriter::Typewriter;
use crate::uppercaser::Uppercaser;

type Constructor = fn() -> Box<dyn Transform>;

/// Looks up a freshly-constructed [`Transform`] by stage name.
pub struct StageRegistry {
    entries: HashMap<&'static str, Constructor>,
}

impl StageRegistry {
    /// A registry populated with every stage this workspace ships.
    #[must_use]
    pub fn with_builtin_stages() -> Self {
        let mut entries: HashMap<&'static str, Constructor> = HashMap::new();
        entries.insert("uppercaser", || Box::new(Uppercaser));
        entries.insert("rotator", || Box::new(Rotator));
        entries.insert("flipper", || Box::new(Flipper));
        entries.insert("expander", || Box::new(Expander));
        entries.insert("logger", || Box::new(Logger));
        entries.insert("typewriter", || Box::new(Typewriter::default()));
        Self { entries }
    }

    /// Builds a new, independent [`Transform`] instance for `name`, or
    /// `None` if no stage implementation is registered under that name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Box<dyn Transform>> {
        self.entries.get(name).map(|ctor| ctor())
    }

    /// Every registered stage name, for usage output and diagnostics.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for StageRegistry {
    fn default() -> Self {
        Self::with_builtin_stages()
    }
}
