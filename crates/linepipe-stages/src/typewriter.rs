use linepipe_core::Transform;
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Configuration for [`Typewriter`]'s per-character pacing.
#[derive(Debug, Clone, Copy)]
pub struct TypewriterConfig {
    /// Base delay applied before each character.
    pub base_delay: Duration,
    /// Upper bound of the random jitter added on top of `base_delay`.
    pub max_jitter: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(15),
            max_jitter: Duration::from_millis(10),
        }
    }
}

/// Echoes the line back unchanged, but paces it out character by character
/// with a small, jittered delay — simulating a typewriter rather than
/// printing the whole line at once.
///
/// This stays inside the one-in/one-out transform contract: the delay is an
/// internal side effect of producing the single output string, not a way of
/// splitting one input line into several downstream items.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
}

impl Typewriter {
    /// Creates a typewriter stage with the given pacing configuration.
    #[must_use]
    pub fn new(config: TypewriterConfig) -> Self {
        Self { config }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(TypewriterConfig::default())
    }
}

impl Transform for Typewriter {
    fn apply(&mut self, input: &str) -> Option<String> {
        let mut out = String::with_capacity(input.len());
        let mut rng = rand::thread_rng();
        let max_jitter_ms = u64::try_from(self.config.max_jitter.as_millis()).unwrap_or(u64::MAX);
        for ch in input.chars() {
            let jitter_ms = if max_jitter_ms == 0 {
                0
            } else {
                rng.gen_range(0..=max_jitter_ms)
            };
            thread::sleep(self.config.base_delay + Duration::from_millis(jitter_ms));
            out.push(ch);
        }
        Some(out)
    }

    fn name(&self) -> &str {
        "typewriter"
    }
}
