use linepipe_core::Transform;

/// Uppercases every character in the line.
#[derive(Debug, Default)]
pub struct Uppercaser;

impl Transform for Uppercaser {
    fn apply(&mut self, input: &str) -> Option<String> {
        Some(input.to_uppercase())
    }

    fn name(&self) -> &str {
        "uppercaser"
    }
}
