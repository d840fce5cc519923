use linepipe_core::Transform;

/// Reverses the line, character by character.
#[derive(Debug, Default)]
pub struct Flipper;

impl Transform for Flipper {
    fn apply(&mut self, input: &str) -> Option<String> {
        Some(input.chars().rev().collect())
    }

    fn name(&self) -> &str {
        "flipper"
    }
}
