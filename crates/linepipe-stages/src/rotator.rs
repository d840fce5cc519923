use linepipe_core::Transform;

/// Rotates the line one character to the right: the last character moves to
/// the front and everything else shifts over by one.
#[derive(Debug, Default)]
pub struct Rotator;

impl Transform for Rotator {
    fn apply(&mut self, input: &str) -> Option<String> {
        let mut chars: Vec<char> = input.chars().collect();
        if chars.len() < 2 {
            return Some(input.to_string());
        }
        let last = chars.pop().unwrap();
        let mut rotated = String::with_capacity(input.len());
        rotated.push(last);
        rotated.extend(chars);
        Some(rotated)
    }

    fn name(&self) -> &str {
        "rotator"
    }
}
