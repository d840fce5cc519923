//! Parses the `linepipe <queue_size> <stage> [stage...]` command line.

use crate::error::CliError;

/// The validated contents of the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity given to every stage's handoff queue.
    pub queue_size: usize,
    /// Stage names, in chain order, first to last.
    pub stage_names: Vec<String>,
}

impl Config {
    /// Parses `args` (not including the program name).
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidQueueSize`] if the first argument is not a
    /// positive decimal integer with no leading zeros or sign, and
    /// [`CliError::MissingStages`] if no stage names follow it.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let (queue_size_arg, rest) = args
            .split_first()
            .ok_or_else(|| CliError::InvalidQueueSize(String::new()))?;

        let queue_size = parse_positive_decimal(queue_size_arg)
            .ok_or_else(|| CliError::InvalidQueueSize(queue_size_arg.clone()))?;

        if rest.is_empty() {
            return Err(CliError::MissingStages);
        }

        Ok(Self {
            queue_size,
            stage_names: rest.to_vec(),
        })
    }
}

/// Accepts only a positive decimal integer with no leading zeros, no sign,
/// and no fractional part, per §6 of the design.
fn parse_positive_decimal(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return None;
    }
    let value: u64 = raw.parse().ok()?;
    if value == 0 {
        return None;
    }
    usize::try_from(value).ok()
}

/// The usage line printed to standard output on a configuration error, per
/// §7's choice to keep the source's destination for usage text.
pub const USAGE: &str = "usage: linepipe <queue_size> <stage> [stage...]";
