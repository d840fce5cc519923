//! Configuration errors for the command-line front end.

use thiserror::Error;

/// Errors raised while parsing or validating the command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// `queue_size` was not a positive decimal integer with no leading
    /// zeros, no sign, and no fractional part.
    #[error("queue size must be a positive integer with no leading zeros, got '{0}'")]
    InvalidQueueSize(String),
    /// No stage names were given on the command line.
    #[error("at least one stage name is required")]
    MissingStages,
    /// A stage name did not match any entry in the registry. The second
    /// field is the comma-separated list of stage names that do exist, so
    /// the diagnostic tells the user what to try instead.
    #[error("unknown stage '{0}', available stages: {1}")]
    UnknownStage(String, String),
}
