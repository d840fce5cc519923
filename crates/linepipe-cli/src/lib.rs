//! Command-line front end: argument parsing, stage-name resolution, and
//! exit-code mapping around [`linepipe_core::Pipeline`].

mod config;
mod error;

pub use config::{Config, USAGE};
pub use error::CliError;

use linepipe_core::{log_error, OutputSink, Pipeline, StageSpec};
use linepipe_stages::StageRegistry;
use std::io::{BufRead, Write};

/// `0` — normal completion.
pub const EXIT_OK: i32 = 0;
/// `1` — argument error, stage-lookup failure, or an allocation failure
/// before any stage was initialized.
pub const EXIT_CONFIG_ERROR: i32 = 1;
/// `2` — a stage's construction/initialization reported failure.
pub const EXIT_INIT_ERROR: i32 = 2;

/// Parses `args`, resolves stage names against `registry`, runs the
/// pipeline over `stdin`, and returns the process exit code.
///
/// `args` excludes the program name (`argv[0]`). `usage_out` receives the
/// usage line on a configuration error, matching §7's decision to print
/// usage to standard output while the diagnostic itself goes to standard
/// error via [`linepipe_core::log_error`].
pub fn run<R: BufRead>(
    args: &[String],
    stdin: R,
    output: OutputSink,
    registry: &StageRegistry,
    mut usage_out: impl Write,
) -> i32 {
    let config = match Config::parse(args) {
        Ok(config) => config,
        Err(err) => {
            log_error(&err.to_string());
            let _ = writeln!(usage_out, "{USAGE}");
            return EXIT_CONFIG_ERROR;
        }
    };

    let mut specs = Vec::with_capacity(config.stage_names.len());
    for name in &config.stage_names {
        let Some(transform) = registry.resolve(name) else {
            let available = registry.names().join(", ");
            log_error(&CliError::UnknownStage(name.clone(), available).to_string());
            let _ = writeln!(usage_out, "{USAGE}");
            return EXIT_CONFIG_ERROR;
        };
        specs.push(StageSpec {
            name: name.clone(),
            queue_size: config.queue_size,
            transform,
        });
    }

    let pipeline = match Pipeline::build(specs, output) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            log_error(&err.to_string());
            return EXIT_INIT_ERROR;
        }
    };

    pipeline.run(stdin);
    EXIT_OK
}
