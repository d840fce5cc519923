//! Wires [`Stage`]s into a linear chain and drives stdin through them.

use crate::diagnostics::log_error;
use crate::error::StageError;
use crate::stage::{OutputSink, Stage, Transform, SENTINEL};
use std::io::BufRead;
use std::sync::Arc;

/// One stage's construction parameters, as handed to [`Pipeline::build`] by
/// the caller (normally the CLI front end, after resolving names through a
/// stage registry).
pub struct StageSpec {
    /// The stage's display name, as given on the command line.
    pub name: String,
    /// Capacity of this stage's handoff queue.
    pub queue_size: usize,
    /// The transform this stage runs on every non-sentinel item.
    pub transform: Box<dyn Transform>,
}

/// An assembled, running chain of stages.
///
/// Construction order follows §4.5 of the design exactly: every stage is
/// built (which, in this implementation, also performs what the source
/// calls `init` — see the note on [`Stage::new`]) before any stage is
/// attached to its downstream, and attachment itself proceeds low index to
/// high so that no stage is ever live with an unattached hook.
pub struct Pipeline {
    stages: Vec<Arc<Stage>>,
    output: OutputSink,
}

impl Pipeline {
    /// Builds the chain. On the first stage that fails to construct, every
    /// stage built so far is torn down (low to high) before the error is
    /// returned, mirroring the cleanup-on-partial-failure rule in §4.5.
    pub fn build(specs: Vec<StageSpec>, output: OutputSink) -> Result<Self, StageError> {
        let mut stages: Vec<Arc<Stage>> = Vec::with_capacity(specs.len());
        for spec in specs {
            match Stage::new(spec.name, spec.queue_size, spec.transform, Arc::clone(&output)) {
                Ok(stage) => stages.push(stage),
                Err(err) => {
                    for already_built in &stages {
                        already_built.fini();
                    }
                    return Err(err);
                }
            }
        }

        for i in 0..stages.len() {
            if let Some(next) = stages.get(i + 1).cloned() {
                stages[i].attach(Some(Box::new(move |item| next.place_work(item))));
            } else {
                stages[i].attach(None);
            }
        }

        Ok(Self { stages, output })
    }

    /// The stage names in pipeline order, first to last.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Feeds `input` line by line into the first stage, then performs
    /// ordered shutdown: waits on every stage low to high, finalizes every
    /// stage low to high, and writes the final shutdown line.
    ///
    /// Lines are read with [`BufRead::read_until`] rather than
    /// [`BufRead::read_line`] so that a line containing invalid UTF-8 does
    /// not abort the read loop; such a line is recovered losslessly where
    /// possible and lossily otherwise, logged, and still delivered,
    /// consistent with the "pass through unchanged" contract in §6 of the
    /// design — only the decoding of bytes to a `String` (required by this
    /// implementation's transform signature) is not actually a no-op.
    pub fn run<R: BufRead>(&self, mut input: R) {
        let first = self
            .stages
            .first()
            .expect("a pipeline must have at least one stage");

        let mut raw = Vec::new();
        let mut sentinel_sent = false;
        loop {
            raw.clear();
            let bytes_read = match input.read_until(b'\n', &mut raw) {
                Ok(n) => n,
                Err(err) => {
                    log_error(&format!("error reading standard input: {err}"));
                    0
                }
            };
            if bytes_read == 0 {
                break;
            }
            if raw.last() == Some(&b'\n') {
                raw.pop();
                if raw.last() == Some(&b'\r') {
                    raw.pop();
                }
            }
            let line = String::from_utf8(raw.clone())
                .unwrap_or_else(|_| String::from_utf8_lossy(&raw).into_owned());

            let is_sentinel = line == SENTINEL;
            if let Err(err) = first.place_work(line) {
                log_error(&format!("failed to submit input line: {err}"));
            }
            if is_sentinel {
                sentinel_sent = true;
                break;
            }
        }

        if !sentinel_sent {
            if let Err(err) = first.place_work(SENTINEL.to_string()) {
                log_error(&format!("failed to submit shutdown sentinel: {err}"));
            }
        }

        for stage in &self.stages {
            stage.wait_finished();
        }
        for stage in &self.stages {
            stage.fini();
        }

        let mut sink = self.output.lock().unwrap_or_else(|e| e.into_inner());
        if writeln!(sink, "Pipeline shutdown complete").is_err() {
            log_error("failed to write shutdown message");
        }
    }
}
