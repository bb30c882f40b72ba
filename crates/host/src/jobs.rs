//! A toy batch runner showing how components receive the gate by reference.

use minlog::LogGate;

const CATEGORY: &str = "jobs";

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("job name is empty")]
    Empty,

    #[error("job {0:?} was rejected")]
    Rejected(String),
}

/// Runs named jobs and reports progress through the injected gate.
pub struct JobRunner<'a> {
    gate: &'a LogGate,
}

impl<'a> JobRunner<'a> {
    pub fn new(gate: &'a LogGate) -> Self {
        Self { gate }
    }

    /// Runs every job in order and returns how many succeeded.
    pub fn run<'n>(&self, jobs: impl IntoIterator<Item = &'n str>) -> usize {
        let mut total = 0;
        let mut succeeded = 0;
        minlog::info!(self.gate, category: CATEGORY, "batch started");
        for name in jobs {
            total += 1;
            minlog::trace!(self.gate, category: CATEGORY, "picked up job #{total}");
            match execute(name) {
                Ok(units) => {
                    succeeded += 1;
                    minlog::debug!(self.gate, category: CATEGORY, "{name} done ({units} units)");
                }
                Err(err) => {
                    minlog::warn!(self.gate, category: CATEGORY, error: &err, "job #{total} failed");
                }
            }
        }
        if total > 0 && succeeded == 0 {
            minlog::error!(self.gate, category: CATEGORY, "no job succeeded");
        }
        minlog::info!(self.gate, category: CATEGORY, "batch finished: {succeeded}/{total}");
        succeeded
    }
}

/// Jobs prefixed with `!` are rejected; the rest cost one unit per byte.
fn execute(name: &str) -> Result<usize, JobError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(JobError::Empty);
    }
    if let Some(rejected) = name.strip_prefix('!') {
        return Err(JobError::Rejected(rejected.to_owned()));
    }
    Ok(name.len())
}
