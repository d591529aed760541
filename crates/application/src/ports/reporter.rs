//! Progress reporting port

use probewise_domain::{RunSummary, Target, TestResult};

/// Receives harness progress as it happens.
///
/// The console adapter renders these; tests usually pass [`NullReporter`].
pub trait Reporter: Send + Sync {
    /// Called once before the first scenario runs.
    fn run_started(&self, _target: &Target) {}

    /// Called when a scenario begins.
    fn scenario_started(&self, _name: &str) {}

    /// Called for every recorded result, in order.
    fn result(&self, result: &TestResult);

    /// Called once after the last scenario with the aggregated summary.
    fn summary(&self, summary: &RunSummary);
}

/// Reporter that discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn result(&self, _result: &TestResult) {}

    fn summary(&self, _summary: &RunSummary) {}
}
