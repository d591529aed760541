//! Harness driver
//!
//! Runs the fixed scenario sequence against one target and accumulates
//! the ordered result list. Scenarios are awaited one at a time; a failed
//! scenario never stops the run.

use std::sync::Arc;

use uuid::Uuid;

use probewise_domain::{RunSummary, Target, TestResult};

use crate::ports::{HttpClient, Reporter};
use crate::scenarios::{Scenario, default_suite};

/// Drives scenarios against one target and owns the result sequence.
pub struct Harness {
    run_id: Uuid,
    target: Target,
    client: Arc<dyn HttpClient>,
    results: Vec<TestResult>,
}

impl Harness {
    /// Creates a harness for one target.
    #[must_use]
    pub fn new(target: Target, client: Arc<dyn HttpClient>) -> Self {
        Self {
            run_id: Uuid::now_v7(),
            target,
            client,
            results: Vec::new(),
        }
    }

    /// Identifier of this run, for log correlation.
    #[must_use]
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The target under test.
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Results recorded so far, in execution order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Runs the default scenario sequence and returns the summary.
    pub async fn run_all(&mut self, reporter: &dyn Reporter) -> RunSummary {
        let suite = default_suite();
        self.run_suite(&suite, reporter).await
    }

    /// Runs the given scenarios in order and returns the summary.
    ///
    /// Every scenario contributes at least one result: a scenario that
    /// returns none gets a synthesized failure entry.
    pub async fn run_suite(
        &mut self,
        scenarios: &[Box<dyn Scenario>],
        reporter: &dyn Reporter,
    ) -> RunSummary {
        tracing::info!(run_id = %self.run_id, target = self.target.base_url(), scenarios = scenarios.len(), "starting run");
        reporter.run_started(&self.target);

        for scenario in scenarios {
            reporter.scenario_started(scenario.name());
            tracing::debug!(scenario = scenario.name(), "running scenario");

            let mut outcomes = scenario.run(self.client.as_ref(), &self.target).await;
            if outcomes.is_empty() {
                outcomes.push(TestResult::fail(
                    scenario.name(),
                    scenario.category(),
                    "Scenario produced no result",
                ));
            }

            for result in outcomes {
                reporter.result(&result);
                self.results.push(result);
            }
        }

        let summary = RunSummary::from_results(&self.results);
        tracing::info!(
            run_id = %self.run_id,
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "run finished"
        );
        reporter.summary(&summary);
        summary
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::NullReporter;
    use crate::scenarios::testing::{UnreachableClient, target};
    use async_trait::async_trait;
    use probewise_domain::Category;
    use pretty_assertions::assert_eq;

    /// A scenario that violates the at-least-one-result contract.
    struct EmptyScenario;

    #[async_trait]
    impl Scenario for EmptyScenario {
        fn name(&self) -> &'static str {
            "Empty Scenario"
        }

        fn category(&self) -> Category {
            Category::Health
        }

        async fn run(&self, _client: &dyn HttpClient, _target: &Target) -> Vec<TestResult> {
            Vec::new()
        }
    }

    /// Total result count against an unreachable host: 7 single-result
    /// checks + 2 (auth endpoints) + 2 (skills ops) + 4 (invalid routes)
    /// + 1 (database POST leg; its GET leg is skipped on failure).
    const UNREACHABLE_RESULT_COUNT: usize = 16;

    #[tokio::test]
    async fn unreachable_host_records_every_scenario() {
        let mut harness = Harness::new(target(), Arc::new(UnreachableClient));

        let summary = harness.run_all(&NullReporter).await;

        assert_eq!(summary.total, UNREACHABLE_RESULT_COUNT);
        assert_eq!(summary.failed, summary.total);
        assert_eq!(summary.passed + summary.failed, summary.total);
        assert!(
            harness
                .results()
                .iter()
                .all(|r| r.details.starts_with("Request failed: "))
        );
    }

    #[tokio::test]
    async fn two_unreachable_runs_record_the_same_count() {
        let mut first = Harness::new(target(), Arc::new(UnreachableClient));
        let mut second = Harness::new(target(), Arc::new(UnreachableClient));

        let a = first.run_all(&NullReporter).await;
        let b = second.run_all(&NullReporter).await;

        assert_eq!(a.total, b.total);
    }

    #[tokio::test]
    async fn empty_scenario_gets_synthesized_failure() {
        let mut harness = Harness::new(target(), Arc::new(UnreachableClient));
        let suite: Vec<Box<dyn Scenario>> = vec![Box::new(EmptyScenario)];

        let summary = harness.run_suite(&suite, &NullReporter).await;

        assert_eq!(summary.total, 1);
        assert_eq!(harness.results()[0].name, "Empty Scenario");
        assert_eq!(harness.results()[0].details, "Scenario produced no result");
    }

    #[tokio::test]
    async fn suite_order_is_fixed() {
        let names: Vec<_> = default_suite().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "Basic API Health Check",
                "CORS OPTIONS Request",
                "Unauthenticated Skills GET",
                "Unauthenticated Skills POST",
                "Unauthenticated Dashboard GET",
                "Auth Endpoints",
                "Skills Operations",
                "Dashboard Users GET (Auth Required)",
                "Database Connection",
                "Invalid Routes",
                "Malformed JSON Handling",
            ]
        );
    }
}
