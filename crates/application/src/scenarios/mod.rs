//! Probe scenarios
//!
//! Each scenario issues one or more requests against the target and
//! records a fixed number of results. Transport failures never escape a
//! scenario: they become failing results with the error text as detail.

mod auth;
mod cors;
mod dashboard;
mod database;
mod errors;
mod health;
mod skills;

pub use auth::AuthEndpoints;
pub use cors::CorsPreflight;
pub use dashboard::{DashboardData, UnauthenticatedDashboard};
pub use database::DatabaseRoundTrip;
pub use errors::{InvalidRoutes, MalformedJson};
pub use health::HealthCheck;
pub use skills::{SkillsOperations, UnauthenticatedSkillsGet, UnauthenticatedSkillsPost};

use async_trait::async_trait;

use probewise_domain::{Category, Target, TestResult};

use crate::ports::HttpClient;

/// One named probe scenario.
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Scenario name, used for progress reporting and fallback results.
    fn name(&self) -> &'static str;

    /// Functional area this scenario exercises.
    fn category(&self) -> Category;

    /// Runs the scenario, returning its results in order.
    ///
    /// Implementations must always return at least one result and must
    /// not propagate transport errors.
    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult>;
}

/// The fixed scenario sequence of a full harness run.
#[must_use]
pub fn default_suite() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(HealthCheck),
        Box::new(CorsPreflight),
        Box::new(UnauthenticatedSkillsGet),
        Box::new(UnauthenticatedSkillsPost),
        Box::new(UnauthenticatedDashboard),
        Box::new(AuthEndpoints),
        Box::new(SkillsOperations),
        Box::new(DashboardData),
        Box::new(DatabaseRoundTrip),
        Box::new(InvalidRoutes),
        Box::new(MalformedJson),
    ]
}

pub(crate) mod support {
    //! Helpers shared by the scenario implementations.

    use probewise_domain::{
        Category, ProbeRequest, ResponseSpec, StatusExpectation, TestResult,
    };

    use crate::ports::{HttpClient, HttpClientError};

    /// Mark used in details to note CORS header presence.
    pub(crate) fn cors_mark(response: &ResponseSpec) -> &'static str {
        if response.has_cors_headers() { "✓" } else { "✗" }
    }

    /// Failing result for a request that could not be completed.
    pub(crate) fn request_failed(
        name: &str,
        category: Category,
        error: &HttpClientError,
    ) -> TestResult {
        TestResult::fail(name, category, format!("Request failed: {error}"))
    }

    /// Captures the response body for failure diagnosis.
    ///
    /// JSON bodies are kept structured; anything else is kept as text.
    pub(crate) fn body_data(response: &ResponseSpec) -> Option<serde_json::Value> {
        if response.body.is_empty() {
            return None;
        }
        Some(
            response
                .json()
                .unwrap_or_else(|| serde_json::Value::String(response.body.clone())),
        )
    }

    /// Failing result for an unexpected status code, with the body attached.
    pub(crate) fn status_mismatch(
        name: &str,
        category: Category,
        expected: &StatusExpectation,
        response: &ResponseSpec,
    ) -> TestResult {
        let result = TestResult::fail(name, category, expected.mismatch(response.status));
        match body_data(response) {
            Some(data) => result.with_response_data(data),
            None => result,
        }
    }

    /// Issues a request and checks only the status code.
    ///
    /// `pass_details` renders the detail line for the matching case.
    pub(crate) async fn expect_status(
        client: &dyn HttpClient,
        request: &ProbeRequest,
        name: &str,
        category: Category,
        expected: &StatusExpectation,
        pass_details: impl FnOnce(&ResponseSpec) -> String + Send,
    ) -> TestResult {
        match client.execute(request).await {
            Ok(response) if expected.matches(response.status) => {
                TestResult::pass(name, category, pass_details(&response))
            }
            Ok(response) => status_mismatch(name, category, expected, &response),
            Err(error) => request_failed(name, category, &error),
        }
    }
}
