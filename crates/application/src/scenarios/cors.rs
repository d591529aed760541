//! CORS preflight check

use async_trait::async_trait;

use probewise_domain::{Category, ProbeRequest, StatusExpectation, Target, TestResult};

use super::Scenario;
use super::support::{request_failed, status_mismatch};
use crate::ports::HttpClient;

/// OPTIONS `/api/` must return 200 with all three CORS headers.
pub struct CorsPreflight;

const NAME: &str = "CORS OPTIONS Request";

#[async_trait]
impl Scenario for CorsPreflight {
    fn name(&self) -> &'static str {
        NAME
    }

    fn category(&self) -> Category {
        Category::Cors
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let request = ProbeRequest::options(target.endpoint("/"));
        let expected = StatusExpectation::Exact(200);

        let result = match client.execute(&request).await {
            Ok(response) if expected.matches(response.status) => {
                if response.has_cors_headers() {
                    TestResult::pass(
                        NAME,
                        Category::Cors,
                        "CORS preflight request handled correctly",
                    )
                } else {
                    TestResult::fail(NAME, Category::Cors, "Missing CORS headers")
                }
            }
            Ok(response) => status_mismatch(NAME, Category::Cors, &expected, &response),
            Err(error) => request_failed(NAME, Category::Cors, &error),
        };

        vec![result]
    }
}
