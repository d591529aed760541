//! Database round-trip via the legacy status endpoint
//!
//! The status endpoint is the one unauthenticated write path, so it
//! doubles as a database connectivity probe: POST a record, then read the
//! collection back.

use async_trait::async_trait;
use serde_json::json;

use probewise_domain::{Category, ProbeRequest, StatusExpectation, Target, TestResult};

use super::Scenario;
use super::support::{body_data, request_failed, status_mismatch};
use crate::ports::HttpClient;

const POST_NAME: &str = "Database Connection (POST Status)";
const GET_NAME: &str = "Database Connection (GET Status)";

/// POST then GET `/api/status`. One result if the POST leg fails, two
/// otherwise; the GET leg only runs after a successful POST.
pub struct DatabaseRoundTrip;

#[async_trait]
impl Scenario for DatabaseRoundTrip {
    fn name(&self) -> &'static str {
        "Database Connection"
    }

    fn category(&self) -> Category {
        Category::Database
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let expected = StatusExpectation::Exact(200);
        let post = ProbeRequest::post_json(
            target.endpoint("/status"),
            &json!({"client_name": "test_client_workwise"}),
        );

        let post_result = match client.execute(&post).await {
            Ok(response) if expected.matches(response.status) => {
                let fields_present = response.json().is_some_and(|data| {
                    ["id", "client_name", "timestamp"]
                        .iter()
                        .all(|field| data.get(field).is_some())
                });
                if fields_present {
                    TestResult::pass(
                        POST_NAME,
                        Category::Database,
                        "Successfully created status record",
                    )
                } else {
                    let result = TestResult::fail(
                        POST_NAME,
                        Category::Database,
                        "Missing required fields in response",
                    );
                    match body_data(&response) {
                        Some(data) => result.with_response_data(data),
                        None => result,
                    }
                }
            }
            Ok(response) => status_mismatch(POST_NAME, Category::Database, &expected, &response),
            Err(error) => request_failed(POST_NAME, Category::Database, &error),
        };

        if !post_result.passed {
            return vec![post_result];
        }

        let get = ProbeRequest::get(target.endpoint("/status"));
        let get_result = match client.execute(&get).await {
            Ok(response) if expected.matches(response.status) => {
                match response.json().and_then(|data| data.as_array().cloned()) {
                    Some(records) if !records.is_empty() => TestResult::pass(
                        GET_NAME,
                        Category::Database,
                        format!("Successfully retrieved {} status records", records.len()),
                    ),
                    Some(_) => TestResult::fail(GET_NAME, Category::Database, "No status records found"),
                    None => {
                        let result = TestResult::fail(
                            GET_NAME,
                            Category::Database,
                            "Response was not a JSON array",
                        );
                        match body_data(&response) {
                            Some(data) => result.with_response_data(data),
                            None => result,
                        }
                    }
                }
            }
            Ok(response) => status_mismatch(GET_NAME, Category::Database, &expected, &response),
            Err(error) => request_failed(GET_NAME, Category::Database, &error),
        };

        vec![post_result, get_result]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scenarios::testing::{ScriptedClient, plain, target};
    use pretty_assertions::assert_eq;

    const POST_BODY: &str =
        r#"{"id": "abc-123", "client_name": "test_client_workwise", "timestamp": "2026-08-25T00:00:00Z"}"#;

    #[tokio::test]
    async fn round_trip_records_two_passes() {
        let client = ScriptedClient::new()
            .respond(plain(200, POST_BODY))
            .respond(plain(200, r#"[{"id": "abc-123"}, {"id": "def-456"}]"#));

        let results = DatabaseRoundTrip.run(&client, &target()).await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[1].details, "Successfully retrieved 2 status records");
    }

    #[tokio::test]
    async fn missing_fields_fail_and_skip_get_leg() {
        let client = ScriptedClient::new().respond(plain(200, r#"{"id": "abc-123"}"#));

        let results = DatabaseRoundTrip.run(&client, &target()).await;

        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].details, "Missing required fields in response");
        assert_eq!(client.requests().len(), 1);
    }

    #[tokio::test]
    async fn empty_collection_fails_get_leg() {
        let client = ScriptedClient::new()
            .respond(plain(200, POST_BODY))
            .respond(plain(200, "[]"));

        let results = DatabaseRoundTrip.run(&client, &target()).await;

        assert_eq!(results.len(), 2);
        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert_eq!(results[1].details, "No status records found");
    }

    #[tokio::test]
    async fn post_status_error_records_single_failure() {
        let client = ScriptedClient::new().respond(plain(500, "database down"));

        let results = DatabaseRoundTrip.run(&client, &target()).await;

        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].details, "Expected 200, got 500");
        assert_eq!(
            results[0].response_data,
            Some(serde_json::Value::String("database down".to_string()))
        );
    }

    #[tokio::test]
    async fn get_leg_non_array_fails() {
        let client = ScriptedClient::new()
            .respond(plain(200, POST_BODY))
            .respond(plain(200, r#"{"not": "an array"}"#));

        let results = DatabaseRoundTrip.run(&client, &target()).await;

        assert!(!results[1].passed);
        assert_eq!(results[1].details, "Response was not a JSON array");
    }
}
