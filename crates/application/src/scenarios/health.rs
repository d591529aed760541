//! Basic API health check

use async_trait::async_trait;

use probewise_domain::{Category, ProbeRequest, StatusExpectation, Target, TestResult};

use super::Scenario;
use super::support::{body_data, cors_mark, request_failed, status_mismatch};
use crate::ports::HttpClient;

/// Welcome message the API root must return.
const WELCOME_MESSAGE: &str = "WorkWise API - Where Skills Meet Jobs";

/// GET `/api/` must return 200 with the WorkWise welcome message.
///
/// CORS header presence is noted in the details but does not fail the
/// check on its own.
pub struct HealthCheck;

const NAME: &str = "Basic API Health Check";

#[async_trait]
impl Scenario for HealthCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn category(&self) -> Category {
        Category::Health
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let request = ProbeRequest::get(target.endpoint("/"));
        let expected = StatusExpectation::Exact(200);

        let result = match client.execute(&request).await {
            Ok(response) if expected.matches(response.status) => match response.json() {
                Some(data) if data.get("message").and_then(|m| m.as_str()) == Some(WELCOME_MESSAGE) => {
                    TestResult::pass(
                        NAME,
                        Category::Health,
                        format!(
                            "Correct welcome message returned. CORS headers: {}",
                            cors_mark(&response)
                        ),
                    )
                }
                Some(data) => {
                    let observed = data
                        .get("message")
                        .map_or_else(|| "<missing>".to_string(), ToString::to_string);
                    TestResult::fail(
                        NAME,
                        Category::Health,
                        format!("Unexpected message: {observed}"),
                    )
                    .with_response_data(data)
                }
                None => {
                    let result = TestResult::fail(
                        NAME,
                        Category::Health,
                        "Response body was not valid JSON",
                    );
                    match body_data(&response) {
                        Some(data) => result.with_response_data(data),
                        None => result,
                    }
                }
            },
            Ok(response) => status_mismatch(NAME, Category::Health, &expected, &response),
            Err(error) => request_failed(NAME, Category::Health, &error),
        };

        vec![result]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scenarios::testing::{ScriptedClient, plain, target, with_cors};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn passes_on_welcome_message_with_cors() {
        let client = ScriptedClient::new().respond(with_cors(
            200,
            r#"{"message": "WorkWise API - Where Skills Meet Jobs"}"#,
        ));

        let results = HealthCheck.run(&client, &target()).await;

        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
        assert_eq!(
            results[0].details,
            "Correct welcome message returned. CORS headers: ✓"
        );
        assert_eq!(
            client.requests()[0].url,
            "http://backend.test/api/"
        );
    }

    #[tokio::test]
    async fn notes_missing_cors_headers() {
        let client = ScriptedClient::new().respond(plain(
            200,
            r#"{"message": "WorkWise API - Where Skills Meet Jobs"}"#,
        ));

        let results = HealthCheck.run(&client, &target()).await;

        assert!(results[0].passed);
        assert!(results[0].details.ends_with("CORS headers: ✗"));
    }

    #[tokio::test]
    async fn fails_on_wrong_message() {
        let client = ScriptedClient::new().respond(plain(200, r#"{"message": "hello"}"#));

        let results = HealthCheck.run(&client, &target()).await;

        assert!(!results[0].passed);
        assert_eq!(results[0].details, r#"Unexpected message: "hello""#);
        assert!(results[0].response_data.is_some());
    }

    #[tokio::test]
    async fn fails_on_wrong_status() {
        let client = ScriptedClient::new().respond(plain(500, "boom"));

        let results = HealthCheck.run(&client, &target()).await;

        assert!(!results[0].passed);
        assert_eq!(results[0].details, "Expected 200, got 500");
    }

    #[tokio::test]
    async fn fails_on_non_json_body() {
        let client = ScriptedClient::new().respond(plain(200, "<html>hi</html>"));

        let results = HealthCheck.run(&client, &target()).await;

        assert!(!results[0].passed);
        assert_eq!(results[0].details, "Response body was not valid JSON");
    }

    #[tokio::test]
    async fn converts_transport_error_into_failing_result() {
        let client = ScriptedClient::new().fail(crate::ports::HttpClientError::ConnectionFailed(
            "connection reset".to_string(),
        ));

        let results = HealthCheck.run(&client, &target()).await;

        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(
            results[0].details,
            "Request failed: connection failed: connection reset"
        );
    }
}
