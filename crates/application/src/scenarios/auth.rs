//! Authentication endpoint checks

use async_trait::async_trait;
use serde_json::json;

use probewise_domain::{Category, ProbeRequest, StatusExpectation, Target, TestResult};

use super::Scenario;
use super::support::expect_status;
use crate::ports::HttpClient;

/// Auth endpoints: current-user lookup without credentials (401) and
/// signup with an invalid email and short password (400). Two results.
pub struct AuthEndpoints;

#[async_trait]
impl Scenario for AuthEndpoints {
    fn name(&self) -> &'static str {
        "Auth Endpoints"
    }

    fn category(&self) -> Category {
        Category::Authentication
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let mut results = Vec::with_capacity(2);

        let user = ProbeRequest::get(target.endpoint("/auth/user"));
        results.push(
            expect_status(
                client,
                &user,
                "Auth User GET (Unauthenticated)",
                self.category(),
                &StatusExpectation::Exact(401),
                |_| "Correctly returned 401 for unauthenticated request".to_string(),
            )
            .await,
        );

        let signup = ProbeRequest::post_json(
            target.endpoint("/auth/signup"),
            &json!({"email": "invalid-email", "password": "123"}),
        );
        results.push(
            expect_status(
                client,
                &signup,
                "Auth Signup (Invalid Data)",
                self.category(),
                &StatusExpectation::Exact(400),
                |_| "Correctly returned 400 for invalid signup data".to_string(),
            )
            .await,
        );

        results
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scenarios::testing::{ScriptedClient, plain, target};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn both_checks_pass() {
        let client = ScriptedClient::new()
            .respond(plain(401, ""))
            .respond(plain(400, r#"{"error": "invalid email"}"#));

        let results = AuthEndpoints.run(&client, &target()).await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));

        let requests = client.requests();
        assert_eq!(requests[0].url, "http://backend.test/api/auth/user");
        assert_eq!(requests[1].url, "http://backend.test/api/auth/signup");
        assert_eq!(
            requests[1].body.as_deref(),
            Some(r#"{"email":"invalid-email","password":"123"}"#)
        );
    }

    #[tokio::test]
    async fn signup_accepting_bad_data_fails() {
        let client = ScriptedClient::new()
            .respond(plain(401, ""))
            .respond(plain(200, "{}"));

        let results = AuthEndpoints.run(&client, &target()).await;

        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert_eq!(results[1].details, "Expected 400, got 200");
    }

    #[tokio::test]
    async fn transport_failure_still_records_both() {
        let client = ScriptedClient::new().fail(crate::ports::HttpClientError::Timeout);

        let results = AuthEndpoints.run(&client, &target()).await;

        assert_eq!(results.len(), 2);
        assert!(!results[0].passed);
        assert_eq!(results[0].details, "Request failed: request timed out");
    }
}
