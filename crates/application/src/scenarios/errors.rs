//! Error-handling checks: unknown routes and malformed payloads

use async_trait::async_trait;

use probewise_domain::{Category, ProbeRequest, StatusExpectation, Target, TestResult};

use super::Scenario;
use super::support::{cors_mark, expect_status};
use crate::ports::HttpClient;

/// Routes that must not resolve.
const INVALID_ROUTES: [&str; 4] = [
    "/nonexistent",
    "/user/invalid",
    "/dashboard/invalid",
    "/completely/wrong/path",
];

/// GET on four unknown paths, each expecting 404. Four results.
pub struct InvalidRoutes;

#[async_trait]
impl Scenario for InvalidRoutes {
    fn name(&self) -> &'static str {
        "Invalid Routes"
    }

    fn category(&self) -> Category {
        Category::ErrorHandling
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let expected = StatusExpectation::Exact(404);
        let mut results = Vec::with_capacity(INVALID_ROUTES.len());

        for route in INVALID_ROUTES {
            let request = ProbeRequest::get(target.endpoint(route));
            let name = format!("Invalid Route {route}");
            results.push(
                expect_status(
                    client,
                    &request,
                    &name,
                    self.category(),
                    &expected,
                    |response| {
                        format!("Correctly returned 404. CORS headers: {}", cors_mark(response))
                    },
                )
                .await,
            );
        }

        results
    }
}

/// POST `/api/user/skills` with a syntactically broken JSON body.
///
/// Acceptable outcomes are 400 (parse rejection), 401 (auth wall first)
/// or 500; anything else means the body was swallowed silently.
pub struct MalformedJson;

const MALFORMED_NAME: &str = "Malformed JSON Handling";

#[async_trait]
impl Scenario for MalformedJson {
    fn name(&self) -> &'static str {
        MALFORMED_NAME
    }

    fn category(&self) -> Category {
        Category::ErrorHandling
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let request = ProbeRequest::post_raw_json(target.endpoint("/user/skills"), "{ invalid json }");
        let expected = StatusExpectation::OneOf(vec![400, 401, 500]);

        let result = expect_status(
            client,
            &request,
            MALFORMED_NAME,
            self.category(),
            &expected,
            |response| {
                format!(
                    "Correctly handled malformed JSON with {}. CORS headers: {}",
                    response.status,
                    cors_mark(response)
                )
            },
        )
        .await;

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
    async fn all_four_routes_pass_on_404() {
        let client = ScriptedClient::new()
            .respond(with_cors(404, ""))
            .respond(with_cors(404, ""))
            .respond(with_cors(404, ""))
            .respond(with_cors(404, ""));

        let results = InvalidRoutes.run(&client, &target()).await;

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[0].name, "Invalid Route /nonexistent");
        assert_eq!(results[3].name, "Invalid Route /completely/wrong/path");
        assert_eq!(
            client.requests()[3].url,
            "http://backend.test/api/completely/wrong/path"
        );
    }

    #[tokio::test]
    async fn resolving_route_fails() {
        let client = ScriptedClient::new()
            .respond(plain(404, ""))
            .respond(plain(200, "{}"))
            .respond(plain(404, ""))
            .respond(plain(404, ""));

        let results = InvalidRoutes.run(&client, &target()).await;

        assert_eq!(results.len(), 4);
        assert!(!results[1].passed);
        assert_eq!(results[1].details, "Expected 404, got 200");
    }

    #[tokio::test]
    async fn each_route_survives_transport_failure() {
        let client = ScriptedClient::new();

        let results = InvalidRoutes.run(&client, &target()).await;

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| !r.passed));
    }

    #[tokio::test]
    async fn malformed_json_accepts_any_listed_status() {
        for status in [400, 401, 500] {
            let client = ScriptedClient::new().respond(with_cors(status, ""));
            let results = MalformedJson.run(&client, &target()).await;
            assert!(results[0].passed, "status {status} should pass");
        }
    }

    #[tokio::test]
    async fn malformed_json_body_is_sent_verbatim() {
        let client = ScriptedClient::new().respond(plain(400, ""));

        MalformedJson.run(&client, &target()).await;

        assert_eq!(client.requests()[0].body.as_deref(), Some("{ invalid json }"));
    }

    #[tokio::test]
    async fn malformed_json_accepted_silently_fails() {
        let client = ScriptedClient::new().respond(plain(200, "{}"));

        let results = MalformedJson.run(&client, &target()).await;

        assert!(!results[0].passed);
        assert_eq!(
            results[0].details,
            "Expected one of [400, 401, 500], got 200"
        );
    }
}
