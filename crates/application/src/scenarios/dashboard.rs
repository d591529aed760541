//! Dashboard endpoint checks

use async_trait::async_trait;

use probewise_domain::{Category, ProbeRequest, StatusExpectation, Target, TestResult};

use super::Scenario;
use super::support::{cors_mark, expect_status};
use crate::ports::HttpClient;

const DASHBOARD_PATH: &str = "/dashboard/users";

/// GET `/api/dashboard/users` without credentials must return 401.
pub struct UnauthenticatedDashboard;

#[async_trait]
impl Scenario for UnauthenticatedDashboard {
    fn name(&self) -> &'static str {
        "Unauthenticated Dashboard GET"
    }

    fn category(&self) -> Category {
        Category::Authentication
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let request = ProbeRequest::get(target.endpoint(DASHBOARD_PATH));
        let result = expect_status(
            client,
            &request,
            self.name(),
            self.category(),
            &StatusExpectation::Exact(401),
            |response| format!("Correctly returned 401. CORS headers: {}", cors_mark(response)),
        )
        .await;
        vec![result]
    }
}

/// Dashboard data fetch, still behind the auth wall.
pub struct DashboardData;

#[async_trait]
impl Scenario for DashboardData {
    fn name(&self) -> &'static str {
        "Dashboard Users GET (Auth Required)"
    }

    fn category(&self) -> Category {
        Category::Authentication
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let request = ProbeRequest::get(target.endpoint(DASHBOARD_PATH));
        let result = expect_status(
            client,
            &request,
            self.name(),
            self.category(),
            &StatusExpectation::Exact(401),
            |_| "Authentication middleware working correctly".to_string(),
        )
        .await;
        vec![result]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scenarios::testing::{ScriptedClient, plain, target};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn unauthenticated_dashboard_passes_on_401() {
        let client = ScriptedClient::new().respond(plain(401, ""));

        let results = UnauthenticatedDashboard.run(&client, &target()).await;

        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
        assert_eq!(
            client.requests()[0].url,
            "http://backend.test/api/dashboard/users"
        );
    }

    #[tokio::test]
    async fn dashboard_data_fails_on_success_status() {
        // 200 without credentials would mean the middleware is not applied.
        let client = ScriptedClient::new().respond(plain(200, "[]"));

        let results = DashboardData.run(&client, &target()).await;

        assert!(!results[0].passed);
        assert_eq!(results[0].details, "Expected 401, got 200");
    }
}
