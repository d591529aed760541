//! Skills endpoint checks
//!
//! The skills routes sit behind the authentication middleware, so every
//! probe here expects a 401 regardless of payload validity.

use async_trait::async_trait;
use serde_json::json;

use probewise_domain::{Category, ProbeRequest, StatusExpectation, Target, TestResult};

use super::Scenario;
use super::support::{cors_mark, expect_status};
use crate::ports::HttpClient;

const SKILLS_PATH: &str = "/user/skills";

/// GET `/api/user/skills` without credentials must return 401.
pub struct UnauthenticatedSkillsGet;

#[async_trait]
impl Scenario for UnauthenticatedSkillsGet {
    fn name(&self) -> &'static str {
        "Unauthenticated Skills GET"
    }

    fn category(&self) -> Category {
        Category::Authentication
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let request = ProbeRequest::get(target.endpoint(SKILLS_PATH));
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

/// POST `/api/user/skills` without credentials must return 401.
///
/// The body is a valid skills payload; it must be ignored for the auth
/// check.
pub struct UnauthenticatedSkillsPost;

#[async_trait]
impl Scenario for UnauthenticatedSkillsPost {
    fn name(&self) -> &'static str {
        "Unauthenticated Skills POST"
    }

    fn category(&self) -> Category {
        Category::Authentication
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let request = ProbeRequest::post_json(
            target.endpoint(SKILLS_PATH),
            &json!({"skills": ["Coding", "JavaScript"]}),
        );
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

/// Skills writes with valid and invalid payloads, both expected to hit
/// the auth wall first. Two results.
pub struct SkillsOperations;

#[async_trait]
impl Scenario for SkillsOperations {
    fn name(&self) -> &'static str {
        "Skills Operations"
    }

    fn category(&self) -> Category {
        Category::Authentication
    }

    async fn run(&self, client: &dyn HttpClient, target: &Target) -> Vec<TestResult> {
        let expected = StatusExpectation::Exact(401);
        let mut results = Vec::with_capacity(2);

        let valid = ProbeRequest::post_json(
            target.endpoint(SKILLS_PATH),
            &json!({"skills": ["Coding", "JavaScript", "Carpentry"]}),
        );
        results.push(
            expect_status(
                client,
                &valid,
                "Skills POST with Valid Data (Auth Required)",
                self.category(),
                &expected,
                |_| "Authentication middleware working correctly".to_string(),
            )
            .await,
        );

        // Auth must be checked before payload validation, so this still
        // expects 401 rather than 400.
        let invalid = ProbeRequest::post_json(
            target.endpoint(SKILLS_PATH),
            &json!({"invalid_field": "not_an_array"}),
        );
        results.push(
            expect_status(
                client,
                &invalid,
                "Skills POST with Invalid Data (Auth Required)",
                self.category(),
                &expected,
                |_| "Authentication checked before data validation".to_string(),
            )
            .await,
        );

        results
    }
}
