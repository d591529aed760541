//! Test result records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// The recorded outcome of one scenario check.
///
/// Immutable after creation; the harness appends these in execution order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Scenario check name.
    pub name: String,
    /// Functional area this check belongs to.
    pub category: Category,
    /// Whether the check passed.
    pub passed: bool,
    /// Diagnostic detail.
    pub details: String,
    /// Response payload captured for failed checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_data: Option<serde_json::Value>,
    /// When the result was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl TestResult {
    /// Creates a passing result.
    #[must_use]
    pub fn pass(name: impl Into<String>, category: Category, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            passed: true,
            details: details.into(),
            response_data: None,
            recorded_at: Utc::now(),
        }
    }

    /// Creates a failing result.
    #[must_use]
    pub fn fail(name: impl Into<String>, category: Category, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            passed: false,
            details: details.into(),
            response_data: None,
            recorded_at: Utc::now(),
        }
    }

    /// Attaches the observed response payload, kept for failure diagnosis.
    #[must_use]
    pub fn with_response_data(mut self, data: serde_json::Value) -> Self {
        self.response_data = Some(data);
        self
    }
}
