//! Run summary aggregation

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::result::TestResult;

/// A failed check carried into the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedEntry {
    /// Check name.
    pub name: String,
    /// Failure detail.
    pub details: String,
}

/// Aggregate verdict for one category of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFinding {
    /// The category this finding covers.
    pub category: Category,
    /// How many results carried this tag.
    pub checked: usize,
    /// True only if every tagged result passed.
    ///
    /// A category with zero checked results is never reported as working.
    pub working: bool,
}

/// Aggregated outcome of a full harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total number of recorded results.
    pub total: usize,
    /// Number of passing results.
    pub passed: usize,
    /// Number of failing results.
    pub failed: usize,
    /// Failing checks in execution order.
    pub failures: Vec<FailedEntry>,
    /// Key findings, one per reported category.
    pub findings: Vec<CategoryFinding>,
}

impl RunSummary {
    /// Aggregates an ordered result sequence.
    #[must_use]
    pub fn from_results(results: &[TestResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;

        let failures = results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| FailedEntry {
                name: r.name.clone(),
                details: r.details.clone(),
            })
            .collect();

        let findings = Category::KEY_FINDINGS
            .iter()
            .map(|&category| {
                let tagged: Vec<_> = results.iter().filter(|r| r.category == category).collect();
                CategoryFinding {
                    category,
                    checked: tagged.len(),
                    working: !tagged.is_empty() && tagged.iter().all(|r| r.passed),
                }
            })
            .collect();

        Self {
            total,
            passed,
            failed,
            failures,
            findings,
        }
    }

    /// Pass rate as a percentage of total results.
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// True if every recorded result passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
