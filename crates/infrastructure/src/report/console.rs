//! Console reporter
//!
//! Renders harness progress and the final summary as plain console text.
//! This output is the product of a run, so it stays on stdout rather
//! than going through tracing.

use probewise_application::ports::Reporter;
use probewise_domain::{Category, CategoryFinding, RunSummary, Target, TestResult};

const SEPARATOR: &str =
    "============================================================";

/// Reporter that prints results and the summary to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Creates a console reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn run_started(&self, target: &Target) {
        println!("🎯 Testing WorkWise Backend API at: {}", target.base_url());
        println!("📡 API Endpoint: {}", target.api_url());
        println!();
        println!("🚀 Starting WorkWise Backend API Test Suite");
        println!("{SEPARATOR}");
    }

    fn scenario_started(&self, name: &str) {
        println!("🔍 Testing {name}...");
    }

    fn result(&self, result: &TestResult) {
        print!("{}", render_result(result));
    }

    fn summary(&self, summary: &RunSummary) {
        print!("{}", render_summary(summary));
    }
}

/// Renders one result block.
fn render_result(result: &TestResult) -> String {
    let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
    let mut out = format!("{status} {}\n", result.name);
    if !result.details.is_empty() {
        out.push_str(&format!("   Details: {}\n", result.details));
    }
    if !result.passed {
        if let Some(data) = &result.response_data {
            out.push_str(&format!("   Response: {data}\n"));
        }
    }
    out.push('\n');
    out
}

/// Renders the summary block.
fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push_str("\n📊 TEST SUMMARY\n");
    out.push_str(SEPARATOR);
    out.push('\n');

    out.push_str(&format!("Total Tests: {}\n", summary.total));
    out.push_str(&format!("✅ Passed: {}\n", summary.passed));
    out.push_str(&format!("❌ Failed: {}\n", summary.failed));
    out.push_str(&format!("Success Rate: {:.1}%\n", summary.pass_rate()));

    if !summary.failures.is_empty() {
        out.push_str("\n🔍 FAILED TESTS:\n");
        for failure in &summary.failures {
            out.push_str(&format!("  ❌ {}: {}\n", failure.name, failure.details));
        }
    }

    out.push_str("\n🎯 KEY FINDINGS:\n");
    for finding in &summary.findings {
        out.push_str(&format!(
            "  {} {}: {}\n",
            finding_icon(finding.category),
            finding.category.label(),
            finding_verdict(finding)
        ));
    }

    out
}

const fn finding_icon(category: Category) -> &'static str {
    match category {
        Category::Authentication => "🔐",
        Category::Cors => "🌐",
        Category::Database => "🗄️",
        Category::Health => "❤️",
        Category::ErrorHandling => "⚠️",
    }
}

const fn finding_verdict(finding: &CategoryFinding) -> &'static str {
    if finding.checked == 0 {
        "❓ Check Required"
    } else if finding.working {
        "✅ Working"
    } else {
        "❌ Issues Found"
    }
}
