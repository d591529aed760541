//! Scenario categories
//!
//! Every scenario carries an explicit category tag; the summary's key
//! findings aggregate by tag rather than by matching substrings in
//! result names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The functional area a scenario exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Basic API availability and welcome payload.
    Health,
    /// CORS preflight and header presence.
    Cors,
    /// Authentication middleware and auth endpoints.
    Authentication,
    /// Database-backed status round-trip.
    Database,
    /// Invalid routes and malformed payload handling.
    ErrorHandling,
}

impl Category {
    /// Categories reported as key findings, in display order.
    pub const KEY_FINDINGS: [Self; 4] = [
        Self::Authentication,
        Self::Cors,
        Self::Database,
        Self::Health,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Health => "API Health",
            Self::Cors => "CORS Headers",
            Self::Authentication => "Authentication Middleware",
            Self::Database => "Database Integration",
            Self::ErrorHandling => "Error Handling",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
