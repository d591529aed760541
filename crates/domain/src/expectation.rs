//! Status code expectations

use serde::{Deserialize, Serialize};

/// Expected status code value, range, or set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusExpectation {
    /// Exact status code.
    Exact(u16),
    /// Range of status codes (e.g., 200-299).
    Range {
        /// Minimum status code (inclusive).
        min: u16,
        /// Maximum status code (inclusive).
        max: u16,
    },
    /// One of multiple status codes.
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    /// Check if a status code matches this expectation.
    #[must_use]
    pub fn matches(&self, status: u16) -> bool {
        match self {
            Self::Exact(expected) => status == *expected,
            Self::Range { min, max } => status >= *min && status <= *max,
            Self::OneOf(codes) => codes.contains(&status),
        }
    }

    /// Get a description of the expectation, as used in result details.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Exact(code) => code.to_string(),
            Self::Range { min, max } => format!("{min}-{max}"),
            Self::OneOf(codes) => {
                let codes_str: Vec<_> = codes.iter().map(ToString::to_string).collect();
                format!("one of [{}]", codes_str.join(", "))
            }
        }
    }

    /// Describes a mismatch against an observed status code.
    #[must_use]
    pub fn mismatch(&self, actual: u16) -> String {
        format!("Expected {}, got {actual}", self.description())
    }
}

impl Default for StatusExpectation {
    fn default() -> Self {
        Self::Range { min: 200, max: 299 }
    }
}
