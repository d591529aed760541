//! Probe response type
//!
//! Contains the observed side of an HTTP exchange: status code, headers,
//! body, and timing. Scenarios only ever inspect this type; the transport
//! that produced it lives behind a port.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// CORS response headers whose presence the harness checks.
///
/// Values are not validated, only presence.
pub const CORS_HEADERS: [&str; 3] = [
    "Access-Control-Allow-Origin",
    "Access-Control-Allow-Methods",
    "Access-Control-Allow-Headers",
];

/// An observed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as a map.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Response body as text.
    pub body: String,
    /// Time from request dispatch to full response.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a response from raw parts.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Looks up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if all three CORS headers are present.
    #[must_use]
    pub fn has_cors_headers(&self) -> bool {
        CORS_HEADERS.iter().all(|name| self.header(name).is_some())
    }

    /// Attempts to parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}
