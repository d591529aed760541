//! Probe target addressing
//!
//! A target is the deployment under test: a validated base URL plus the
//! derived API root that every scenario addresses its requests to.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// The deployment a harness run probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    base_url: String,
    api_url: String,
}

impl Target {
    /// Creates a target from a base URL.
    ///
    /// The URL is validated, any trailing slash is stripped, and the API
    /// root is derived by appending `/api`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBaseUrl`] if the URL does not parse
    /// and [`DomainError::UnsupportedScheme`] for non-HTTP schemes.
    pub fn new(base_url: &str) -> DomainResult<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).map_err(|e| DomainError::InvalidBaseUrl(format!("{e}: {base_url}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(DomainError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            api_url: format!("{trimmed}/api"),
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the derived API root (`{base_url}/api`).
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Joins a path onto the API root.
    ///
    /// The path should start with `/`; `endpoint("/")` addresses the API
    /// root itself.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }
}
