//! HTTP client port

use async_trait::async_trait;
use thiserror::Error;

use probewise_domain::{ProbeRequest, ResponseSpec};

/// Errors an HTTP transport can report.
///
/// Scenarios convert every variant into a failing result; none of these
/// ever aborts a run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The host refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Target host.
        host: String,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Target host.
        host: String,
        /// Resolver error text.
        message: String,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

/// Transport boundary for issuing probes.
///
/// Implementations keep connection and cookie state across calls within
/// one run; the harness never calls this concurrently.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues one request and resolves it fully before returning.
    async fn execute(&self, request: &ProbeRequest) -> Result<ResponseSpec, HttpClientError>;
}
