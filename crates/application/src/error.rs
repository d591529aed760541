//! Application error types

use thiserror::Error;
use probewise_domain::DomainError;

/// Application-level errors.
///
/// Scenario failures are not errors: they become failing results. This
/// type only covers faults that prevent a run from being set up at all.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP transport could not be constructed.
    #[error("transport setup failed: {0}")]
    TransportSetup(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
