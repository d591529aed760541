//! Probewise Domain - Core probe types
//!
//! This crate defines the domain model for the Probewise harness.
//! All types here are pure Rust with no I/O dependencies.

pub mod category;
pub mod error;
pub mod expectation;
pub mod request;
pub mod response;
pub mod result;
pub mod summary;
pub mod target;

pub use category::Category;
pub use error::{DomainError, DomainResult};
pub use expectation::StatusExpectation;
pub use request::{HttpMethod, ProbeRequest};
pub use response::{CORS_HEADERS, ResponseSpec};
pub use result::TestResult;
pub use summary::{CategoryFinding, FailedEntry, RunSummary};
pub use target::Target;
