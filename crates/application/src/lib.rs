//! Probewise Application - Scenario logic
//!
//! This crate holds the probe scenarios and the harness that drives them.
//! All HTTP traffic goes through the [`ports::HttpClient`] port, so every
//! scenario can be exercised against a scripted transport in tests.

pub mod error;
pub mod harness;
pub mod ports;
pub mod scenarios;

pub use error::{ApplicationError, ApplicationResult};
pub use harness::Harness;
pub use ports::{HttpClient, HttpClientError, Reporter};
pub use scenarios::{Scenario, default_suite};
