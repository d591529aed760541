//! Probewise Infrastructure - Adapters
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest transport and console reporting.

pub mod adapters;
pub mod report;

pub use adapters::ReqwestHttpClient;
pub use report::ConsoleReporter;
