//! Probewise - Main entry point
//!
//! Reads the target base URL from the environment, runs the full probe
//! sequence against it, and prints the summary. Exit status is always 0;
//! outcomes surface only as console text.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use probewise_application::{ApplicationError, ApplicationResult, Harness};
use probewise_domain::Target;
use probewise_infrastructure::{ConsoleReporter, ReqwestHttpClient};

/// Deployment probed when `NEXT_PUBLIC_BASE_URL` is not set.
const DEFAULT_BASE_URL: &str =
    "https://f0a8ef30-1360-476a-84f9-a7e2ca7d58f5.preview.emergentagent.com";

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; the report owns stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Setup faults are reported but never change the exit status.
    if let Err(error) = run().await {
        eprintln!("❌ Harness setup failed: {error}");
    }
}

/// Builds the harness from the environment and runs the full sequence.
async fn run() -> ApplicationResult<()> {
    let base_url =
        std::env::var("NEXT_PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let target = Target::new(&base_url)?;

    let client = ReqwestHttpClient::new()
        .map_err(|e| ApplicationError::TransportSetup(e.to_string()))?;
    let mut harness = Harness::new(target, Arc::new(client));
    harness.run_all(&ConsoleReporter::new()).await;

    Ok(())
}
