//! # moviehub-lambda
//!
//! Composition root that wires the adapters together and hands the handler
//! to the Lambda runtime.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the JSON-lines `tracing` subscriber
//! - Build the `DynamoDB` repository once per execution environment
//! - Construct the ingest service, injecting the repository and log sink
//! - Run the Lambda event loop
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use lambda_runtime::service_fn;
use moviehub_adapter_lambda::handler::function_handler;
use moviehub_adapter_lambda::logging::{self, TracingInvocationLog};
use moviehub_app::services::ingest_service::RecordIngestService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = Config::load()?;
    logging::init(&config.logging.filter)?;

    let repo = config.storage_config().build().await;
    if repo.table_name().is_none() {
        tracing::warn!("TABLE_NAME is not set, every write will fail");
    }

    let settings = config.ingest_settings();
    tracing::info!(
        table_name = ?settings.table_name,
        missing_body = ?settings.missing_body,
        "moviehub-lambda ready"
    );
    let service = RecordIngestService::new(repo, TracingInvocationLog, settings);

    lambda_runtime::run(service_fn(|event| function_handler(&service, event))).await
}
