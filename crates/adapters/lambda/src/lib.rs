//! # moviehub-adapter-lambda
//!
//! Driving adapter that runs the ingest use-case behind API Gateway on
//! [AWS Lambda](https://docs.rs/lambda_runtime).
//!
//! ## Responsibilities
//! - Define the API Gateway proxy **event** and **response** wire types
//! - Map events into `IngestRequest`s and the Lambda context into an
//!   `InvocationContext`
//! - Map use-case results into responses: success → 200, validation → 400,
//!   everything else → invocation error
//! - Provide the production `InvocationLog` (one JSON line per entry via
//!   `tracing`) and the subscriber that renders it
//!
//! ## Dependency rule
//! Depends on `moviehub-app` (for port traits and services) and
//! `moviehub-domain` (for error types). Never leaks Lambda types into the
//! domain.

pub mod error;
pub mod event;
pub mod handler;
pub mod logging;
pub mod response;
