//! # moviehub-app
//!
//! Application layer: the ingestion use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RecordRepository`: write one record
//!   - `InvocationLog`: sink for structured per-phase log entries
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `RecordIngestService`: parse a request body (or default it), write the
//!     record, and log each phase
//! - Define the typed log context shared by every phase entry
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `moviehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod invocation;
pub mod logging;
pub mod ports;
pub mod services;
