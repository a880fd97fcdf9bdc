//! # moviehub-domain
//!
//! Pure domain model for the moviehub ingestion handler.
//!
//! ## Responsibilities
//! - Foundational types: the record identifier, error conventions, timestamps
//! - Define the **Record** (a movie `year`/`title`/`id` tuple) and its
//!   construction from an inbound JSON payload
//! - Contain all field coercion and invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod record;
