//! # shroud-observability
//!
//! Structured logging for the span engine and the evaluation runner.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
