//! # Observability
//!
//! Structured logging for campground. One JSON line per event,
//! synchronous, with deterministic field ordering.

pub mod logger;

pub use logger::{Logger, Severity};
