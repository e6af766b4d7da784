//! campground - a self-hostable, versioned JSON list API
//!
//! Serves `GET /api/<version>/<collection>` list endpoints over an
//! in-memory record store, with per-resource allowlist serialization.

pub mod api;
pub mod cli;
pub mod observability;
pub mod store;
