//! # campground API Module
//!
//! The HTTP surface: versioned, namespaced, read-only list endpoints.
//! Dispatch is an explicit registration table from (version, collection)
//! to a handler/serializer pair, populated at startup.

pub mod config;
pub mod errors;
pub mod handler;
pub mod registry;
pub mod serializer;
pub mod server;
pub mod version;

pub use config::ApiServerConfig;
pub use errors::{ApiError, ApiResult};
pub use handler::{CollectionHandler, StoreListHandler};
pub use registry::{RegistryError, Resource, ResourceRegistry};
pub use serializer::AllowlistSerializer;
pub use server::ApiServer;
pub use version::ApiVersion;
