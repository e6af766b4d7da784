//! # Resource Registry
//!
//! Explicit dispatch table for the API: each (version, collection) pair
//! maps to exactly one handler/serializer pair, registered at startup.
//! There is no name-based convention lookup; a resource the table does
//! not hold does not exist.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use super::handler::CollectionHandler;
use super::serializer::AllowlistSerializer;
use super::version::ApiVersion;

/// Registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// The (version, collection) slot is already taken
    #[error("Resource already registered for /api/{version}/{collection}")]
    Duplicate {
        version: ApiVersion,
        collection: String,
    },

    /// Interior lock was poisoned
    #[error("Registry lock poisoned")]
    LockPoisoned,
}

/// One registered resource: the handler and the serializer it feeds
#[derive(Clone)]
pub struct Resource {
    pub handler: Arc<dyn CollectionHandler>,
    pub serializer: AllowlistSerializer,
}

impl Resource {
    pub fn new(handler: Arc<dyn CollectionHandler>, serializer: AllowlistSerializer) -> Self {
        Self {
            handler,
            serializer,
        }
    }
}

/// Registry of all exposed resources
#[derive(Default)]
pub struct ResourceRegistry {
    resources: RwLock<HashMap<(ApiVersion, String), Resource>>,
}

impl ResourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under a version and collection name
    ///
    /// Each slot holds exactly one resource; registering the same slot
    /// twice is a startup error, not a replacement.
    pub fn register(
        &self,
        version: ApiVersion,
        collection: impl Into<String>,
        resource: Resource,
    ) -> Result<(), RegistryError> {
        let collection = collection.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| RegistryError::LockPoisoned)?;

        if resources.contains_key(&(version, collection.clone())) {
            return Err(RegistryError::Duplicate {
                version,
                collection,
            });
        }

        resources.insert((version, collection), resource);
        Ok(())
    }

    /// Look up the resource for a version and collection
    pub fn get(&self, version: ApiVersion, collection: &str) -> Option<Resource> {
        self.resources
            .read()
            .ok()?
            .get(&(version, collection.to_string()))
            .cloned()
    }

    /// All registered (version, collection) pairs, sorted
    pub fn routes(&self) -> Vec<(ApiVersion, String)> {
        let mut routes: Vec<_> = self
            .resources
            .read()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default();
        routes.sort();
        routes
    }

    /// Number of registered resources
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
