//! # Collection Handlers
//!
//! A collection handler produces the full, unfiltered record sequence for
//! one entity type. No parameters, no pagination, no write verbs.

use std::sync::Arc;

use serde_json::Value;

use crate::store::MemoryStore;

use super::errors::ApiResult;

/// Handler for the list-all operation on one collection
pub trait CollectionHandler: Send + Sync {
    /// The complete record sequence, in store order
    fn list(&self) -> ApiResult<Vec<Value>>;
}

/// Store-backed list handler
pub struct StoreListHandler {
    store: Arc<MemoryStore>,
    collection: String,
}

impl StoreListHandler {
    pub fn new(store: Arc<MemoryStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Collection this handler reads
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl CollectionHandler for StoreListHandler {
    fn list(&self) -> ApiResult<Vec<Value>> {
        Ok(self.store.list(&self.collection)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::store::CollectionSpec;
    use serde_json::json;

    fn seeded_store() -> Arc<MemoryStore> {
        let store = MemoryStore::new(vec![CollectionSpec::new("campsites")]);
        store.create("campsites", json!({"name": "North Meadow"})).unwrap();
        store.create("campsites", json!({"name": "Lakeside"})).unwrap();
        Arc::new(store)
    }

    #[test]
    fn test_list_returns_full_sequence() {
        let handler = StoreListHandler::new(seeded_store(), "campsites");

        let records = handler.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "North Meadow");
    }

    #[test]
    fn test_empty_collection_is_not_an_error() {
        let store = Arc::new(MemoryStore::new(vec![CollectionSpec::new("campsites")]));
        let handler = StoreListHandler::new(store, "campsites");

        assert!(handler.list().unwrap().is_empty());
    }

    #[test]
    fn test_undeclared_collection_surfaces_as_store_error() {
        let handler = StoreListHandler::new(seeded_store(), "rangers");

        assert!(matches!(handler.list(), Err(ApiError::Store(_))));
    }
}
