//! # In-Memory Store
//!
//! Holds records as JSON objects, per collection, in insertion order.
//! The store owns record identity: `id` is assigned sequentially per
//! collection and never reused, and `created_at`/`updated_at` are stamped
//! on create. Foreign keys declared on the collection are checked against
//! the parent collection on every create and on parent removal.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use serde_json::{Map, Value};

use super::errors::{StoreError, StoreResult};
use super::record::{CollectionSpec, RESERVED_FIELDS};

/// Per-collection state
#[derive(Debug)]
struct CollectionData {
    spec: CollectionSpec,
    next_id: u64,
    records: Vec<Value>,
}

impl CollectionData {
    fn new(spec: CollectionSpec) -> Self {
        Self {
            spec,
            next_id: 1,
            records: Vec::new(),
        }
    }

    fn contains_id(&self, id: u64) -> bool {
        self.records
            .iter()
            .any(|r| r.get("id").and_then(Value::as_u64) == Some(id))
    }
}

/// In-memory record store over declared collections
#[derive(Debug)]
pub struct MemoryStore {
    /// Declaration order, parents before children
    order: Vec<String>,
    collections: RwLock<HashMap<String, CollectionData>>,
}

impl MemoryStore {
    /// Create a store for the given collection declarations
    pub fn new(specs: Vec<CollectionSpec>) -> Self {
        let order: Vec<String> = specs.iter().map(|s| s.name.clone()).collect();
        let collections = specs
            .into_iter()
            .map(|spec| (spec.name.clone(), CollectionData::new(spec)))
            .collect();

        Self {
            order,
            collections: RwLock::new(collections),
        }
    }

    /// Declared collection names, in declaration order
    pub fn collections(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Create a record from client-supplied fields
    ///
    /// Assigns the next id, stamps both timestamps, and checks every
    /// declared foreign key against the parent collection.
    pub fn create(&self, collection: &str, fields: Value) -> StoreResult<Value> {
        let obj = fields
            .as_object()
            .ok_or_else(|| StoreError::InvalidRecord("record body must be a JSON object".to_string()))?
            .clone();

        for key in obj.keys() {
            if RESERVED_FIELDS.contains(&key.as_str()) {
                return Err(StoreError::ReservedField(key.clone()));
            }
        }

        let mut store = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        // Foreign keys read sibling collections, so validate them before
        // taking the mutable borrow on the target collection.
        let foreign_keys = store
            .get(collection)
            .ok_or_else(|| StoreError::UndeclaredCollection(collection.to_string()))?
            .spec
            .foreign_keys
            .clone();

        for fk in &foreign_keys {
            let value = obj.get(&fk.field).ok_or_else(|| {
                StoreError::InvalidRecord(format!("missing foreign key field '{}'", fk.field))
            })?;
            let id = value.as_u64().ok_or_else(|| {
                StoreError::InvalidRecord(format!("field '{}' must be a positive integer id", fk.field))
            })?;

            let parent = store
                .get(&fk.parent)
                .ok_or_else(|| StoreError::UndeclaredCollection(fk.parent.clone()))?;
            if !parent.contains_id(id) {
                return Err(StoreError::UnknownParent {
                    field: fk.field.clone(),
                    parent: fk.parent.clone(),
                    value: id,
                });
            }
        }

        let data = store
            .get_mut(collection)
            .ok_or_else(|| StoreError::UndeclaredCollection(collection.to_string()))?;

        let now = Utc::now().to_rfc3339();
        let mut record = Map::new();
        record.insert("id".to_string(), Value::from(data.next_id));
        for (key, value) in obj {
            record.insert(key, value);
        }
        record.insert("created_at".to_string(), Value::String(now.clone()));
        record.insert("updated_at".to_string(), Value::String(now));

        data.next_id += 1;

        let record = Value::Object(record);
        data.records.push(record.clone());
        Ok(record)
    }

    /// Full record sequence for a collection, in insertion order
    pub fn list(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let store = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        store
            .get(collection)
            .map(|data| data.records.clone())
            .ok_or_else(|| StoreError::UndeclaredCollection(collection.to_string()))
    }

    /// Number of records in a collection
    pub fn count(&self, collection: &str) -> StoreResult<usize> {
        let store = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        store
            .get(collection)
            .map(|data| data.records.len())
            .ok_or_else(|| StoreError::UndeclaredCollection(collection.to_string()))
    }

    /// Administrative removal by id
    ///
    /// Refuses to remove a record that a child collection still references.
    /// Returns false when no record with the id exists.
    pub fn remove(&self, collection: &str, id: u64) -> StoreResult<bool> {
        let mut store = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        if !store.contains_key(collection) {
            return Err(StoreError::UndeclaredCollection(collection.to_string()));
        }

        for (child_name, child) in store.iter() {
            for fk in &child.spec.foreign_keys {
                if fk.parent != collection {
                    continue;
                }
                let referenced = child
                    .records
                    .iter()
                    .any(|r| r.get(&fk.field).and_then(Value::as_u64) == Some(id));
                if referenced {
                    return Err(StoreError::ParentInUse {
                        collection: collection.to_string(),
                        id,
                        child: child_name.clone(),
                    });
                }
            }
        }

        let data = store
            .get_mut(collection)
            .ok_or_else(|| StoreError::UndeclaredCollection(collection.to_string()))?;

        let position = data
            .records
            .iter()
            .position(|r| r.get("id").and_then(Value::as_u64) == Some(id));

        match position {
            Some(idx) => {
                data.records.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn camp_store() -> MemoryStore {
        MemoryStore::new(vec![
            CollectionSpec::new("campsites"),
            CollectionSpec::new("campers").with_foreign_key("campsite_id", "campsites"),
        ])
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = camp_store();

        let first = store.create("campsites", json!({"name": "North Meadow"})).unwrap();
        let second = store.create("campsites", json!({"name": "Lakeside"})).unwrap();

        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
    }

    #[test]
    fn test_create_stamps_timestamps() {
        let store = camp_store();
        let record = store.create("campsites", json!({"name": "Lakeside"})).unwrap();

        let created = record["created_at"].as_str().unwrap();
        let updated = record["updated_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created).is_ok());
        assert_eq!(created, updated);
    }

    #[test]
    fn test_create_rejects_reserved_fields() {
        let store = camp_store();

        let result = store.create("campsites", json!({"name": "X", "id": 99}));
        assert!(matches!(result, Err(StoreError::ReservedField(f)) if f == "id"));

        let result = store.create("campsites", json!({"name": "X", "created_at": "now"}));
        assert!(matches!(result, Err(StoreError::ReservedField(_))));
    }

    #[test]
    fn test_create_rejects_non_object() {
        let store = camp_store();
        let result = store.create("campsites", json!([1, 2, 3]));
        assert!(matches!(result, Err(StoreError::InvalidRecord(_))));
    }

    #[test]
    fn test_foreign_key_must_reference_existing_parent() {
        let store = camp_store();

        let result = store.create("campers", json!({"name": "Rovaira", "campsite_id": 1}));
        assert!(matches!(result, Err(StoreError::UnknownParent { value: 1, .. })));

        store.create("campsites", json!({"name": "North Meadow"})).unwrap();
        let camper = store
            .create("campers", json!({"name": "Rovaira", "campsite_id": 1}))
            .unwrap();
        assert_eq!(camper["campsite_id"], 1);
    }

    #[test]
    fn test_foreign_key_field_is_required() {
        let store = camp_store();
        store.create("campsites", json!({"name": "North Meadow"})).unwrap();

        let result = store.create("campers", json!({"name": "Rovaira"}));
        assert!(matches!(result, Err(StoreError::InvalidRecord(_))));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = camp_store();
        store.create("campsites", json!({"name": "North Meadow"})).unwrap();
        for name in ["Rovaira", "Brel", "Sashenka"] {
            store
                .create("campers", json!({"name": name, "campsite_id": 1}))
                .unwrap();
        }

        let names: Vec<_> = store
            .list("campers")
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Rovaira", "Brel", "Sashenka"]);
    }

    #[test]
    fn test_empty_collection_lists_empty() {
        let store = camp_store();
        assert!(store.list("campers").unwrap().is_empty());
        assert_eq!(store.count("campers").unwrap(), 0);
    }

    #[test]
    fn test_undeclared_collection_is_an_error() {
        let store = camp_store();
        assert!(matches!(
            store.list("rangers"),
            Err(StoreError::UndeclaredCollection(_))
        ));
        assert!(matches!(
            store.create("rangers", json!({"name": "X"})),
            Err(StoreError::UndeclaredCollection(_))
        ));
    }

    #[test]
    fn test_remove_by_id() {
        let store = camp_store();
        store.create("campsites", json!({"name": "North Meadow"})).unwrap();
        store.create("campsites", json!({"name": "Lakeside"})).unwrap();

        assert!(store.remove("campsites", 2).unwrap());
        assert!(!store.remove("campsites", 2).unwrap());
        assert_eq!(store.count("campsites").unwrap(), 1);
    }

    #[test]
    fn test_remove_refuses_referenced_parent() {
        let store = camp_store();
        store.create("campsites", json!({"name": "North Meadow"})).unwrap();
        store
            .create("campers", json!({"name": "Rovaira", "campsite_id": 1}))
            .unwrap();

        let result = store.remove("campsites", 1);
        assert!(matches!(result, Err(StoreError::ParentInUse { id: 1, .. })));

        store.remove("campers", 1).unwrap();
        assert!(store.remove("campsites", 1).unwrap());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let store = camp_store();
        store.create("campsites", json!({"name": "North Meadow"})).unwrap();
        store.remove("campsites", 1).unwrap();

        let next = store.create("campsites", json!({"name": "Lakeside"})).unwrap();
        assert_eq!(next["id"], 2);
    }

    #[test]
    fn test_collections_keep_declaration_order() {
        let store = camp_store();
        assert_eq!(store.collections(), vec!["campsites", "campers"]);
    }
}
