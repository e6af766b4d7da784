//! Registry Dispatch Tests
//!
//! The dispatch table is explicit: a resource exists iff it was registered
//! at startup, and version prefixes address independent generations of the
//! same collection name.

use std::sync::Arc;

use campground::api::{
    AllowlistSerializer, ApiVersion, Resource, ResourceRegistry, StoreListHandler,
};
use campground::store::{CollectionSpec, MemoryStore};
use serde_json::json;

fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new(vec![
        CollectionSpec::new("campsites"),
        CollectionSpec::new("campers").with_foreign_key("campsite_id", "campsites"),
    ]));
    store.create("campsites", json!({"name": "North Meadow"})).unwrap();
    store
        .create("campers", json!({"name": "Rovaira", "campsite_id": 1}))
        .unwrap();
    store
}

fn camper_resource(store: &Arc<MemoryStore>, fields: &[&str]) -> Resource {
    Resource::new(
        Arc::new(StoreListHandler::new(store.clone(), "campers")),
        AllowlistSerializer::new("campers", fields.iter().copied()),
    )
}

#[test]
fn test_unregistered_pairs_do_not_resolve() {
    let store = seeded_store();
    let registry = ResourceRegistry::new();
    registry
        .register(
            ApiVersion::V1,
            "campers",
            camper_resource(&store, &["id", "name", "campsite_id"]),
        )
        .unwrap();

    assert!(registry.get(ApiVersion::V1, "campers").is_some());

    // Unknown collection under a known version
    assert!(registry.get(ApiVersion::V1, "rangers").is_none());
    // Known collection under an unregistered version
    assert!(registry.get(ApiVersion::new(2).unwrap(), "campers").is_none());
    // Case matters: dispatch is a table lookup, not a convention
    assert!(registry.get(ApiVersion::V1, "Campers").is_none());
}

#[test]
fn test_two_generations_dispatch_independently() {
    let store = seeded_store();
    let v2 = ApiVersion::new(2).unwrap();

    let registry = ResourceRegistry::new();
    registry
        .register(
            ApiVersion::V1,
            "campers",
            camper_resource(&store, &["id", "name", "campsite_id"]),
        )
        .unwrap();
    // The next generation narrows the exposed field set
    registry
        .register(v2, "campers", camper_resource(&store, &["id", "name"]))
        .unwrap();

    let v1_resource = registry.get(ApiVersion::V1, "campers").unwrap();
    let v2_resource = registry.get(v2, "campers").unwrap();

    let records = v1_resource.handler.list().unwrap();

    let v1_body = v1_resource.serializer.serialize_collection(&records);
    let v2_body = v2_resource.serializer.serialize_collection(&records);

    assert_eq!(
        v1_body,
        json!({"campers": [{"id": 1, "name": "Rovaira", "campsite_id": 1}]})
    );
    assert_eq!(v2_body, json!({"campers": [{"id": 1, "name": "Rovaira"}]}));
}

#[test]
fn test_registering_a_taken_slot_fails_and_keeps_the_original() {
    let store = seeded_store();
    let registry = ResourceRegistry::new();

    registry
        .register(
            ApiVersion::V1,
            "campers",
            camper_resource(&store, &["id", "name", "campsite_id"]),
        )
        .unwrap();

    let result = registry.register(
        ApiVersion::V1,
        "campers",
        camper_resource(&store, &["id"]),
    );
    assert!(result.is_err());

    // Original registration survives
    let resource = registry.get(ApiVersion::V1, "campers").unwrap();
    assert_eq!(resource.serializer.fields(), ["id", "name", "campsite_id"]);
}

#[test]
fn test_version_segments_parse_strictly() {
    assert_eq!(ApiVersion::parse("v1"), Some(ApiVersion::V1));
    assert_eq!(ApiVersion::parse("v2"), ApiVersion::new(2));

    for bad in ["", "1", "v", "v0", "v01", "V1", "v1x", "vone"] {
        assert_eq!(ApiVersion::parse(bad), None, "segment {:?} must not parse", bad);
    }
}

#[test]
fn test_route_table_lists_every_registration() {
    let store = seeded_store();
    let v2 = ApiVersion::new(2).unwrap();

    let registry = ResourceRegistry::new();
    registry
        .register(v2, "campers", camper_resource(&store, &["id", "name"]))
        .unwrap();
    registry
        .register(
            ApiVersion::V1,
            "campers",
            camper_resource(&store, &["id", "name", "campsite_id"]),
        )
        .unwrap();

    assert_eq!(
        registry.routes(),
        vec![
            (ApiVersion::V1, "campers".to_string()),
            (v2, "campers".to_string()),
        ]
    );
}
