//! # Collection Declarations
//!
//! A collection must be declared before the store will hold records for
//! it. The declaration names the collection and any foreign keys its
//! records carry; the store enforces those references on create.

use serde::{Deserialize, Serialize};

/// Fields the store assigns itself. Client input must not carry them.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// A foreign key from one collection's records to another collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Field on the child record holding the parent id
    pub field: String,

    /// Parent collection name
    pub parent: String,
}

impl ForeignKey {
    pub fn new(field: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            parent: parent.into(),
        }
    }
}

/// Declaration of one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSpec {
    /// Collection name (pluralized entity type, e.g. "campers")
    pub name: String,

    /// Foreign keys every record in this collection must satisfy
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
}

impl CollectionSpec {
    /// Declare a collection with no foreign keys
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foreign_keys: Vec::new(),
        }
    }

    /// Add a foreign key declaration
    pub fn with_foreign_key(mut self, field: impl Into<String>, parent: impl Into<String>) -> Self {
        self.foreign_keys.push(ForeignKey::new(field, parent));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = CollectionSpec::new("campers").with_foreign_key("campsite_id", "campsites");

        assert_eq!(spec.name, "campers");
        assert_eq!(spec.foreign_keys.len(), 1);
        assert_eq!(spec.foreign_keys[0].field, "campsite_id");
        assert_eq!(spec.foreign_keys[0].parent, "campsites");
    }

    #[test]
    fn test_spec_without_foreign_keys() {
        let spec = CollectionSpec::new("campsites");
        assert!(spec.foreign_keys.is_empty());
    }

    #[test]
    fn test_reserved_fields_cover_store_owned_columns() {
        assert!(RESERVED_FIELDS.contains(&"id"));
        assert!(RESERVED_FIELDS.contains(&"created_at"));
        assert!(RESERVED_FIELDS.contains(&"updated_at"));
    }
}
