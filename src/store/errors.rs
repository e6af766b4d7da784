//! # Store Errors
//!
//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Collection was never declared on this store
    #[error("Collection not declared: {0}")]
    UndeclaredCollection(String),

    /// Record body is not usable as a record
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Client input carried a store-owned field
    #[error("Field '{0}' is assigned by the store and must not be supplied")]
    ReservedField(String),

    /// Foreign key does not reference an existing parent record
    #[error("Field '{field}' references {parent} id {value}, which does not exist")]
    UnknownParent {
        field: String,
        parent: String,
        value: u64,
    },

    /// Parent record is still referenced by a child collection
    #[error("Cannot remove {collection} id {id}: still referenced by {child}")]
    ParentInUse {
        collection: String,
        id: u64,
        child: String,
    },

    /// Seed file could not be read or parsed
    #[error("Seed error: {0}")]
    Seed(String),

    /// Interior lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}
