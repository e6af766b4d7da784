//! # Record Store
//!
//! The backing store for campground: collections of JSON records held in
//! memory, declared up front with their foreign keys. The store assigns
//! identifiers and timestamps; the HTTP surface only ever reads full
//! collections from it.

pub mod errors;
pub mod memory;
pub mod record;
pub mod seed;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use record::{CollectionSpec, ForeignKey, RESERVED_FIELDS};
pub use seed::load_seed;
