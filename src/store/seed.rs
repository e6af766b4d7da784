//! # Seed Loading
//!
//! Populates a store from a JSON seed file at boot. The file maps
//! collection names to arrays of client-style field maps (no ids, no
//! timestamps). Collections load in store declaration order, parents
//! before children, so foreign keys in the file resolve regardless of
//! the file's own key order.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::memory::MemoryStore;

/// Load a seed file into the store, returning the number of records created
pub fn load_seed(store: &MemoryStore, path: &Path) -> StoreResult<usize> {
    let content = fs::read_to_string(path)
        .map_err(|e| StoreError::Seed(format!("failed to read {}: {}", path.display(), e)))?;

    let parsed: Value = serde_json::from_str(&content)
        .map_err(|e| StoreError::Seed(format!("invalid seed JSON: {}", e)))?;
    let sections = parsed
        .as_object()
        .ok_or_else(|| StoreError::Seed("seed file must be a JSON object".to_string()))?;

    let declared = store.collections();
    for key in sections.keys() {
        if !declared.iter().any(|name| name == key) {
            return Err(StoreError::Seed(format!(
                "unknown collection '{}' in seed file",
                key
            )));
        }
    }

    let mut loaded = 0;
    for name in &declared {
        let Some(entries) = sections.get(name) else {
            continue;
        };
        let entries = entries.as_array().ok_or_else(|| {
            StoreError::Seed(format!("seed entries for '{}' must be an array", name))
        })?;

        for entry in entries {
            store.create(name, entry.clone())?;
            loaded += 1;
        }
    }

    Ok(loaded)
}
