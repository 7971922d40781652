//! Storage accessor for the persisted staff list.
//!
//! The `medicos` slot normally holds a plain JSON array of profiles. Older
//! writers wrapped the array as `{"data": [...]}`; both shapes are read,
//! only the plain array is ever written.

use serde_json::Value;

use crate::config::STORAGE_KEY;
use crate::db::{DatabaseError, KeyValueStore};
use crate::models::Profile;
use crate::seed;

/// Parse a raw slot value. A bare array or `{"data": [...]}` yields its
/// entries; any other shape, or unparseable JSON, is an empty list.
/// Entries are decoded one by one: a non-object entry becomes a default
/// profile instead of discarding its neighbours.
fn normalize(raw: &str) -> Vec<Profile> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(Value::Object(mut wrapper)) => match wrapper.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}

/// Every stored profile in display order. Never fails: a missing slot,
/// a store read error, malformed JSON or an unexpected shape all read as
/// an empty list.
pub fn read_all(store: &impl KeyValueStore) -> Vec<Profile> {
    match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) if !raw.is_empty() => normalize(&raw),
        _ => Vec::new(),
    }
}

/// Replace the stored list, always as a plain JSON array.
pub fn write_all(store: &mut impl KeyValueStore, list: &[Profile]) -> Result<(), DatabaseError> {
    let json = serde_json::to_string(list)?;
    store.set_item(STORAGE_KEY, &json)
}

/// Write the built-in seed when storage reads empty. Returns whether it did.
pub fn ensure_seed(store: &mut impl KeyValueStore) -> Result<bool, DatabaseError> {
    if !read_all(store).is_empty() {
        return Ok(false);
    }
    let seed = seed::seed_profiles();
    write_all(store, &seed)?;
    tracing::info!(profiles = seed.len(), "Seeded staff directory storage");
    Ok(true)
}
