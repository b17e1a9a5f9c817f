//! Typed access to the entitlement state record.

use repolens_core::entitlement::EntitlementState;

use crate::{KeyValueStore, StoreError, StoreResult, ENTITLEMENT_STATE_KEY};

/// Repository for the entitlement state blob.
///
/// The record is written wholesale as one JSON value under
/// [`ENTITLEMENT_STATE_KEY`]; there is no merge or partial update. There is
/// also no versioning: a blob that no longer parses is treated as absent
/// (logged), and missing fields inside a parseable blob fall back to serde
/// defaults in the domain type.
pub struct EntitlementRepo;

impl EntitlementRepo {
    /// Load the stored record, or `None` when no (readable) record exists.
    ///
    /// Callers treat `None` as "free tier, default limits".
    pub fn load(store: &dyn KeyValueStore) -> StoreResult<Option<EntitlementState>> {
        let Some(raw) = store.get(ENTITLEMENT_STATE_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(error) => {
                tracing::warn!(%error, "Unreadable entitlement blob, treating as absent");
                Ok(None)
            }
        }
    }

    /// Overwrite the stored record.
    pub fn save(store: &dyn KeyValueStore, state: &EntitlementState) -> StoreResult<()> {
        let raw = serde_json::to_string(state).map_err(|source| StoreError::Encode {
            key: ENTITLEMENT_STATE_KEY.to_owned(),
            source,
        })?;
        store.set(ENTITLEMENT_STATE_KEY, &raw)
    }

    /// Delete the stored record.
    pub fn clear(store: &dyn KeyValueStore) -> StoreResult<()> {
        store.clear(ENTITLEMENT_STATE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryStore, NullStore};
    use chrono::Utc;

    #[test]
    fn absent_record_loads_as_none() {
        let store = MemoryStore::new();
        assert!(EntitlementRepo::load(&store).unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips_deep_equal() {
        let store = MemoryStore::new();
        let state = EntitlementState::forced_business(Utc::now());

        EntitlementRepo::save(&store, &state).unwrap();
        let loaded = EntitlementRepo::load(&store).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn save_overwrites_rather_than_merges() {
        let store = MemoryStore::new();
        EntitlementRepo::save(&store, &EntitlementState::forced_business(Utc::now())).unwrap();
        EntitlementRepo::save(&store, &EntitlementState::free()).unwrap();

        let loaded = EntitlementRepo::load(&store).unwrap().unwrap();
        assert_eq!(loaded, EntitlementState::free());
    }

    #[test]
    fn corrupt_blob_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(ENTITLEMENT_STATE_KEY, "not json {{").unwrap();
        assert!(EntitlementRepo::load(&store).unwrap().is_none());
    }

    #[test]
    fn clear_removes_the_record() {
        let store = MemoryStore::new();
        EntitlementRepo::save(&store, &EntitlementState::free()).unwrap();
        EntitlementRepo::clear(&store).unwrap();
        assert!(EntitlementRepo::load(&store).unwrap().is_none());
    }

    #[test]
    fn unavailable_storage_degrades_to_absent() {
        let store = NullStore;
        EntitlementRepo::save(&store, &EntitlementState::free()).unwrap();
        assert!(EntitlementRepo::load(&store).unwrap().is_none());
    }
}
