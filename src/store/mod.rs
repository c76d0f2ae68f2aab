//! Persistence of the country status map.
//!
//! The tracker keeps its whole state in one durable slot as a flat JSON
//! object (`{"JP":"lived","FR":"visited"}`). Loading merges whatever is
//! stored over the default seed; anything missing or unparsable silently
//! reseeds. Saving serializes the full map and overwrites the slot
//! unconditionally. Only writes can fail, and those failures propagate.

use crate::core::CountryStatusMap;
use tracing::{debug, warn};

mod error;
mod slot;

pub use error::StoreError;
pub use slot::{FileSlot, MemorySlot, Slot};

/// Default storage key. The format is versioned implicitly by this name;
/// a future format change gets a new key, not a migration.
pub const DEFAULT_STORAGE_KEY: &str = "travel_map_v1";

/// Load/save of a [`CountryStatusMap`] through a [`Slot`].
///
/// # Example
///
/// ```rust
/// use waymark::store::{MemorySlot, Store};
/// use waymark::{CountryStatusMap, Status};
///
/// let store = Store::new(MemorySlot::new());
/// let seed = CountryStatusMap::home_seed();
///
/// // Nothing persisted yet: load returns a copy of the seed.
/// let mut map = store.load(&seed);
/// assert_eq!(map.status_of("JP"), Status::Lived);
///
/// map.advance("FR");
/// store.save(&map)?;
/// assert_eq!(store.load(&seed), map);
/// # Ok::<(), waymark::store::StoreError>(())
/// ```
pub struct Store<S: Slot> {
    slot: S,
}

impl<S: Slot> Store<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Load persisted state merged over `seed`.
    ///
    /// Total: a missing slot yields a copy of the seed, and an unreadable
    /// or unparsable slot is treated as corruption, recovered silently
    /// with a `warn!` and never surfaced to the caller. Otherwise the stored
    /// entries overlay the seed (stored entries win for shared keys; seed
    /// keys the stored value lacks reappear from the seed).
    pub fn load(&self, seed: &CountryStatusMap) -> CountryStatusMap {
        let raw = match self.slot.read() {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "persisted travel state unreadable, reseeding");
                return seed.clone();
            }
        };

        let Some(raw) = raw else {
            return seed.clone();
        };

        match serde_json::from_str::<CountryStatusMap>(&raw) {
            Ok(stored) => seed.overlaid_with(&stored),
            Err(e) => {
                warn!(error = %e, "persisted travel state corrupt, reseeding");
                seed.clone()
            }
        }
    }

    /// Serialize the full map and overwrite the slot.
    pub fn save(&self, map: &CountryStatusMap) -> Result<(), StoreError> {
        let document = serde_json::to_string(map)?;
        self.slot
            .write(&document)
            .map_err(|source| StoreError::Write {
                operation: "write",
                source,
            })?;
        debug!(countries = map.len(), "travel state saved");
        Ok(())
    }

    /// Remove the persisted value entirely (the reset path).
    pub fn clear(&self) -> Result<(), StoreError> {
        self.slot.clear().map_err(|source| StoreError::Write {
            operation: "clear",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    fn seed() -> CountryStatusMap {
        CountryStatusMap::home_seed()
    }

    #[test]
    fn fresh_slot_loads_seed_copy() {
        let store = Store::new(MemorySlot::new());

        let map = store.load(&seed());
        assert_eq!(map, seed());
        assert_eq!(map.status_of("JP"), Status::Lived);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn load_merges_stored_entries_over_seed() {
        let store = Store::new(MemorySlot::with_contents(r#"{"FR":"visited"}"#));

        let map = store.load(&seed());
        assert_eq!(map.status_of("JP"), Status::Lived);
        assert_eq!(map.status_of("FR"), Status::Visited);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn stored_entry_overrides_seed_status() {
        let store = Store::new(MemorySlot::with_contents(r#"{"JP":"visited"}"#));

        let map = store.load(&seed());
        assert_eq!(map.status_of("JP"), Status::Visited);
    }

    #[test]
    fn corrupt_slot_falls_back_to_seed() {
        let store = Store::new(MemorySlot::with_contents("{not json"));

        let map = store.load(&seed());
        assert_eq!(map, seed());
    }

    #[test]
    fn non_object_document_counts_as_corrupt() {
        let store = Store::new(MemorySlot::with_contents(r#"["JP"]"#));

        let map = store.load(&seed());
        assert_eq!(map, seed());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = Store::new(MemorySlot::new());

        let mut map = seed();
        map.set("FR", Status::Visited);
        map.set("TH", Status::Transited);
        store.save(&map).unwrap();

        assert_eq!(store.load(&seed()), map);
    }

    #[test]
    fn clear_forgets_persisted_state() {
        let slot = MemorySlot::new();
        let store = Store::new(slot.clone());

        let mut map = seed();
        map.set("FR", Status::Visited);
        store.save(&map).unwrap();

        store.clear().unwrap();
        assert_eq!(slot.snapshot(), None);
        assert_eq!(store.load(&seed()), seed());
    }

    #[test]
    fn save_overwrites_unconditionally() {
        let slot = MemorySlot::with_contents("whatever was here");
        let store = Store::new(slot.clone());

        store.save(&seed()).unwrap();
        assert_eq!(slot.snapshot().as_deref(), Some(r#"{"JP":"lived"}"#));
    }
}
