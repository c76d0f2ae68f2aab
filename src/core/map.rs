//! The working set of country statuses.
//!
//! `CountryStatusMap` is the single piece of state the whole tracker
//! revolves around: a mapping from country code to [`Status`], holding only
//! countries whose status differs from `None`. Absence of an entry *is*
//! the `None` status, which keeps the map, the persisted document and the
//! export document minimal.

use super::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Country code of the default seed entry.
pub const HOME_COUNTRY: &str = "JP";

/// Mapping from country code to visitation status.
///
/// Country codes are short ISO-like strings; uniqueness comes from map-key
/// semantics and no authoritative validation is performed. Mutation goes
/// through [`set`](Self::set) and [`advance`](Self::advance), which uphold
/// the invariant that no explicit `None` entry is stored. Maps
/// deserialized from external documents are trusted structurally and kept
/// as-is.
///
/// # Example
///
/// ```rust
/// use waymark::{CountryStatusMap, Status};
///
/// let mut map = CountryStatusMap::new();
/// assert_eq!(map.advance("FR"), Status::Transited);
/// assert_eq!(map.advance("FR"), Status::Visited);
/// assert_eq!(map.status_of("DE"), Status::None);
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryStatusMap(BTreeMap<String, Status>);

impl CountryStatusMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The default seed state: the home country, marked `Lived`.
    ///
    /// Applied whenever no valid persisted state exists, and merged under
    /// every load and import.
    pub fn home_seed() -> Self {
        Self::with_home(HOME_COUNTRY)
    }

    /// A seed state with `home` marked `Lived`.
    pub fn with_home(home: &str) -> Self {
        let mut map = Self::new();
        map.set(home, Status::Lived);
        map
    }

    /// Current status of `code`; `None` when no entry is stored.
    pub fn status_of(&self, code: &str) -> Status {
        self.0.get(code).cloned().unwrap_or(Status::None)
    }

    /// Set the status of `code`.
    ///
    /// Setting `Status::None` removes the entry instead of storing it.
    pub fn set(&mut self, code: &str, status: Status) {
        if status == Status::None {
            self.0.remove(code);
        } else {
            self.0.insert(code.to_owned(), status);
        }
    }

    /// Apply one click: advance `code` to the next status in the cycle.
    ///
    /// Returns the new status. When the cycle wraps to `None` the entry is
    /// removed entirely. This is the transition application shared by the
    /// map-click and list-click paths.
    pub fn advance(&mut self, code: &str) -> Status {
        let next = self.status_of(code).next();
        self.set(code, next.clone());
        next
    }

    /// Seed-then-overlay merge: a copy of `self` with every entry of
    /// `overlay` written over it.
    ///
    /// Overlay entries win for shared keys, but a seed key the overlay
    /// lacks reappears from the seed. Both load and import merge this way,
    /// which is why the home entry can be restatused but never lost.
    pub fn overlaid_with(&self, overlay: &CountryStatusMap) -> CountryStatusMap {
        let mut merged = self.clone();
        for (code, status) in &overlay.0 {
            merged.0.insert(code.clone(), status.clone());
        }
        merged
    }

    /// Whether `code` has a stored entry.
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(code, status)` entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Status)> {
        self.0.iter().map(|(code, status)| (code.as_str(), status))
    }
}
