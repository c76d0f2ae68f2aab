//! Waymark: a personal travel-status tracker
//!
//! Waymark keeps a map of the world's countries, each marked with one of
//! four visitation states, and persists the result to a single durable
//! slot. It follows the "pure core, imperative shell" philosophy: status
//! transitions, statistics and list filtering are pure functions with no
//! side effects, while persistence and rendering are isolated behind the
//! [`Tracker`] owner and the [`render::MapSurface`] seam.
//!
//! # Core Concepts
//!
//! - **Status**: the four-state cycle a country clicks through
//!   (`none -> transited -> visited -> lived -> none`)
//! - **CountryStatusMap**: the working set of non-default statuses;
//!   absence of an entry *is* the `none` status
//! - **Seed**: the baseline state (home country marked `lived`), merged
//!   under every load and import
//! - **Tracker**: the single owner that applies transitions, saves, and
//!   hands derived views to the UI
//!
//! # Example
//!
//! ```rust
//! use waymark::store::MemorySlot;
//! use waymark::{Country, Status, StatusFilter, Tracker};
//!
//! let mut tracker = Tracker::open(MemorySlot::new());
//!
//! // Click France twice: none -> transited -> visited.
//! tracker.advance("FR")?;
//! assert_eq!(tracker.advance("FR")?, Status::Visited);
//!
//! let stats = tracker.stats();
//! assert_eq!(stats.lived, 1); // the home seed
//! assert_eq!(stats.total, 2);
//!
//! let countries = vec![
//!     Country::new("FR", "France"),
//!     Country::new("JP", "Japan"),
//! ];
//! let rows = tracker.rows(&countries, "", &StatusFilter::Only(Status::Visited));
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].display_name, "France");
//! # Ok::<(), waymark::store::StoreError>(())
//! ```

pub mod core;
pub mod render;
pub mod store;
pub mod tracker;
pub mod transfer;

// Re-export commonly used types
pub use crate::core::{
    build_rows, Country, CountryRecord, CountryStatusMap, Stats, Status, StatusFilter,
    HOME_COUNTRY, WORLD_COUNTRY_COUNT,
};
pub use render::{MapSurface, MapView, Palette};
pub use tracker::{Tracker, TrackerBuilder};
