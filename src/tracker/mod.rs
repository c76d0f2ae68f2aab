//! The imperative shell that owns the tracker's state.
//!
//! Everything under `core` is pure; `Tracker` is the single owner that
//! threads those pure functions together with persistence and rendering.
//! Each mutation follows the same sequence: compute the new map, save it,
//! then let the caller re-render from the updated state. That keeps the
//! side effects in one place and the rest of the crate unit-testable
//! without storage or a rendering surface.

use crate::core::{
    build_rows, Country, CountryRecord, CountryStatusMap, Stats, Status, StatusFilter,
};
use crate::render::{MapSurface, MapView, Palette};
use crate::store::{Slot, Store, StoreError};
use crate::transfer::{export_document, import_document, TransferError};
use tracing::{debug, info, warn};

mod builder;
mod error;

pub use builder::TrackerBuilder;
pub use error::{BuildError, TrackerError};

/// Owner of the country status map and the only component with side
/// effects.
///
/// Single-threaded by design: the embedding UI serializes user actions,
/// so the tracker takes `&mut self` for mutation and carries no internal
/// locking.
///
/// # Example
///
/// ```rust
/// use waymark::store::MemorySlot;
/// use waymark::{Status, Tracker};
///
/// let mut tracker = Tracker::open(MemorySlot::new());
///
/// // Fresh state: the home seed only.
/// assert_eq!(tracker.stats().lived, 1);
///
/// // A click on France advances it through the cycle and persists.
/// assert_eq!(tracker.advance("FR")?, Status::Transited);
/// assert_eq!(tracker.stats().total, 2);
/// # Ok::<(), waymark::store::StoreError>(())
/// ```
pub struct Tracker<S: Slot> {
    store: Store<S>,
    seed: CountryStatusMap,
    world_count: u32,
    palette: Palette,
    show_country_names: bool,
    map: CountryStatusMap,
}

impl<S: Slot> Tracker<S> {
    /// Open a tracker on `slot` with the stock defaults, loading whatever
    /// state the slot holds merged over the home seed.
    pub fn open(slot: S) -> Self {
        Self::with_config(
            slot,
            CountryStatusMap::home_seed(),
            crate::core::WORLD_COUNTRY_COUNT,
            Palette::default(),
            true,
        )
    }

    pub(crate) fn with_config(
        slot: S,
        seed: CountryStatusMap,
        world_count: u32,
        palette: Palette,
        show_country_names: bool,
    ) -> Self {
        let store = Store::new(slot);
        let map = store.load(&seed);
        Self {
            store,
            seed,
            world_count,
            palette,
            show_country_names,
            map,
        }
    }

    /// Current status of `code`.
    pub fn status_of(&self, code: &str) -> Status {
        self.map.status_of(code)
    }

    /// Read access to the working map.
    pub fn map(&self) -> &CountryStatusMap {
        &self.map
    }

    /// The configured world-country denominator.
    pub fn world_count(&self) -> u32 {
        self.world_count
    }

    /// Apply one click on `code`: advance its status and persist.
    ///
    /// Returns the new status. A failed save propagates; the in-memory
    /// transition stands regardless, an accepted inconsistency of the
    /// design.
    pub fn advance(&mut self, code: &str) -> Result<Status, StoreError> {
        let next = self.map.advance(code);
        debug!(country = code, status = %next, "status advanced");
        self.store.save(&self.map)?;
        Ok(next)
    }

    /// Statistics derived from the current map.
    pub fn stats(&self) -> Stats {
        Stats::compute(&self.map, self.world_count)
    }

    /// Filtered, sorted list rows for the current map.
    pub fn rows(
        &self,
        all_countries: &[Country],
        keyword: &str,
        status_filter: &StatusFilter,
    ) -> Vec<CountryRecord> {
        build_rows(all_countries, &self.map, keyword, status_filter)
    }

    /// The frame the rendering surface should draw for the current map.
    pub fn map_view(&self) -> MapView {
        MapView::build(&self.map, &self.palette, self.show_country_names)
    }

    /// Present the current frame on `surface` and return its country
    /// list.
    ///
    /// The list is read strictly after `present` returns (the surface's
    /// completion signal), so derived views built from it can never
    /// observe a half-constructed map.
    pub fn render(&self, surface: &mut impl MapSurface) -> Vec<Country> {
        surface.present(&self.map_view());
        surface.countries()
    }

    /// The current map as a pretty-printed export document.
    pub fn export(&self) -> Result<String, TransferError> {
        export_document(&self.map)
    }

    /// Replace current state with an imported document merged over the
    /// seed, and persist immediately.
    ///
    /// A malformed document leaves both the in-memory state and the
    /// persisted copy untouched; the error is returned for the UI to
    /// surface.
    pub fn import(&mut self, text: &str) -> Result<(), TrackerError> {
        let imported = match import_document(text) {
            Ok(imported) => imported,
            Err(e) => {
                warn!(error = %e, "import rejected");
                return Err(e.into());
            }
        };

        self.map = self.seed.overlaid_with(&imported);
        self.store.save(&self.map)?;
        info!(countries = self.map.len(), "travel state imported");
        Ok(())
    }

    /// Clear persisted state and reseed from defaults.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.store.clear()?;
        self.map = self.store.load(&self.seed);
        info!("travel state reset");
        Ok(())
    }
}
