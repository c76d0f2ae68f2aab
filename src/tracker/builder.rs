//! Builder for configuring and opening a tracker.

use super::error::BuildError;
use super::Tracker;
use crate::core::{CountryStatusMap, WORLD_COUNTRY_COUNT};
use crate::render::Palette;
use crate::store::Slot;

/// Builder for a [`Tracker`] with a fluent API.
///
/// Only the storage slot is required; seed, world count and palette all
/// have the stock defaults.
///
/// # Example
///
/// ```rust
/// use waymark::store::MemorySlot;
/// use waymark::{CountryStatusMap, TrackerBuilder};
///
/// let tracker = TrackerBuilder::new()
///     .slot(MemorySlot::new())
///     .seed(CountryStatusMap::with_home("NO"))
///     .world_count(195)
///     .build()?;
///
/// assert_eq!(tracker.stats().lived, 1);
/// # Ok::<(), waymark::tracker::BuildError>(())
/// ```
pub struct TrackerBuilder<S: Slot> {
    slot: Option<S>,
    seed: CountryStatusMap,
    world_count: u32,
    palette: Palette,
    show_country_names: bool,
}

impl<S: Slot> TrackerBuilder<S> {
    /// Create a builder with the stock defaults: home seed `JP: lived`,
    /// world count 195, stock palette, country names shown.
    pub fn new() -> Self {
        Self {
            slot: None,
            seed: CountryStatusMap::home_seed(),
            world_count: WORLD_COUNTRY_COUNT,
            palette: Palette::default(),
            show_country_names: true,
        }
    }

    /// Set the durable slot state is loaded from and saved to (required).
    pub fn slot(mut self, slot: S) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Replace the default seed entirely.
    pub fn seed(mut self, seed: CountryStatusMap) -> Self {
        self.seed = seed;
        self
    }

    /// Shorthand: seed with `home` marked `Lived`.
    pub fn home(self, home: &str) -> Self {
        self.seed(CountryStatusMap::with_home(home))
    }

    /// Denominator for the percentage-of-world statistic.
    pub fn world_count(mut self, world_count: u32) -> Self {
        self.world_count = world_count;
        self
    }

    /// Replace the display palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Whether map views ask the surface to label countries.
    pub fn show_country_names(mut self, show: bool) -> Self {
        self.show_country_names = show;
        self
    }

    /// Build the tracker, loading persisted state merged over the seed.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Tracker<S>, BuildError> {
        let slot = self.slot.ok_or(BuildError::MissingSlot)?;

        Ok(Tracker::with_config(
            slot,
            self.seed,
            self.world_count,
            self.palette,
            self.show_country_names,
        ))
    }
}

impl<S: Slot> Default for TrackerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
