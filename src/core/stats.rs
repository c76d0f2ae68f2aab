//! Derived statistics over the country status map.

use super::map::CountryStatusMap;
use super::status::Status;
use serde::Serialize;

/// Denominator used for the percentage-of-world statistic when the caller
/// has nothing better.
pub const WORLD_COUNTRY_COUNT: u32 = 195;

/// Counts and world coverage derived from a [`CountryStatusMap`].
///
/// Never stored; recomputed from the map after every mutation.
///
/// # Example
///
/// ```rust
/// use waymark::{CountryStatusMap, Stats, Status, WORLD_COUNTRY_COUNT};
///
/// let mut map = CountryStatusMap::home_seed();
/// map.set("FR", Status::Visited);
///
/// let stats = Stats::compute(&map, WORLD_COUNTRY_COUNT);
/// assert_eq!(stats.lived, 1);
/// assert_eq!(stats.visited, 1);
/// assert_eq!(stats.total, 2);
/// assert_eq!(stats.percent_of_world, 1.0);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize)]
pub struct Stats {
    /// Countries marked `Lived`.
    pub lived: usize,
    /// Countries marked `Visited`.
    pub visited: usize,
    /// Countries marked `Transited`.
    pub transited: usize,
    /// Sum of the three counts above.
    pub total: usize,
    /// `total` as a percentage of the world country count, rounded to one
    /// decimal place for display. Zero when the denominator is zero.
    pub percent_of_world: f64,
}

impl Stats {
    /// Derive statistics in a single pass over the map's values.
    ///
    /// Entries holding an unrecognized or explicit-`none` status (only
    /// possible through an unvalidated import) count toward none of the
    /// three buckets and are excluded from `total`.
    pub fn compute(map: &CountryStatusMap, world_count: u32) -> Stats {
        let mut lived = 0;
        let mut visited = 0;
        let mut transited = 0;

        for (_, status) in map.iter() {
            match status {
                Status::Lived => lived += 1,
                Status::Visited => visited += 1,
                Status::Transited => transited += 1,
                Status::None | Status::Unrecognized(_) => {}
            }
        }

        let total = lived + visited + transited;
        let percent_of_world = if world_count == 0 {
            0.0
        } else {
            let raw = total as f64 / world_count as f64 * 100.0;
            (raw * 10.0).round() / 10.0
        };

        Stats {
            lived,
            visited,
            transited,
            total,
            percent_of_world,
        }
    }
}
