//! Boundary glue toward the map rendering surface.
//!
//! The rendering surface is an external collaborator: it takes a
//! country-to-color mapping plus a couple of display flags, draws the
//! world, and reports clicks back as country codes. This module owns the
//! translation in both directions: [`MapView`] is everything the surface
//! consumes, and the [`MapSurface`] trait is the seam a concrete surface
//! implements.

use crate::core::{Country, CountryStatusMap, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four display colors, one per status.
///
/// Unknown or absent statuses always fall back to the `none` color; a
/// color lookup never errors.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Palette {
    pub lived: String,
    pub visited: String,
    pub transited: String,
    pub none: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            lived: "#2b7cff".to_owned(),
            visited: "#1db954".to_owned(),
            transited: "#ff9f2f".to_owned(),
            none: "#2a2e39".to_owned(),
        }
    }
}

impl Palette {
    /// Color for a status, `none`'s color for anything unrecognized.
    pub fn color_for(&self, status: &Status) -> &str {
        match status.normalized() {
            Status::Lived => &self.lived,
            Status::Visited => &self.visited,
            Status::Transited => &self.transited,
            Status::None | Status::Unrecognized(_) => &self.none,
        }
    }
}

/// Parallel mapping from country code to display color, one entry per
/// stored status.
pub fn color_map(map: &CountryStatusMap, palette: &Palette) -> BTreeMap<String, String> {
    map.iter()
        .map(|(code, status)| (code.to_owned(), palette.color_for(status).to_owned()))
        .collect()
}

/// Everything the rendering surface consumes for one frame.
#[derive(Clone, PartialEq, Debug)]
pub struct MapView {
    /// Fill color for countries with no stored status.
    pub base_color: String,
    /// Per-country overrides for marked countries.
    pub colors: BTreeMap<String, String>,
    /// Whether the surface should label countries with their names.
    pub show_country_names: bool,
}

impl MapView {
    pub fn build(map: &CountryStatusMap, palette: &Palette, show_country_names: bool) -> Self {
        Self {
            base_color: palette.none.clone(),
            colors: color_map(map, palette),
            show_country_names,
        }
    }
}

/// The opaque rendering surface.
///
/// `present` draws one frame; *returning from it is the completion
/// signal* that the surface has finished producing its country elements.
/// Callers sequence dependent work (list rows, statistics) strictly after
/// that return, so there is no deferred-callback race between the map and
/// the views derived from it. `countries` is only meaningful once
/// `present` has returned at least once.
///
/// Click events travel the other way: the surface hands the embedding UI
/// a country code, and the UI feeds it to `Tracker::advance`.
pub trait MapSurface {
    /// Draw the frame. Completion is signalled by returning.
    fn present(&mut self, view: &MapView);

    /// The full list of countries the surface knows, code/name pairs.
    fn countries(&self) -> Vec<Country>;
}
