//! Filtered, sorted list rows for the country list view.
//!
//! The list view is derived data: given the rendering surface's full
//! country list and the current status map, [`build_rows`] produces the
//! rows matching the live text and status filters. It is recomputed in
//! full on every filter change; nothing here memoizes.

use super::map::CountryStatusMap;
use super::status::Status;
use serde::{Deserialize, Serialize};

/// A country known to the rendering surface: code plus display name.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// One row of the list view. Ephemeral, rebuilt on every render.
#[derive(Clone, PartialEq, Debug)]
pub struct CountryRecord {
    pub code: String,
    pub display_name: String,
    pub status: Status,
}

/// Status selector of the list view: the `all` sentinel or one exact
/// status.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum StatusFilter {
    /// Matches every record.
    #[default]
    All,
    /// Matches records whose status equals this one, with absent and
    /// unrecognized statuses both comparing as `None`.
    Only(Status),
}

impl StatusFilter {
    /// Parse a selector value from the UI
    /// (`all | none | transited | visited | lived`).
    pub fn parse(selector: &str) -> StatusFilter {
        match selector {
            "all" => StatusFilter::All,
            other => StatusFilter::Only(Status::from(other)),
        }
    }

    fn matches(&self, status: &Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(want) => want.normalized() == status.normalized(),
        }
    }
}

/// Build the list rows for the current filters.
///
/// `keyword` is trimmed and matched case-insensitively as a substring of
/// the display name; empty matches all. Rows come back sorted ascending by
/// display name (case-insensitive, original name as tiebreak).
///
/// # Example
///
/// ```rust
/// use waymark::{build_rows, Country, CountryStatusMap, Status, StatusFilter};
///
/// let countries = vec![
///     Country::new("JP", "Japan"),
///     Country::new("JM", "Jamaica"),
///     Country::new("FR", "France"),
/// ];
/// let map = CountryStatusMap::home_seed();
///
/// let rows = build_rows(&countries, &map, "ja", &StatusFilter::All);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].display_name, "Jamaica");
/// assert_eq!(rows[1].display_name, "Japan");
/// assert_eq!(rows[1].status, Status::Lived);
/// ```
pub fn build_rows(
    all_countries: &[Country],
    map: &CountryStatusMap,
    keyword: &str,
    status_filter: &StatusFilter,
) -> Vec<CountryRecord> {
    let keyword = keyword.trim().to_lowercase();

    let mut rows: Vec<CountryRecord> = all_countries
        .iter()
        .map(|country| CountryRecord {
            code: country.code.clone(),
            display_name: country.name.clone(),
            status: map.status_of(&country.code),
        })
        .filter(|row| keyword.is_empty() || row.display_name.to_lowercase().contains(&keyword))
        .filter(|row| status_filter.matches(&row.status))
        .collect();

    rows.sort_by(|a, b| {
        let key_a = a.display_name.to_lowercase();
        let key_b = b.display_name.to_lowercase();
        key_a
            .cmp(&key_b)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });

    rows
}
