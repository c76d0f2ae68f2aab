//! Property-based tests for the tracker core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use waymark::store::{MemorySlot, Store};
use waymark::transfer::{export_document, import_document};
use waymark::{
    build_rows, Country, CountryStatusMap, Stats, Status, StatusFilter, Tracker,
    WORLD_COUNTRY_COUNT,
};

prop_compose! {
    fn arbitrary_status()(variant in 0..4u8) -> Status {
        match variant {
            0 => Status::None,
            1 => Status::Transited,
            2 => Status::Visited,
            _ => Status::Lived,
        }
    }
}

prop_compose! {
    fn marked_status()(variant in 0..3u8) -> Status {
        match variant {
            0 => Status::Transited,
            1 => Status::Visited,
            _ => Status::Lived,
        }
    }
}

prop_compose! {
    fn country_code()(code in "[A-Z]{2}") -> String {
        code
    }
}

fn arbitrary_map() -> impl Strategy<Value = CountryStatusMap> {
    prop::collection::btree_map(country_code(), marked_status(), 0..12).prop_map(|entries| {
        let mut map = CountryStatusMap::new();
        for (code, status) in entries {
            map.set(&code, status);
        }
        map
    })
}

proptest! {
    #[test]
    fn next_is_a_four_cycle(status in arbitrary_status()) {
        let around = status.next().next().next().next();
        prop_assert_eq!(around, status);
    }

    #[test]
    fn next_never_repeats_immediately(status in arbitrary_status()) {
        prop_assert_ne!(status.next(), status);
    }

    #[test]
    fn unrecognized_advances_like_none(raw in "[a-z]{5,10}") {
        prop_assume!(!matches!(raw.as_str(), "none" | "transited" | "visited" | "lived"));
        let status = Status::from(raw);
        prop_assert_eq!(status.next(), Status::None.next());
    }

    #[test]
    fn stats_total_counts_marked_entries(map in arbitrary_map()) {
        let stats = Stats::compute(&map, WORLD_COUNTRY_COUNT);
        prop_assert_eq!(stats.total, stats.lived + stats.visited + stats.transited);
        prop_assert_eq!(stats.total, map.len());
    }

    #[test]
    fn percent_is_bounded_by_the_denominator(map in arbitrary_map(), world in 1..400u32) {
        let stats = Stats::compute(&map, world);
        prop_assert!(stats.percent_of_world >= 0.0);
        prop_assert!(stats.percent_of_world <= (map.len() as f64 / world as f64) * 100.0 + 0.05);
    }

    #[test]
    fn export_import_round_trips(map in arbitrary_map()) {
        let doc = export_document(&map).unwrap();
        let parsed = import_document(&doc).unwrap();
        prop_assert_eq!(parsed, map);
    }

    #[test]
    fn import_applies_seed_then_overlay(map in arbitrary_map()) {
        let doc = export_document(&map).unwrap();

        let mut tracker = Tracker::open(MemorySlot::new());
        tracker.import(&doc).unwrap();

        let expected = CountryStatusMap::home_seed().overlaid_with(&map);
        prop_assert_eq!(tracker.map(), &expected);
    }

    #[test]
    fn save_then_load_preserves_every_entry(map in arbitrary_map()) {
        let store = Store::new(MemorySlot::new());
        store.save(&map).unwrap();

        let seed = CountryStatusMap::new();
        prop_assert_eq!(store.load(&seed), map);
    }

    #[test]
    fn advancing_a_lived_entry_removes_it(code in country_code()) {
        let mut map = CountryStatusMap::new();
        map.set(&code, Status::Lived);

        let next = map.advance(&code);
        prop_assert_eq!(next, Status::None);
        prop_assert!(!map.contains(&code));

        let stats = Stats::compute(&map, WORLD_COUNTRY_COUNT);
        prop_assert_eq!(stats.total, 0);
    }

    #[test]
    fn advance_keeps_the_no_explicit_none_invariant(
        codes in prop::collection::vec(country_code(), 1..20)
    ) {
        let mut map = CountryStatusMap::new();
        for code in &codes {
            map.advance(code);
        }

        for (_, status) in map.iter() {
            prop_assert!(!status.is_none());
        }

        let stats = Stats::compute(&map, WORLD_COUNTRY_COUNT);
        prop_assert_eq!(stats.total, map.len());
    }

    #[test]
    fn rows_are_sorted_and_filter_consistent(
        map in arbitrary_map(),
        keyword in "[a-zA-Z]{0,3}"
    ) {
        let all: Vec<Country> = map
            .iter()
            .map(|(code, _)| Country::new(code, format!("Land of {code}")))
            .collect();

        let rows = build_rows(&all, &map, &keyword, &StatusFilter::All);

        for pair in rows.windows(2) {
            prop_assert!(
                pair[0].display_name.to_lowercase() <= pair[1].display_name.to_lowercase()
            );
        }

        let needle = keyword.trim().to_lowercase();
        for row in &rows {
            prop_assert!(row.display_name.to_lowercase().contains(&needle));
            prop_assert_eq!(&row.status, &map.status_of(&row.code));
        }
    }
}
