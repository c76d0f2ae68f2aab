//! Travel Log Walkthrough
//!
//! This example demonstrates the full click -> save -> re-render loop
//! against an in-memory slot and a text rendering surface.
//!
//! Key concepts:
//! - The four-state click cycle on the world map
//! - Persistence after every transition
//! - Derived statistics and filtered list rows
//! - The surface completion contract (list and stats read after present)
//!
//! Run with: cargo run --example travel_log

use waymark::store::MemorySlot;
use waymark::{Country, MapSurface, MapView, StatusFilter, Tracker};

/// A rendering surface that "draws" to stdout and knows a handful of
/// countries.
struct TextSurface {
    countries: Vec<Country>,
}

impl MapSurface for TextSurface {
    fn present(&mut self, view: &MapView) {
        println!("  [map] base color {}", view.base_color);
        for (code, color) in &view.colors {
            println!("  [map] {code} painted {color}");
        }
    }

    fn countries(&self) -> Vec<Country> {
        self.countries.clone()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Travel Log Walkthrough ===\n");

    let mut tracker = Tracker::open(MemorySlot::new());
    let mut surface = TextSurface {
        countries: vec![
            Country::new("DE", "Germany"),
            Country::new("FR", "France"),
            Country::new("JM", "Jamaica"),
            Country::new("JP", "Japan"),
            Country::new("TH", "Thailand"),
        ],
    };

    println!("Fresh state (home seed only):");
    tracker.render(&mut surface);
    println!();

    println!("Clicking France twice and Thailand once:");
    for code in ["FR", "FR", "TH"] {
        let status = tracker.advance(code).unwrap();
        println!("  click {code} -> {status}");
    }
    println!();

    println!("Re-rendering after the clicks:");
    // List rows and stats are derived strictly after present returned.
    let countries = tracker.render(&mut surface);

    println!("\nList rows (keyword \"ja\", status filter all):");
    for row in tracker.rows(&countries, "ja", &StatusFilter::All) {
        println!("  {:<10} {:<3} {}", row.display_name, row.code, row.status);
    }

    println!("\nStatistics:");
    let stats = tracker.stats();
    println!("  lived:     {}", stats.lived);
    println!("  visited:   {}", stats.visited);
    println!("  transited: {}", stats.transited);
    println!("  total:     {}", stats.total);
    println!("  world:     {:.1}%", stats.percent_of_world);

    println!("\n=== Example Complete ===");
}
