//! Import and Export
//!
//! This example demonstrates moving travel state in and out of the
//! tracker as `countries.json` documents.
//!
//! Key concepts:
//! - Pretty-printed export documents
//! - Seed-then-overlay merge on import
//! - Malformed documents rejected without touching state
//!
//! Run with: cargo run --example import_export

use waymark::store::{FileSlot, DEFAULT_STORAGE_KEY};
use waymark::transfer::EXPORT_FILE_NAME;
use waymark::Tracker;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Import and Export ===\n");

    let dir = std::env::temp_dir().join("waymark-demo");
    let mut tracker = Tracker::open(FileSlot::new(&dir, DEFAULT_STORAGE_KEY));
    println!("State persists under {}\n", dir.display());

    tracker.advance("FR").unwrap();
    tracker.advance("TH").unwrap();

    let document = tracker.export().unwrap();
    println!("Export (offer to the user as \"{EXPORT_FILE_NAME}\"):");
    println!("{document}\n");

    println!("Importing a document from another device:");
    tracker.import(r#"{"BR": "visited"}"#).unwrap();
    for (code, status) in tracker.map().iter() {
        println!("  {code}: {status}");
    }
    println!("  (the home country reappeared from the seed; FR and TH are gone)\n");

    println!("Importing malformed text:");
    match tracker.import("{not json") {
        Ok(()) => println!("  unexpectedly accepted"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!("  state afterwards: {} countries, unchanged", tracker.map().len());

    tracker.reset().unwrap();
    println!("\nReset: back to {} seed entry", tracker.map().len());

    println!("\n=== Example Complete ===");
}
