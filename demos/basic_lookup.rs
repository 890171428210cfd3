//! Basic usage example for ipgeo-rs
//!
//! This example demonstrates how to:
//! - Build the lookup tables from in-memory rows
//! - Resolve covered, uncovered and reserved addresses
//! - Render a result as JSON
//!
//! Pass a dataset path (`.sqlite`, `.json` or `.json.gz`) to use real data:
//!   cargo run --example basic_lookup -- db/ipdb.sqlite 8.8.8.8

use ipgeo_rs::prelude::*;
use ipgeo_rs::{load_from_source, JsonSource};
use std::net::Ipv4Addr;

fn sample_db() -> Result<GeoIpDb> {
    let mut source = JsonSource::from_tables(RawTables {
        countries: vec![CountryRow {
            country_code: "US".into(),
            country_name: "United States".into(),
        }],
        regions: vec![RegionRow {
            country_code: "US".into(),
            region_code: "CA".into(),
            region_name: "California".into(),
        }],
        locations: vec![LocationRow {
            loc_id: 42,
            country_code: "US".into(),
            region_code: "CA".into(),
            city_name: "Mountain View".into(),
            postal_code: "94043".into(),
            latitude: 37.386,
            longitude: -122.0838,
            metro_code: "807".into(),
            area_code: "650".into(),
        }],
        blocks: vec![BlockRow {
            ip_start: u32::from(Ipv4Addr::new(8, 8, 8, 0)),
            ip_end: u32::from(Ipv4Addr::new(8, 8, 8, 255)),
            loc_id: 42,
        }],
    });
    load_from_source(&mut source)
}

fn main() -> Result<()> {
    println!("=== ipgeo-rs Basic Lookup Example ===\n");

    let mut args = std::env::args().skip(1);
    let db = match args.next() {
        Some(path) => {
            println!("Loading tables from {path}...");
            GeoIpDb::load_from_path(&path)?
        }
        None => {
            println!("Building sample tables...");
            sample_db()?
        }
    };
    println!("✓ Loaded: {}\n", db.stats());

    let queries: Vec<String> = {
        let rest: Vec<String> = args.collect();
        if rest.is_empty() {
            ["8.8.8.8", "8.8.9.1", "10.1.2.3", "::ffff:8.8.8.77"]
                .map(String::from)
                .to_vec()
        } else {
            rest
        }
    };

    for q in &queries {
        match db.lookup_str(q) {
            Ok(r) if r.is_reserved() => println!("{q}: reserved block"),
            Ok(r) if r.is_resolved() => println!(
                "{q}: {}, {} ({}) [{:?}, {:?}]",
                r.city_name, r.region_name, r.country_name, r.latitude, r.longitude
            ),
            Ok(_) => println!("{q}: not found"),
            Err(e) => println!("{q}: {e}"),
        }
    }

    println!("\n--- JSON rendering ---");
    let r = db.lookup(Ipv4Addr::new(8, 8, 8, 8));
    println!("{}", serde_json::to_string_pretty(&r)?);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
