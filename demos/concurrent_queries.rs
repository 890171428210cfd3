//! Many threads querying one shared, immutable database while a shared
//! counter registry tallies the outcomes.

use ipgeo_rs::prelude::*;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    // 4096 /24 blocks starting at 1.0.0.0, every other one assigned
    let blocks = (0..4096u32)
        .map(|i| BlockRow {
            ip_start: 0x0100_0000 + i * 512,
            ip_end: 0x0100_0000 + i * 512 + 255,
            loc_id: i % 4,
        })
        .collect();
    let locations = (0..4u32)
        .map(|id| LocationRow {
            loc_id: id,
            country_code: "DE".into(),
            city_name: format!("Town {id}"),
            ..Default::default()
        })
        .collect();
    let db = Arc::new(GeoIpDb::from_raw(RawTables {
        countries: vec![CountryRow {
            country_code: "DE".into(),
            country_name: "Germany".into(),
        }],
        locations,
        blocks,
        ..Default::default()
    }));
    let metrics = Arc::new(MetricRegistry::new("concurrent_queries"));
    println!("Loaded: {}", db.stats());

    let start = std::time::Instant::now();
    let handles: Vec<_> = (0..8u32)
        .map(|t| {
            let db = Arc::clone(&db);
            let metrics = Arc::clone(&metrics);
            thread::spawn(move || {
                for i in 0..50_000u32 {
                    let ip = Ipv4Addr::from(0x0100_0000 + (i * 97 + t * 13) % (4096 * 512));
                    let r = db.lookup(ip);
                    metrics.incr(if r.is_resolved() { "hit" } else { "miss" });
                }
            })
        })
        .collect();
    for h in handles {
        h.join().map_err(|_| GeoError::InvalidData("worker panicked".into()))?;
    }

    println!("Elapsed: {:?}", start.elapsed());
    println!("Counters: {metrics}");
    Ok(())
}
