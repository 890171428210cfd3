use criterion::{criterion_group, criterion_main, Criterion};
use ipgeo_core::raw::{BlockRow, CountryRow, LocationRow, RawTables};
use ipgeo_core::GeoIpDb;
use std::hint::black_box;
use std::net::Ipv4Addr;

const BLOCKS: u32 = 200_000;
const STRIDE: u32 = 1 << 12;

/// Synthetic index: every other 4096-address window is assigned.
fn synthetic_db() -> GeoIpDb {
    let locations = (0..1000)
        .map(|id| LocationRow {
            loc_id: id,
            country_code: "US".into(),
            region_code: "CA".into(),
            city_name: format!("City {id}"),
            postal_code: String::new(),
            latitude: 37.0,
            longitude: -122.0,
            metro_code: String::new(),
            area_code: String::new(),
        })
        .collect();
    let blocks = (0..BLOCKS)
        .map(|i| BlockRow {
            ip_start: i * 2 * STRIDE,
            ip_end: i * 2 * STRIDE + STRIDE - 1,
            loc_id: i % 1000,
        })
        .rev()
        .collect();
    GeoIpDb::from_raw(RawTables {
        countries: vec![CountryRow {
            country_code: "US".into(),
            country_name: "United States".into(),
        }],
        regions: vec![],
        locations,
        blocks,
    })
}

fn bench_lookup(c: &mut Criterion) {
    let db = synthetic_db();
    let probes: Vec<Ipv4Addr> = (0..1024u32)
        .map(|i| Ipv4Addr::from(i.wrapping_mul(2_654_435_761)))
        .collect();

    c.bench_function("lookup_mixed", |b| {
        b.iter(|| {
            for ip in &probes {
                black_box(db.lookup(black_box(*ip)));
            }
        })
    });

    c.bench_function("find_block_hit", |b| {
        let ip = 1000 * 2 * STRIDE + 5;
        b.iter(|| black_box(db.find_block(black_box(ip))))
    });

    c.bench_function("lookup_reserved", |b| {
        let ip = Ipv4Addr::new(192, 168, 1, 1);
        b.iter(|| black_box(db.lookup(black_box(ip))))
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("from_raw_200k_blocks", |b| b.iter(|| black_box(synthetic_db())));
}

criterion_group!(benches, bench_lookup, bench_build);
criterion_main!(benches);
