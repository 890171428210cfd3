// JSON / JSON.gz datasets and concurrent read-only lookups.

use flate2::write::GzEncoder;
use flate2::Compression;
use ipgeo_core::{GeoError, GeoIpDb, GeoLookup, LocationResult};
use std::io::Write;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const DATASET: &str = r#"{
  "countries": [
    {"country_code": "US", "country_name": "United States"},
    {"country_code": "JP", "country_name": "Japan"}
  ],
  "regions": [
    {"country_code": "US", "region_code": "CA", "region_name": "California"},
    {"country_code": "JP", "region_code": "40", "region_name": "Tokyo"}
  ],
  "locations": [
    {"loc_id": 42, "country_code": "US", "region_code": "CA", "city_name": "Example",
     "postal_code": "90001", "latitude": 34.0, "longitude": -118.0,
     "metro_code": "803", "area_code": "213"},
    {"loc_id": 7, "country_code": "JP", "region_code": "40", "city_name": "Tokyo",
     "latitude": 35.5, "longitude": 139.75}
  ],
  "blocks": [
    {"ip_start": 16777216, "ip_end": 16777471, "loc_id": 7},
    {"ip_start": 134744064, "ip_end": 134744319, "loc_id": 42},
    {"ip_start": 167772160, "ip_end": 167772415, "loc_id": 42}
  ]
}"#;

fn write_plain(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("geo.json");
    std::fs::write(&path, DATASET).unwrap();
    path
}

fn write_gz(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("geo.json.gz");
    let file = std::fs::File::create(&path).unwrap();
    let mut enc = GzEncoder::new(file, Compression::default());
    enc.write_all(DATASET.as_bytes()).unwrap();
    enc.finish().unwrap();
    path
}

#[test]
fn plain_json_dataset() {
    let dir = TempDir::new().unwrap();
    let db = GeoIpDb::load_from_path(write_plain(&dir)).unwrap();
    let stats = db.stats();
    assert_eq!((stats.countries, stats.regions, stats.locations, stats.blocks), (2, 2, 2, 3));

    let tokyo = db.lookup(Ipv4Addr::new(1, 0, 0, 200));
    assert_eq!(tokyo.country_name, "Japan");
    assert_eq!(tokyo.region_name, "Tokyo");
    assert_eq!(tokyo.zip_code, "");
    assert_eq!(tokyo.latitude, Some(35.5));
}

#[cfg(feature = "compact")]
#[test]
fn gzip_dataset_matches_plain() {
    let dir = TempDir::new().unwrap();
    let plain = GeoIpDb::load_from_path(write_plain(&dir)).unwrap();
    let gz = GeoIpDb::load_from_path(write_gz(&dir)).unwrap();
    assert_eq!(plain.stats(), gz.stats());
    let ip = Ipv4Addr::new(8, 8, 8, 8);
    assert_eq!(plain.lookup(ip), gz.lookup(ip));
}

#[test]
fn scenario_range_mapped_to_location_42() {
    let dir = TempDir::new().unwrap();
    let db = GeoIpDb::load_json(write_plain(&dir)).unwrap();

    // 10.0.0.0/24 is loaded for location 42 but reserved wins on lookup
    let ip = Ipv4Addr::from(167772160 + 17);
    assert!(db.lookup(ip).is_reserved());

    // the range search + join on its own sees the loaded data
    let joined = db.resolve(ip);
    assert_eq!(joined.country_code, "US");
    assert_eq!(joined.country_name, "United States");
    assert_eq!(joined.region_name, "California");
    assert_eq!(joined.city_name, "Example");
    assert_eq!(joined.zip_code, "90001");
    assert_eq!(joined.latitude, Some(34.0));
    assert_eq!(joined.longitude, Some(-118.0));
}

#[test]
fn malformed_dataset_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"blocks": [{"ip_start": "one"}]}"#).unwrap();
    let err = GeoIpDb::load_from_path(&path).unwrap_err();
    assert!(matches!(err, GeoError::Json(_)));
}

#[test]
fn concurrent_readers_agree() {
    let dir = TempDir::new().unwrap();
    let db: Arc<GeoIpDb> = Arc::new(GeoIpDb::load_json(write_plain(&dir)).unwrap());

    let probes: Vec<Ipv4Addr> = vec![
        Ipv4Addr::new(8, 8, 8, 8),
        Ipv4Addr::new(1, 0, 0, 1),
        Ipv4Addr::new(10, 0, 0, 1),
        Ipv4Addr::new(2, 2, 2, 2),
    ];
    let expected: Vec<LocationResult> = probes.iter().map(|ip| db.lookup(*ip)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let db = Arc::clone(&db);
            let probes = probes.clone();
            thread::spawn(move || {
                let engine: &dyn GeoLookup = db.as_ref();
                let mut out = Vec::with_capacity(500 * probes.len());
                for _ in 0..500 {
                    for ip in &probes {
                        out.push(engine.lookup(*ip));
                    }
                }
                out
            })
        })
        .collect();

    for h in handles {
        let results = h.join().unwrap();
        for chunk in results.chunks(probes.len()) {
            assert_eq!(chunk, expected.as_slice());
        }
    }
}
