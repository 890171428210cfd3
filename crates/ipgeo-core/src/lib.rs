// crates/ipgeo-core/src/lib.rs

//! # ipgeo-core
//!
//! In-memory IPv4 geolocation cache.
//!
//! Four reference relations (countries, regions, city locations, city
//! blocks) are read once from a [`GeoSource`] into an immutable
//! [`GeoIpDb`]. After that, [`GeoIpDb::lookup`] answers "where is this
//! address?" with a reserved-block check, a binary search over the sorted
//! range index and a join across the location/region/country tables.
//!
//! ```
//! use ipgeo_core::raw::{BlockRow, CountryRow, LocationRow, RawTables};
//! use ipgeo_core::GeoIpDb;
//! use std::net::Ipv4Addr;
//!
//! let db = GeoIpDb::from_raw(RawTables {
//!     countries: vec![CountryRow { country_code: "US".into(), country_name: "United States".into() }],
//!     locations: vec![LocationRow {
//!         loc_id: 1,
//!         country_code: "US".into(),
//!         region_code: "CA".into(),
//!         city_name: "Mountain View".into(),
//!         postal_code: "94043".into(),
//!         latitude: 37.42,
//!         longitude: -122.08,
//!         metro_code: "807".into(),
//!         area_code: "650".into(),
//!     }],
//!     blocks: vec![BlockRow { ip_start: 0x0808_0800, ip_end: 0x0808_08ff, loc_id: 1 }],
//!     ..Default::default()
//! });
//!
//! let hit = db.lookup(Ipv4Addr::new(8, 8, 8, 8));
//! assert_eq!(hit.country_name, "United States");
//! assert_eq!(hit.city_name, "Mountain View");
//!
//! let reserved = db.lookup(Ipv4Addr::new(192, 168, 1, 1));
//! assert_eq!(reserved.country_code, "RD");
//!
//! let miss = db.lookup(Ipv4Addr::new(1, 1, 1, 1));
//! assert!(!miss.is_resolved());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod common;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod model;
// Shared raw input rows (produced by every source)
pub mod raw;
pub mod reserved;
pub mod traits;

// Re-exports
pub use crate::api::LocationResult;
pub use crate::common::DbStats;
pub use crate::error::{GeoError, Result};
pub use crate::loader::{load_from_source, JsonSource};
#[cfg(feature = "sqlite")]
pub use crate::loader::{SqliteOptions, SqliteSource};
pub use crate::metrics::{MetricRegistry, MetricSnapshot};
pub use crate::model::{Block, GeoIpDb, Location, RegionKey};
pub use crate::reserved::{is_reserved, reserved_ranges};
pub use crate::traits::{GeoLookup, GeoSource};
