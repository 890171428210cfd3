// crates/ipgeo-core/src/traits.rs
use crate::api::LocationResult;
use crate::common::DbStats;
use crate::error::Result;
use crate::raw::{BlockRow, CountryRow, LocationRow, RegionRow};
use std::net::Ipv4Addr;

/// The one-shot bulk-load interface to an external tabular source.
///
/// Each method reads one relation in full. Row order does not matter, and
/// any error is fatal to the load: [`crate::loader::load_from_source`]
/// aborts on the first one and never returns a partially filled database.
///
/// # Example
///
/// ```
/// use ipgeo_core::raw::{BlockRow, CountryRow, LocationRow, RegionRow};
/// use ipgeo_core::{GeoSource, Result};
///
/// struct Empty;
///
/// impl GeoSource for Empty {
///     fn countries(&mut self) -> Result<Vec<CountryRow>> { Ok(vec![]) }
///     fn regions(&mut self) -> Result<Vec<RegionRow>> { Ok(vec![]) }
///     fn locations(&mut self) -> Result<Vec<LocationRow>> { Ok(vec![]) }
///     fn blocks(&mut self) -> Result<Vec<BlockRow>> { Ok(vec![]) }
/// }
///
/// let db = ipgeo_core::loader::load_from_source(&mut Empty).unwrap();
/// assert_eq!(db.stats().blocks, 0);
/// ```
pub trait GeoSource {
    /// Short label used in log lines ("sqlite:db/ipdb.sqlite", ...).
    fn describe(&self) -> String {
        "source".to_string()
    }

    fn countries(&mut self) -> Result<Vec<CountryRow>>;
    fn regions(&mut self) -> Result<Vec<RegionRow>>;
    fn locations(&mut self) -> Result<Vec<LocationRow>>;
    fn blocks(&mut self) -> Result<Vec<BlockRow>>;
}

/// Read-only query surface of a loaded database.
///
/// Implementors must be shareable across threads; queries never mutate.
pub trait GeoLookup: Send + Sync {
    fn lookup(&self, ip: Ipv4Addr) -> LocationResult;
    fn stats(&self) -> DbStats;
}
