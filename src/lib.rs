//! Workspace facade: re-exports `ipgeo-core` for the demos.

pub use ipgeo_core::*;

pub mod prelude {
    pub use ipgeo_core::raw::{BlockRow, CountryRow, LocationRow, RawTables, RegionRow};
    pub use ipgeo_core::{
        is_reserved, GeoError, GeoIpDb, GeoLookup, LocationResult, MetricRegistry, Result,
    };
}
