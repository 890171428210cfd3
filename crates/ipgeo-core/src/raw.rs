// crates/ipgeo-core/src/raw.rs
//! Raw rows, exactly as the four source relations deliver them.
//!
//! Both sources (SQLite and JSON) produce these; `model::convert` turns
//! them into the immutable lookup tables.
use serde::Deserialize;

/// One row of the country relation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRow {
    pub country_code: String,
    pub country_name: String,
}

/// One row of the region relation, keyed by (country, region).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionRow {
    pub country_code: String,
    pub region_code: String,
    pub region_name: String,
}

/// One row of the city-location relation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationRow {
    pub loc_id: u32,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub region_code: String,
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub latitude: f32,
    #[serde(default)]
    pub longitude: f32,
    #[serde(default)]
    pub metro_code: String,
    #[serde(default)]
    pub area_code: String,
}

/// One row of the city-block relation: `[ip_start, ip_end]` -> `loc_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BlockRow {
    pub ip_start: u32,
    pub ip_end: u32,
    pub loc_id: u32,
}

/// All four relations, fully read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTables {
    #[serde(default)]
    pub countries: Vec<CountryRow>,
    #[serde(default)]
    pub regions: Vec<RegionRow>,
    #[serde(default)]
    pub locations: Vec<LocationRow>,
    #[serde(default)]
    pub blocks: Vec<BlockRow>,
}
