// crates/ipgeo-core/src/model/flat.rs
use std::collections::HashMap;

/// The master lookup database.
///
/// Built exactly once (see [`crate::loader`] and [`GeoIpDb::from_raw`]) and
/// never mutated afterwards. All fields are private and there is no `&mut`
/// API, so a `GeoIpDb` behind `&` or `Arc` can be queried from any number
/// of threads without locking.
#[derive(Clone, Debug, Default)]
pub struct GeoIpDb {
    /// Country code -> display name.
    pub(crate) countries: HashMap<String, String>,
    /// (country code, region code) -> display name.
    pub(crate) regions: HashMap<RegionKey, String>,
    /// Location id -> city-level record.
    pub(crate) locations: HashMap<u32, Location>,
    /// Range index. Sorted ascending by `ip_start`.
    pub(crate) blocks: Vec<Block>,
    /// Adjacent index entries that overlap (or are inverted) after sorting.
    pub(crate) overlapping: usize,
}

/// Compound key of the region table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionKey {
    pub country_code: String,
    pub region_code: String,
}

impl RegionKey {
    pub fn new(country_code: impl Into<String>, region_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            region_code: region_code.into(),
        }
    }
}

/// A city-level location record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub country_code: String,
    pub region_code: String,
    pub city_name: String,
    pub zip_code: String,
    pub latitude: f32,
    pub longitude: f32,
    pub metro_code: String,
    pub area_code: String,
}

/// One entry of the range index: `[ip_start, ip_end]` (inclusive) -> `loc_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub ip_start: u32,
    pub ip_end: u32,
    pub loc_id: u32,
}

impl Block {
    #[inline]
    pub fn contains(&self, ip: u32) -> bool {
        self.ip_start <= ip && ip <= self.ip_end
    }
}
