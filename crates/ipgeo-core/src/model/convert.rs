// crates/ipgeo-core/src/model/convert.rs
use super::flat::{Block, GeoIpDb, Location, RegionKey};
use crate::raw::RawTables;
use log::{debug, warn};
use std::collections::HashMap;

impl GeoIpDb {
    /// **Standard Converter:** Raw rows -> lookup tables.
    ///
    /// Duplicate keys keep the last row seen. The range index is sorted by
    /// `ip_start` with a stable sort, so input that breaks the
    /// no-overlap invariant still produces a deterministic index; such
    /// entries are counted and reported instead of rejected.
    pub fn from_raw(raw: RawTables) -> Self {
        let countries: HashMap<String, String> = raw
            .countries
            .into_iter()
            .map(|c| (c.country_code, c.country_name))
            .collect();

        let regions: HashMap<RegionKey, String> = raw
            .regions
            .into_iter()
            .map(|r| (RegionKey::new(r.country_code, r.region_code), r.region_name))
            .collect();

        let locations: HashMap<u32, Location> = raw
            .locations
            .into_iter()
            .map(|l| {
                (
                    l.loc_id,
                    Location {
                        country_code: l.country_code,
                        region_code: l.region_code,
                        city_name: l.city_name,
                        zip_code: l.postal_code,
                        latitude: l.latitude,
                        longitude: l.longitude,
                        metro_code: l.metro_code,
                        area_code: l.area_code,
                    },
                )
            })
            .collect();

        let mut blocks: Vec<Block> = raw
            .blocks
            .into_iter()
            .map(|b| Block {
                ip_start: b.ip_start,
                ip_end: b.ip_end,
                loc_id: b.loc_id,
            })
            .collect();
        blocks.sort_by_key(|b| b.ip_start);

        let overlapping = count_violations(&blocks);
        if overlapping > 0 {
            warn!(
                "range index has {overlapping} overlapping or inverted entries; lookups stay deterministic but may pick the nearest lower range"
            );
        }
        debug!("range index built with {} entries", blocks.len());

        GeoIpDb {
            countries,
            regions,
            locations,
            blocks,
            overlapping,
        }
    }
}

/// Counts inverted ranges plus adjacent pairs where
/// `blocks[i].ip_end >= blocks[i + 1].ip_start`.
fn count_violations(blocks: &[Block]) -> usize {
    let inverted = blocks.iter().filter(|b| b.ip_start > b.ip_end).count();
    let overlaps = blocks
        .windows(2)
        .filter(|w| w[0].ip_end >= w[1].ip_start)
        .count();
    inverted + overlaps
}
