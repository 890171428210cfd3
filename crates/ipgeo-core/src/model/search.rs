// crates/ipgeo-core/src/model/search.rs
use super::flat::{Block, GeoIpDb, Location, RegionKey};
use crate::api::LocationResult;
use crate::common::DbStats;
use crate::error::{GeoError, Result};
use crate::reserved::is_reserved;
use crate::traits::GeoLookup;
use std::net::{IpAddr, Ipv4Addr};

impl GeoIpDb {
    /// Resolves `ip` to a location record.
    ///
    /// 1. Reserved blocks win unconditionally (`RD` / `Reserved`).
    /// 2. Otherwise the range index is searched and the hit is joined
    ///    against locations, countries and regions (see [`Self::resolve`]).
    ///
    /// Never fails: misses come back as an address-only result.
    pub fn lookup(&self, ip: Ipv4Addr) -> LocationResult {
        if is_reserved(ip) {
            return LocationResult::reserved(ip);
        }
        self.resolve(ip)
    }

    /// Range search and join, without the reserved-block check.
    pub fn resolve(&self, ip: Ipv4Addr) -> LocationResult {
        let mut result = LocationResult::unresolved(ip);

        let Some(block) = self.find_block(u32::from(ip)) else {
            return result;
        };
        let Some(loc) = self.locations.get(&block.loc_id) else {
            return result;
        };

        result.country_name = self.country_name(&loc.country_code).unwrap_or_default().to_string();
        result.region_name = self
            .region_name(&loc.country_code, &loc.region_code)
            .unwrap_or_default()
            .to_string();
        result.country_code = loc.country_code.clone();
        result.region_code = loc.region_code.clone();
        result.city_name = loc.city_name.clone();
        result.zip_code = loc.zip_code.clone();
        result.latitude = Some(loc.latitude);
        result.longitude = Some(loc.longitude);
        result.metro_code = loc.metro_code.clone();
        result.area_code = loc.area_code.clone();
        result
    }

    /// Like [`Self::lookup`], for any `IpAddr`.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are unwrapped; any
    /// other IPv6 address is rejected.
    pub fn lookup_addr(&self, ip: IpAddr) -> Result<LocationResult> {
        match ip {
            IpAddr::V4(v4) => Ok(self.lookup(v4)),
            IpAddr::V6(v6) => v6
                .to_ipv4_mapped()
                .map(|v4| self.lookup(v4))
                .ok_or(GeoError::UnsupportedAddress(ip)),
        }
    }

    /// Parses `s` (surrounding whitespace ignored) and looks it up.
    pub fn lookup_str(&self, s: &str) -> Result<LocationResult> {
        let s = s.trim();
        let ip: IpAddr = s
            .parse()
            .map_err(|_| GeoError::InvalidAddress(s.to_string()))?;
        self.lookup_addr(ip)
    }

    /// The range with the greatest `ip_start <= ip`, if it also covers `ip`.
    ///
    /// Binary search over the sorted index: O(log n).
    pub fn find_block(&self, ip: u32) -> Option<&Block> {
        let idx = self.blocks.partition_point(|b| b.ip_start <= ip);
        let candidate = self.blocks.get(idx.checked_sub(1)?)?;
        candidate.contains(ip).then_some(candidate)
    }

    pub fn location(&self, loc_id: u32) -> Option<&Location> {
        self.locations.get(&loc_id)
    }

    pub fn country_name(&self, country_code: &str) -> Option<&str> {
        self.countries.get(country_code).map(String::as_str)
    }

    pub fn region_name(&self, country_code: &str, region_code: &str) -> Option<&str> {
        self.regions
            .get(&RegionKey::new(country_code, region_code))
            .map(String::as_str)
    }

    /// The sorted range index.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of invariant violations found in the index at build time.
    pub fn overlapping_ranges(&self) -> usize {
        self.overlapping
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            regions: self.regions.len(),
            locations: self.locations.len(),
            blocks: self.blocks.len(),
        }
    }
}

impl GeoLookup for GeoIpDb {
    fn lookup(&self, ip: Ipv4Addr) -> LocationResult {
        GeoIpDb::lookup(self, ip)
    }

    fn stats(&self) -> DbStats {
        GeoIpDb::stats(self)
    }
}
