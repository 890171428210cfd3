// crates/ipgeo-core/src/api.rs
//! The record handed back to callers for every query.
//!
//! Field names on the wire follow the classic freegeoip-style response
//! (`ip`, `country_code`, `city`, `zipcode`, `areacode`, ...).

use crate::reserved::{RESERVED_COUNTRY_CODE, RESERVED_COUNTRY_NAME};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Result of a single lookup.
///
/// Only `address` is always set. Every other field is empty (`""` or
/// `None`) when the address could not be resolved, or when a join target
/// was missing. A miss is data, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    #[serde(rename = "ip")]
    pub address: String,
    pub country_code: String,
    pub country_name: String,
    pub region_code: String,
    pub region_name: String,
    #[serde(rename = "city")]
    pub city_name: String,
    #[serde(rename = "zipcode")]
    pub zip_code: String,
    pub latitude: Option<f32>,
    pub longitude: Option<f32>,
    pub metro_code: String,
    #[serde(rename = "areacode")]
    pub area_code: String,
}

impl LocationResult {
    /// A result carrying nothing but the echoed address.
    pub fn unresolved(ip: Ipv4Addr) -> Self {
        Self {
            address: ip.to_string(),
            ..Self::default()
        }
    }

    /// The fixed answer for reserved addresses.
    pub fn reserved(ip: Ipv4Addr) -> Self {
        Self {
            address: ip.to_string(),
            country_code: RESERVED_COUNTRY_CODE.to_string(),
            country_name: RESERVED_COUNTRY_NAME.to_string(),
            ..Self::default()
        }
    }

    pub fn is_reserved(&self) -> bool {
        self.country_code == RESERVED_COUNTRY_CODE
    }

    /// `true` if anything beyond the echoed address is populated.
    pub fn is_resolved(&self) -> bool {
        !(self.country_code.is_empty()
            && self.country_name.is_empty()
            && self.region_code.is_empty()
            && self.region_name.is_empty()
            && self.city_name.is_empty()
            && self.zip_code.is_empty()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.metro_code.is_empty()
            && self.area_code.is_empty())
    }
}
