// crates/ipgeo-core/src/reserved.rs
//! Hard-coded reserved IPv4 blocks.
//!
//! See <http://en.wikipedia.org/wiki/Reserved_IP_addresses>. These are
//! checked before the loaded range index and are never joined against it.

use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Country code reported for reserved addresses.
pub const RESERVED_COUNTRY_CODE: &str = "RD";
/// Country name reported for reserved addresses.
pub const RESERVED_COUNTRY_NAME: &str = "Reserved";

// Order is kept verbatim; the blocks are disjoint. Built in a const
// context, so an invalid prefix length fails the build.
static RESERVED: [Ipv4Net; 16] = [
    Ipv4Net::new_assert(Ipv4Addr::new(0, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(100, 64, 0, 0), 10),
    Ipv4Net::new_assert(Ipv4Addr::new(127, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(169, 254, 0, 0), 16),
    Ipv4Net::new_assert(Ipv4Addr::new(172, 16, 0, 0), 12),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 0, 0, 0), 29),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 0, 2, 0), 24),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 88, 99, 0), 24),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 168, 0, 0), 16),
    Ipv4Net::new_assert(Ipv4Addr::new(198, 18, 0, 0), 15),
    Ipv4Net::new_assert(Ipv4Addr::new(198, 51, 100, 0), 24),
    Ipv4Net::new_assert(Ipv4Addr::new(203, 0, 113, 0), 24),
    Ipv4Net::new_assert(Ipv4Addr::new(224, 0, 0, 0), 4),
    Ipv4Net::new_assert(Ipv4Addr::new(240, 0, 0, 0), 4),
    Ipv4Net::new_assert(Ipv4Addr::new(255, 255, 255, 255), 32),
];

/// The reserved table, in lookup order.
pub fn reserved_ranges() -> &'static [Ipv4Net] {
    &RESERVED
}

/// Returns the first reserved block containing `ip`, if any.
pub fn reserved_block(ip: Ipv4Addr) -> Option<&'static Ipv4Net> {
    RESERVED.iter().find(|net| net.contains(&ip))
}

#[inline]
pub fn is_reserved(ip: Ipv4Addr) -> bool {
    reserved_block(ip).is_some()
}
