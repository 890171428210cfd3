// crates/ipgeo-core/src/model/mod.rs
pub mod convert;
pub mod flat;
pub mod search;

pub use flat::{Block, GeoIpDb, Location, RegionKey};
