use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::GeoIpDb::stats`], these counts reflect the
/// materialized in-memory tables after the one-time load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub regions: usize,
    pub locations: usize,
    pub blocks: usize,
}

impl fmt::Display for DbStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} countries, {} regions, {} locations, {} blocks",
            self.countries, self.regions, self.locations, self.blocks
        )
    }
}
