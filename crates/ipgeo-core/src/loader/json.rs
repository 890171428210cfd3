// crates/ipgeo-core/src/loader/json.rs
//! JSON dataset source.
//!
//! The document carries the four relations as arrays:
//!
//! ```json
//! {
//!   "countries": [{"country_code": "US", "country_name": "United States"}],
//!   "regions":   [{"country_code": "US", "region_code": "CA", "region_name": "California"}],
//!   "locations": [{"loc_id": 42, "country_code": "US", "region_code": "CA",
//!                  "city_name": "Example", "postal_code": "90001",
//!                  "latitude": 34.0, "longitude": -118.0,
//!                  "metro_code": "803", "area_code": "213"}],
//!   "blocks":    [{"ip_start": 134744064, "ip_end": 134744319, "loc_id": 42}]
//! }
//! ```
//!
//! A `.json.gz` file is decompressed on the fly (feature `compact`).

use super::common_io;
use crate::error::{GeoError, Result};
use crate::raw::{BlockRow, CountryRow, LocationRow, RawTables, RegionRow};
use crate::traits::GeoSource;
use std::io::Read;
use std::mem;
use std::path::{Path, PathBuf};

/// A fully parsed JSON dataset, handed out relation by relation.
#[derive(Debug)]
pub struct JsonSource {
    origin: String,
    tables: RawTables,
}

impl JsonSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let reader = common_io::open_stream(&path)?;
        let mut source = Self::from_reader(reader)?;
        source.origin = format!("json:{}", path.display());
        Ok(source)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let tables: RawTables = serde_json::from_reader(reader).map_err(GeoError::Json)?;
        Ok(Self {
            origin: "json".to_string(),
            tables,
        })
    }

    pub fn from_tables(tables: RawTables) -> Self {
        Self {
            origin: "memory".to_string(),
            tables,
        }
    }
}

// Each relation is moved out on first read.
impl GeoSource for JsonSource {
    fn describe(&self) -> String {
        self.origin.clone()
    }

    fn countries(&mut self) -> Result<Vec<CountryRow>> {
        Ok(mem::take(&mut self.tables.countries))
    }

    fn regions(&mut self) -> Result<Vec<RegionRow>> {
        Ok(mem::take(&mut self.tables.regions))
    }

    fn locations(&mut self) -> Result<Vec<LocationRow>> {
        Ok(mem::take(&mut self.tables.locations))
    }

    fn blocks(&mut self) -> Result<Vec<BlockRow>> {
        Ok(mem::take(&mut self.tables.blocks))
    }
}
