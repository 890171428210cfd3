// crates/ipgeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Drives a [`GeoSource`] through the four relations and hands the rows to
//! the converter. The load is all-or-nothing: the first error from any
//! relation aborts it and no database is produced.

use crate::error::Result;
use crate::model::GeoIpDb;
use crate::raw::RawTables;
use crate::traits::GeoSource;
use log::info;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod json;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use json::JsonSource;
#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteOptions, SqliteSource};

/// Reads every relation from `source` and builds the lookup tables.
pub fn load_from_source<S: GeoSource + ?Sized>(source: &mut S) -> Result<GeoIpDb> {
    let origin = source.describe();
    info!("loading geo tables from {origin}");

    let countries = source.countries()?;
    info!("loaded {} countries", countries.len());

    let regions = source.regions()?;
    info!("loaded {} regions", regions.len());

    let locations = source.locations()?;
    info!("loaded {} city locations", locations.len());

    let blocks = source.blocks()?;
    info!("loaded {} city blocks", blocks.len());

    let db = GeoIpDb::from_raw(RawTables {
        countries,
        regions,
        locations,
        blocks,
    });
    info!("geo tables ready from {origin}: {}", db.stats());
    Ok(db)
}

impl GeoIpDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from("db")
    }

    pub fn default_dataset_filename() -> &'static str {
        "ipdb.sqlite"
    }

    /// **Standard Loader:** picks the source from the file name.
    ///
    /// `*.json` / `*.json.gz` go through [`JsonSource`], anything else is
    /// opened as a SQLite database.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::is_json_dataset(path) {
            return Self::load_json(path);
        }

        #[cfg(feature = "sqlite")]
        {
            Self::load_sqlite(path, &SqliteOptions::default())
        }

        #[cfg(not(feature = "sqlite"))]
        {
            Err(crate::error::GeoError::InvalidData(format!(
                "{} is not a JSON dataset and the 'sqlite' feature is disabled",
                path.display()
            )))
        }
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let mut source = JsonSource::open(path)?;
        load_from_source(&mut source)
    }

    #[cfg(feature = "sqlite")]
    pub fn load_sqlite(path: impl AsRef<Path>, options: &SqliteOptions) -> Result<Self> {
        let mut source = SqliteSource::open(path, options)?;
        load_from_source(&mut source)
    }
}
