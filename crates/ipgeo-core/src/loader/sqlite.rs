// crates/ipgeo-core/src/loader/sqlite.rs
//! SQLite source.
//!
//! Expects the classic GeoLite City layout:
//!
//! | table            | columns                                                  |
//! |------------------|----------------------------------------------------------|
//! | `country_blocks` | `country_code, country_name`                             |
//! | `region_names`   | `country_code, region_code, region_name`                 |
//! | `city_location`  | `loc_id, country_code, region_code, city_name,`          |
//! |                  | `postal_code, latitude, longitude, metro_code, area_code` |
//! | `city_blocks`    | `ip_start, ip_end, loc_id`                               |
//!
//! The source is blocking. `sqlx` is driven on a private current-thread
//! runtime, so it must not be opened from inside another tokio runtime.

use crate::error::{GeoError, Result};
use crate::raw::{BlockRow, CountryRow, LocationRow, RegionRow};
use crate::traits::GeoSource;
use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

// Text columns may be NULL or stored with numeric affinity; normalize both.
const COUNTRIES_SQL: &str = "SELECT \
        COALESCE(CAST(country_code AS TEXT), ''), \
        COALESCE(CAST(country_name AS TEXT), '') \
    FROM country_blocks";

const REGIONS_SQL: &str = "SELECT \
        COALESCE(CAST(country_code AS TEXT), ''), \
        COALESCE(CAST(region_code AS TEXT), ''), \
        COALESCE(CAST(region_name AS TEXT), '') \
    FROM region_names";

const LOCATIONS_SQL: &str = "SELECT \
        loc_id, \
        COALESCE(CAST(country_code AS TEXT), ''), \
        COALESCE(CAST(region_code AS TEXT), ''), \
        COALESCE(CAST(city_name AS TEXT), ''), \
        COALESCE(CAST(postal_code AS TEXT), ''), \
        COALESCE(CAST(latitude AS REAL), 0.0), \
        COALESCE(CAST(longitude AS REAL), 0.0), \
        COALESCE(CAST(metro_code AS TEXT), ''), \
        COALESCE(CAST(area_code AS TEXT), '') \
    FROM city_location";

const BLOCKS_SQL: &str = "SELECT ip_start, ip_end, loc_id FROM city_blocks";

type LocationTuple = (i64, String, String, String, String, f64, f64, String, String);

/// Connection settings for [`SqliteSource`].
#[derive(Debug, Clone, Default)]
pub struct SqliteOptions {
    /// Value for `PRAGMA cache_size` (pages, or KiB when negative).
    pub cache_size: Option<i64>,
}

pub struct SqliteSource {
    path: PathBuf,
    runtime: Runtime,
    pool: SqlitePool,
}

impl SqliteSource {
    /// Opens `path` read-only. The file must exist.
    pub fn open(path: impl AsRef<Path>, options: &SqliteOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(GeoError::NotFound(format!(
                "SQLite database not found at {}",
                path.display()
            )));
        }

        let connect = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .create_if_missing(false);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(GeoError::Io)?;

        // One connection, so the pragma below sticks for the whole load.
        let pool = runtime.block_on(async {
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(connect)
                .await?;
            if let Some(pages) = options.cache_size {
                sqlx::query(&format!("PRAGMA cache_size={pages}"))
                    .execute(&pool)
                    .await?;
            }
            Ok::<_, sqlx::Error>(pool)
        })?;
        debug!("opened sqlite source {}", path.display());

        Ok(Self {
            path,
            runtime,
            pool,
        })
    }

    fn fetch<T>(&self, sql: &'static str) -> Result<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> + Send + Unpin,
    {
        let rows = self
            .runtime
            .block_on(sqlx::query_as::<_, T>(sql).fetch_all(&self.pool))?;
        Ok(rows)
    }
}

impl Drop for SqliteSource {
    fn drop(&mut self) {
        self.runtime.block_on(self.pool.close());
    }
}

impl GeoSource for SqliteSource {
    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    fn countries(&mut self) -> Result<Vec<CountryRow>> {
        let rows: Vec<(String, String)> = self.fetch(COUNTRIES_SQL)?;
        Ok(rows
            .into_iter()
            .map(|(country_code, country_name)| CountryRow {
                country_code,
                country_name,
            })
            .collect())
    }

    fn regions(&mut self) -> Result<Vec<RegionRow>> {
        let rows: Vec<(String, String, String)> = self.fetch(REGIONS_SQL)?;
        Ok(rows
            .into_iter()
            .map(|(country_code, region_code, region_name)| RegionRow {
                country_code,
                region_code,
                region_name,
            })
            .collect())
    }

    fn locations(&mut self) -> Result<Vec<LocationRow>> {
        let rows: Vec<LocationTuple> = self.fetch(LOCATIONS_SQL)?;
        rows.into_iter()
            .map(
                |(loc_id, country_code, region_code, city_name, postal_code, lat, lng, metro_code, area_code)| {
                    Ok(LocationRow {
                        loc_id: to_u32("city_location.loc_id", loc_id)?,
                        country_code,
                        region_code,
                        city_name,
                        postal_code,
                        latitude: lat as f32,
                        longitude: lng as f32,
                        metro_code,
                        area_code,
                    })
                },
            )
            .collect()
    }

    fn blocks(&mut self) -> Result<Vec<BlockRow>> {
        let rows: Vec<(i64, i64, i64)> = self.fetch(BLOCKS_SQL)?;
        rows.into_iter()
            .map(|(start, end, loc_id)| {
                Ok(BlockRow {
                    ip_start: to_u32("city_blocks.ip_start", start)?,
                    ip_end: to_u32("city_blocks.ip_end", end)?,
                    loc_id: to_u32("city_blocks.loc_id", loc_id)?,
                })
            })
            .collect()
    }
}

fn to_u32(column: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| GeoError::InvalidData(format!("{column} out of range: {value}")))
}
