// crates/ipgeo-core/src/error.rs
use std::net::IpAddr;
use thiserror::Error;

/// Errors produced while loading the dataset or parsing a query address.
///
/// Every variant raised by the loader is fatal: there is no partially
/// loaded database. Lookup misses are *not* errors, they come back as an
/// ordinary [`crate::LocationResult`] with empty fields.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),

    #[error("unsupported address (IPv4 only): {0}")]
    UnsupportedAddress(IpAddr),
}

pub type Result<T> = std::result::Result<T, GeoError>;
