//! ipgeo-cli
//! =========
//!
//! Command-line interface for the `ipgeo-core` IPv4 geolocation cache.
//!
//! The binary (`ipgeo`) loads the four geo tables once, from a SQLite file or
//! a JSON dataset, and then answers lookups from memory.
//!
//! ```text
//! ipgeo --db db/ipdb.sqlite stats
//! ipgeo lookup 8.8.8.8 1.1.1.1 --format json --metrics
//! ipgeo --dataset geo.json.gz batch --input addresses.txt
//! ```
//!
//! For programmatic access use the [`ipgeo-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod logging;
pub mod output;
