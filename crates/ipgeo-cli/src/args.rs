use clap::{Parser, Subcommand, ValueEnum};
use ipgeo_core::GeoIpDb;
use std::path::PathBuf;

/// `db/ipdb.sqlite` unless the loader defaults change.
pub fn default_db_path() -> PathBuf {
    GeoIpDb::default_data_dir().join(GeoIpDb::default_dataset_filename())
}

/// CLI arguments for ipgeo
#[derive(Debug, Parser)]
#[command(
    name = "ipgeo",
    version,
    about = "Resolve IPv4 addresses against an in-memory geolocation cache"
)]
pub struct CliArgs {
    /// SQLite database holding the four geo tables
    #[arg(long = "db", global = true, default_value_os_t = default_db_path())]
    pub db: PathBuf,

    /// JSON (.json or .json.gz) dataset; takes precedence over --db
    #[arg(short = 'd', long = "dataset", global = true)]
    pub dataset: Option<PathBuf>,

    /// SQLite page cache size applied before the tables are read
    #[arg(long = "cache-size", global = true, value_name = "PAGES")]
    pub cache_size: Option<i64>,

    /// Log verbosity (RUST_LOG is used when not given; default warn)
    #[arg(long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Output format for results
    #[arg(long = "format", global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the counter registry as JSON on stderr when done
    #[arg(long = "metrics", global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded tables
    Stats,

    /// Resolve one or more addresses
    Lookup {
        /// IPv4 addresses (IPv4-mapped IPv6 is accepted)
        #[arg(required = true)]
        ips: Vec<String>,
    },

    /// Resolve one address per line, in parallel
    Batch {
        /// Input file (stdin when omitted); blank lines and '#' comments are skipped
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
}

/// Logging level for the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks
    Text,
    /// One JSON object per line
    Json,
}
