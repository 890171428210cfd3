//! ipgeo: command-line front end for ipgeo-core
//!
//! Usage examples
//! --------------
//!
//! - Show table sizes
//!   $ ipgeo stats
//!
//! - Resolve a few addresses (text or JSON lines)
//!   $ ipgeo lookup 8.8.8.8 10.1.2.3
//!   $ ipgeo --format json lookup 8.8.8.8 --metrics
//!
//! - Resolve a file of addresses, one per line
//!   $ ipgeo --dataset geo.json.gz batch --input ips.txt
//!   $ cat ips.txt | ipgeo batch
//!
//! Data source
//! -----------
//!
//! By default the tables are read from `db/ipdb.sqlite`. `--dataset` points
//! at a `.json` / `.json.gz` export of the same four relations instead.
use anyhow::Context;
use clap::Parser;
use ipgeo_cli::args::{CliArgs, Commands};
use ipgeo_cli::logging::init_logger;
use ipgeo_cli::output::{invalid_input, record, render, render_stats};
use ipgeo_core::{reserved_ranges, GeoIpDb, MetricRegistry};
use log::info;
use rayon::prelude::*;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logger(args.log_level.map(Into::into))?;

    let db = load(&args)?;
    let metrics = MetricRegistry::new("ipgeo");

    match &args.command {
        Commands::Stats => {
            println!(
                "{}",
                render_stats(&db.stats(), reserved_ranges().len(), db.overlapping_ranges())
            );
        }

        Commands::Lookup { ips } => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for ip in ips {
                let outcome = db.lookup_str(ip);
                record(&metrics, &outcome);
                match outcome {
                    Ok(result) => writeln!(out, "{}", render(&result, args.format)?)?,
                    Err(e) => eprintln!("{}", invalid_input(ip, &e)),
                }
            }
            out.flush()?;
        }

        Commands::Batch { input } => {
            let lines = match input {
                Some(path) => {
                    let file = std::fs::File::open(path)
                        .with_context(|| format!("cannot open input {}", path.display()))?;
                    read_addresses(BufReader::new(file))?
                }
                None => read_addresses(io::stdin().lock())?,
            };
            info!("resolving {} addresses", lines.len());

            // collect() on an indexed parallel iterator keeps input order
            let outcomes: Vec<_> = lines
                .par_iter()
                .map(|line| {
                    let outcome = db.lookup_str(line);
                    record(&metrics, &outcome);
                    outcome
                })
                .collect();

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for (line, outcome) in lines.iter().zip(outcomes) {
                match outcome {
                    Ok(result) => writeln!(out, "{}", render(&result, args.format)?)?,
                    Err(e) => eprintln!("{}", invalid_input(line, &e)),
                }
            }
            out.flush()?;
        }
    }

    if args.metrics {
        eprintln!("{}", metrics.to_json()?);
    }
    Ok(())
}

fn load(args: &CliArgs) -> anyhow::Result<GeoIpDb> {
    if let Some(dataset) = &args.dataset {
        return GeoIpDb::load_json(dataset)
            .with_context(|| format!("failed to load dataset {}", dataset.display()));
    }
    load_db(args)
}

#[cfg(feature = "sqlite")]
fn load_db(args: &CliArgs) -> anyhow::Result<GeoIpDb> {
    let options = ipgeo_core::SqliteOptions {
        cache_size: args.cache_size,
    };
    GeoIpDb::load_sqlite(&args.db, &options)
        .with_context(|| format!("failed to load database {}", args.db.display()))
}

#[cfg(not(feature = "sqlite"))]
fn load_db(args: &CliArgs) -> anyhow::Result<GeoIpDb> {
    if args.cache_size.is_some() {
        log::warn!("--cache-size ignored: built without the 'sqlite' feature");
    }
    GeoIpDb::load_from_path(&args.db)
        .with_context(|| format!("failed to load database {}", args.db.display()))
}

/// One trimmed address per line; blank lines and `#` comments dropped.
fn read_addresses<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(trimmed.to_string());
    }
    Ok(out)
}
