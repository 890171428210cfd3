//! Logger initialization.

use log::LevelFilter;
use std::io::Write;

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` is read first; an explicit `level` (from `--log-level`)
/// overrides it. With neither set only warnings and errors are shown.
pub fn init_logger(level: Option<LevelFilter>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    if let Some(level) = level {
        builder.filter_level(level);
        builder.filter_module("sqlx", level.min(LevelFilter::Warn));
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {:<5} {}] {}",
            buf.timestamp_millis(),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.target(env_logger::Target::Stderr);
    builder.try_init()?;
    Ok(())
}
