// src/logger.rs
// =============================================================================
// Logger setup.
//
// We log through the `log` facade and let `env_logger` print the records:
// - defaults first: warnings for everyone, the --verbose level for this crate
// - chatty dependencies are capped so HTML parsing and connection pooling
//   don't flood the output
// - RUST_LOG is applied last, so `RUST_LOG=scarlet=trace` or
//   `RUST_LOG=reqwest=debug` override the defaults above
//
// Progress lines (URLs found, final statistics) are NOT log records; they go
// straight to stdout through report::ConsoleReporter. Logs go to stderr.
// =============================================================================

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter, SetLoggerError};
use std::io::Write;

/// Installs the global logger. Call once, at startup.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = default_builder(level);
    builder.parse_default_env();
    builder.try_init()
}

// Builder with our defaults, before any RUST_LOG directives are applied
fn default_builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();

    builder.filter_level(LevelFilter::Warn);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("hyper", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Warn);
    builder.filter_module("scarlet", level);

    builder.format(|buf, record| {
        let level = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN".red(),
            Level::Info => "INFO".cyan(),
            Level::Debug => "DEBUG".blue(),
            Level::Trace => "TRACE".dimmed(),
        };
        writeln!(buf, "[{}] {}", level, record.args())
    });

    builder
}
