#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level name.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Writes records to stderr. Stdout belongs to the console game and to the
/// JSON summary printed by `sim`, so log lines must never land there.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Read a level from [`LOG_ENV`], falling back to `warn` when it is unset or
/// not a level name.
pub fn level_from_env() -> LevelFilter {
    parse_level(env::var(LOG_ENV).ok().as_deref())
}

/// Install the stderr logger at the level chosen by [`level_from_env`].
/// Calling it again is harmless.
pub fn init_logging() {
    let level = level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
