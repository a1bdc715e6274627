use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Writes records to stderr so they stay out of the board on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name such as `debug`; unknown names fall back to `warn`.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging with a level taken from the `WORDLE_LOG` environment variable.
/// Defaults to `warn` if the variable is not set or invalid. Calling it twice is harmless.
pub fn init_logging() {
    let level = level_from_env(env::var("WORDLE_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
