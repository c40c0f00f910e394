#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "RIVERQUEST_LOG";

/// Writes records to stderr so stdout stays free for game output and JSON.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

/// `LEVEL - message`, the line written for each record.
pub fn format_record(record: &Record) -> String {
    format!("{} - {}", record.level(), record.args())
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `info` for anything unrecognised.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by [`LOG_ENV`]. Calling it
/// again is harmless.
pub fn init_logging() {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
