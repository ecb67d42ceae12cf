//! Routes [`log`] records from the library crates to the console.

use std::io::Write as _;

use log::{LevelFilter, Log, Metadata, Record};

use super::{Level, buf_stderr};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs the console logger.
///
/// `verbosity` is the amount of `-v` flags: none shows info and above, one
/// adds debug output, two or more add trace output.
pub fn init_logger(verbosity: u8) {
    let max = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // only fails if a logger is already installed, which is fine to keep
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        };

        super::__println(level, *record.args());
    }

    fn flush(&self) {
        _ = buf_stderr().flush();
    }
}
