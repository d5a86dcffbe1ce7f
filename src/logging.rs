use std::{
    io::Write as _,
    sync::{OnceLock, PoisonError, RwLock},
};

use colored::{Color, Colorize as _};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::Error;

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn))
}

/// Installs the logger. Every `-v` lowers the threshold by one level, starting at warnings.
pub fn init(verbosity: u8) -> Result<(), Error> {
    let logger = get_logger();
    logger.set_min_level(level_for(verbosity));

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Magenta,
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = record.level();
            let _ = writeln!(
                std::io::stderr().lock(),
                "{} [{}] {}",
                level.as_str().color(level_color(level)),
                record.module_path().unwrap_or("unknown"),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
