//! Integration with the [`log`](https://docs.rs/log) facade.
//!
//! Installing the facade routes `log::info!` and friends into the formatting pipeline.
//! The record target becomes the facility and the threshold is shared with
//! [`config::level`][crate::config::level].
//!
//! # Examples
//!
//! ```rust
//! alogging::facade::init()?;
//!
//! log::info!(target: "Net", "x={}", 5);
//! # Ok::<(), log::SetLoggerError>(())
//! ```

use crate::{Level, config};

impl From<::log::Level> for Level {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Trace => Level::Trace,
            ::log::Level::Debug => Level::Debug,
            ::log::Level::Info => Level::Info,
            ::log::Level::Warn => Level::Warn,
            ::log::Level::Error => Level::Error,
        }
    }
}

impl From<Level> for ::log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => ::log::LevelFilter::Trace,
            Level::Debug => ::log::LevelFilter::Debug,
            Level::Info => ::log::LevelFilter::Info,
            Level::Warn => ::log::LevelFilter::Warn,
            Level::Error => ::log::LevelFilter::Error,
        }
    }
}

/// A [`log::Log`](::log::Log) implementation that forwards records to this crate.
#[derive(Debug)]
pub struct Facade(());

/// The facade instance installed by [`init`].
pub static FACADE: Facade = Facade(());

impl ::log::Log for Facade {
    fn enabled(&self, metadata: &::log::Metadata<'_>) -> bool {
        config::enabled(metadata.level().into())
    }

    fn log(&self, record: &::log::Record<'_>) {
        crate::log::logf(record.level().into(), record.target(), *record.args());
    }

    fn flush(&self) {}
}

/// Installs [`FACADE`] as the global `log` logger.
///
/// The `log` crate's own maximum level is opened up completely; filtering happens against the
/// threshold in [`config`], so later calls to [`config::set_level`] take effect immediately.
pub fn init() -> Result<(), ::log::SetLoggerError> {
    ::log::set_logger(&FACADE)?;
    ::log::set_max_level(::log::LevelFilter::Trace);
    Ok(())
}
