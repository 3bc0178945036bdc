//! Host support for `alogging`.
//!
//! Provides sinks writing to the standard streams, time sources backed by `std::time`, and a
//! one-call setup for processes running on a regular operating system.
//!
//! # Examples
//!
//! ```rust
//! alogging_std::init()?;
//!
//! alogging::info!("Net", "listening on port {}", 8080);
//! log::warn!(target: "Net", "routed through the `log` facade");
//! # Ok::<(), alogging_std::InitError>(())
//! ```

#![forbid(unsafe_code)]

use alogging::{Level, ParseLevelError, Sink, config};

pub mod sink;
pub mod time;

/// Environment variable read by [`init`] to pick the threshold.
pub const LEVEL_ENV: &str = "ALOGGING_LEVEL";

/// Error returned by [`init`] and [`init_with_sink`].
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The threshold environment variable does not name a level.
    #[error("invalid value {value:?} in `ALOGGING_LEVEL`")]
    InvalidLevel {
        /// The rejected value.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseLevelError,
    },

    /// Another `log` logger was installed first.
    #[error("failed to install the `log` facade")]
    Facade(#[from] log::SetLoggerError),
}

/// Logs to stdout with std time sources, see [`init_with_sink`].
pub fn init() -> Result<(), InitError> {
    init_with_sink(&sink::StdoutSink::DEFAULT)
}

/// Installs `sink`, [`time::uptime_millis`] and [`time::unix_seconds`], and routes the `log`
/// facade into `alogging`.
///
/// The threshold is read from [`LEVEL_ENV`] and defaults to [`Level::Info`].
/// The configuration is only changed when the environment is valid; the facade can be installed
/// once per process.
pub fn init_with_sink(sink: &'static (dyn Sink + Sync)) -> Result<(), InitError> {
    let level = level_from_env(std::env::var(LEVEL_ENV).ok().as_deref())?;

    config::build()
        .sink(sink)
        .level(level)
        .uptime(time::uptime_millis)
        .time(time::unix_seconds)
        .apply();

    alogging::facade::init()?;
    Ok(())
}

fn level_from_env(value: Option<&str>) -> Result<Level, InitError> {
    let Some(value) = value else {
        return Ok(Level::default());
    };

    value.parse().map_err(|source| InitError::InvalidLevel {
        value: value.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use alogging::Level;
    use pretty_assertions::assert_eq;

    use super::{InitError, level_from_env};

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(level_from_env(None).unwrap(), Level::Info);
    }

    #[test]
    fn level_is_parsed() {
        assert_eq!(level_from_env(Some("warning")).unwrap(), Level::Warn);
        assert_eq!(level_from_env(Some(" TRACE ")).unwrap(), Level::Trace);
    }

    #[test]
    fn invalid_level_is_reported() {
        let error = level_from_env(Some("loud")).unwrap_err();
        assert!(matches!(&error, InitError::InvalidLevel { value, .. } if value == "loud"));
        assert_eq!(
            error.to_string(),
            "invalid value \"loud\" in `ALOGGING_LEVEL`"
        );
    }
}
