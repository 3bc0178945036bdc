//! Logging macros.
//!
//! - `logf!`: Generic logging macro that accepts a severity level
//! - `trace!`: Logs trace-level messages (most verbose)
//! - `debug!`: Logs debug-level messages
//! - `info!`: Logs informational messages
//! - `warn!`: Logs warning messages
//! - `error!`: Logs error messages
//!
//! All macros take a facility followed by [`format_args!`] style arguments.
//! The arguments are only evaluated when the severity passes the configured threshold.

/// Logs a message with the specified severity level.
///
/// This is the base logging macro that the severity-specific macros build upon.
///
/// # Examples
///
/// ```rust
/// use alogging::{Level, logf};
///
/// logf!(Level::Info, "Net", "x={}", 5);
/// ```
#[macro_export]
macro_rules! logf {
    ($level:expr, $facility:expr, $($args:tt)+) => {{
        let level: $crate::Level = $level;
        if $crate::config::enabled(level) {
            $crate::log::logf(level, $facility, ::core::format_args!($($args)+));
        }
    }};
}

/// Logs a trace-level message.
///
/// Trace messages are used for very detailed debugging information,
/// typically only enabled during development or deep troubleshooting.
///
/// # Examples
///
/// ```rust
/// use alogging::trace;
///
/// let register = 0x40;
/// trace!("I2C", "read register {register:#04x}");
/// ```
#[macro_export]
macro_rules! trace {
    ($facility:expr, $($args:tt)+) => {
        $crate::logf!($crate::Level::Trace, $facility, $($args)+)
    };
}

/// Logs a debug-level message.
///
/// # Examples
///
/// ```rust
/// use alogging::debug;
///
/// debug!("Sched", "{} tasks ready", 3);
/// ```
#[macro_export]
macro_rules! debug {
    ($facility:expr, $($args:tt)+) => {
        $crate::logf!($crate::Level::Debug, $facility, $($args)+)
    };
}

/// Logs an info-level message.
///
/// # Examples
///
/// ```rust
/// use alogging::info;
///
/// info!("Net", "listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($facility:expr, $($args:tt)+) => {
        $crate::logf!($crate::Level::Info, $facility, $($args)+)
    };
}

/// Logs a warn-level message.
///
/// # Examples
///
/// ```rust
/// use alogging::warn;
///
/// warn!("Power", "battery at {}%", 9);
/// ```
#[macro_export]
macro_rules! warn {
    ($facility:expr, $($args:tt)+) => {
        $crate::logf!($crate::Level::Warn, $facility, $($args)+)
    };
}

/// Logs an error-level message.
///
/// # Examples
///
/// ```rust
/// use alogging::error;
///
/// error!("Flash", "erase failed at {:#010x}", 0x0800_4000);
/// ```
#[macro_export]
macro_rules! error {
    ($facility:expr, $($args:tt)+) => {
        $crate::logf!($crate::Level::Error, $facility, $($args)+)
    };
}
