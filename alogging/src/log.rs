//! Severity filtering, message rendering and record creation.
//!
//! This module is the entry point used by the logging macros and by [`LogStream`][crate::LogStream].
//! A call below the configured threshold returns immediately: no buffer is touched, the
//! sequence counter does not move and nothing is dispatched.
//! An accepted call renders its body into a [`MESSAGE_CAPACITY`]-byte buffer, truncating
//! oversized output, stamps it with uptime, wall-clock time and the next sequence number and
//! forwards it to [`log_raw`].
//!
//! # Examples
//!
//! ```rust
//! use alogging::Level;
//! use alogging::log::{log_str, logf};
//!
//! logf(Level::Info, "Net", format_args!("x={}", 5));
//! log_str(Level::Error, "Net", "link down");
//! ```

use core::fmt::Write;

use crate::dispatch::log_raw;
use crate::{LineBuffer, Level, LogMessage, MESSAGE_CAPACITY, config};

/// Logs a message rendered from `args` with the given severity and facility.
///
/// Prefer using the macros, which skip evaluating their arguments when `level` is filtered.
pub fn logf(level: Level, facility: &str, args: core::fmt::Arguments<'_>) {
    if !config::enabled(level) {
        return;
    }

    let mut message = LineBuffer::<MESSAGE_CAPACITY>::new();
    // Rendering into a `LineBuffer` only fails if a `Display` impl reports an error, in which case
    // the output up to that point is logged.
    let _ = message.write_fmt(args);

    dispatch(level, facility, message.as_str());
}

/// Logs an already rendered message body with the given severity and facility.
///
/// The body is truncated to [`MESSAGE_CAPACITY`] like the output of [`logf`].
pub fn log_str(level: Level, facility: &str, body: &str) {
    if !config::enabled(level) {
        return;
    }

    let mut message = LineBuffer::<MESSAGE_CAPACITY>::new();
    message.push_str(body);

    dispatch(level, facility, message.as_str());
}

fn dispatch(level: Level, facility: &str, message: &str) {
    let stamp = config::next_stamp();

    log_raw(&LogMessage {
        uptime: (stamp.uptime)(),
        time: (stamp.time)(),
        number: stamp.number,
        level,
        facility,
        message,
    });
}
