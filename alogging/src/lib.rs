//! # `alogging`
//!
//! A bounded, allocation-free logging core for embedded targets.
//!
//! Log calls are filtered by severity, rendered into fixed-capacity buffers, timestamped,
//! sequenced and handed to a caller-supplied [`Sink`], plus an optional observer [`Hook`].
//! Nothing on the logging path allocates, blocks or fails: oversized output is truncated.
//!
//! ## Feature Flags
//!
//! - `std` - Enable standard library support (implies `alloc`) and the `critical-section`
//!   implementation for hosted targets
//! - `alloc` - Enable owned records ([`LogRecord`])
//! - `log` - Route the [`log`](https://docs.rs/log) facade into this crate, see [`facade`]
//! - `rtt` - Provide [`RttSink`], writing lines to an RTT up-channel
//! - `crlf` - Terminate lines with `\r\n` instead of `\n`
//!
//! ## Basic Usage
//!
//! Configure a sink once during startup:
//!
//! ```rust
//! use alogging::{Level, LogMessage, config};
//!
//! fn write_line(_message: &LogMessage<'_>, line: &str) -> usize {
//!     print!("{line}");
//!     line.len()
//! }
//!
//! static SINK: fn(&LogMessage<'_>, &str) -> usize = write_line;
//!
//! config::set_sink(Some(&SINK));
//! config::set_level(Level::Debug);
//! ```
//!
//! Then log with the macros, or build a line from several values with a [`LogStream`]:
//!
//! ```rust
//! use alogging::{Logger, info};
//!
//! info!("Net", "connected to {}:{}", "10.0.0.1", 8080);
//!
//! let logger = Logger::new("Sys");
//! logger.begin().append("free=").append(1024_u32).append(" bytes");
//! ```
//!
//! ## Concurrency
//!
//! Configuration is process-wide and meant to be written during setup.
//! Every access goes through a short [`critical_section`], which is never held while the sink,
//! the hook or a time source runs.

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod buffer;
pub mod config;
pub mod dispatch;
#[cfg(feature = "log")]
pub mod facade;
mod level;
pub mod log;
mod macros;
mod message;
pub mod prefix;
#[cfg(feature = "rtt")]
mod rtt;
mod stream;
#[cfg(feature = "std")]
#[doc(hidden)]
pub mod test_helpers;

pub use buffer::LineBuffer;
pub use dispatch::{Hook, Sink};
pub use level::{Level, ParseLevelError};
#[cfg(feature = "alloc")]
pub use message::LogRecord;
pub use message::LogMessage;
pub use prefix::{Prefix, PrefixError};
#[cfg(feature = "rtt")]
pub use rtt::RttSink;
pub use stream::{Append, LogStream, Logger};

/// Maximum length of one log message body, including the NUL byte.
pub const LINE_MAX: usize = 256;

/// Capacity of the buffer a formatted message body is rendered into.
pub const MESSAGE_CAPACITY: usize = LINE_MAX;

/// Capacity of the buffer a complete line (prefix, body and terminator) is rendered into.
pub const LINE_CAPACITY: usize = LINE_MAX * 2;

/// The terminator appended to every rendered line.
#[cfg(not(feature = "crlf"))]
pub const LINE_TERMINATOR: &str = "\n";

/// The terminator appended to every rendered line.
#[cfg(feature = "crlf")]
pub const LINE_TERMINATOR: &str = "\r\n";
