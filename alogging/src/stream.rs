//! Building one line from several values.
//!
//! A [`LogStream`] accumulates appended values into its own [`LINE_MAX`]-byte buffer and logs
//! the result exactly once: on [`LogStream::flush`] or, failing that, when it is dropped.
//! [`Logger`] is a small factory that creates streams for a default facility.
//!
//! # Examples
//!
//! ```rust
//! use alogging::Logger;
//!
//! static LOG: Logger = Logger::new("Sys");
//!
//! fn report(free: usize) {
//!     LOG.begin().append("free=").append(free).append(", load=").append(0.25_f32);
//! }
//!
//! report(1024);
//! ```

use core::fmt::{self, Write};

use crate::{LINE_MAX, Level, LineBuffer};

mod sealed {
    pub trait Sealed {}
}

/// A value that can be appended to a [`LogStream`].
///
/// Implemented for the integer types (rendered in decimal), `f32` and `f64` (rendered with six
/// fractional digits), `char`, `&str` and, with the `alloc` feature, `String`.
pub trait Append: sealed::Sealed {
    /// Appends `self` to `stream`.
    fn append_to(self, stream: &mut LogStream<'_>);
}

macro_rules! impl_append {
    ($format:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Append for $ty {
                fn append_to(self, stream: &mut LogStream<'_>) {
                    stream.printf(format_args!($format, self));
                }
            }
        )+
    };
}

impl_append!("{}" => u8, u16, u32, u64, u128, usize);
impl_append!("{}" => i8, i16, i32, i64, i128, isize);
impl_append!("{:.6}" => f32, f64);

impl sealed::Sealed for char {}

impl Append for char {
    fn append_to(self, stream: &mut LogStream<'_>) {
        stream.print(self.encode_utf8(&mut [0; 4]));
    }
}

impl sealed::Sealed for &str {}

impl Append for &str {
    fn append_to(self, stream: &mut LogStream<'_>) {
        stream.print(self);
    }
}

#[cfg(feature = "alloc")]
impl sealed::Sealed for &alloc::string::String {}

#[cfg(feature = "alloc")]
impl Append for &alloc::string::String {
    fn append_to(self, stream: &mut LogStream<'_>) {
        stream.print(self);
    }
}

/// A line under construction, logged exactly once.
///
/// The stream is flushed by [`flush`](Self::flush) or when it goes out of scope, whichever
/// happens first; later flushes do nothing and later appends are discarded.
/// A stream with no text is never logged.
///
/// Streams are not `Clone`: a copy of an unflushed stream would log the same line twice.
pub struct LogStream<'a> {
    facility: &'a str,
    level: Level,
    message: LineBuffer<LINE_MAX>,
    flushed: bool,
}

impl<'a> LogStream<'a> {
    /// Creates an empty stream for `facility` at `level`.
    pub fn new(facility: &'a str, level: Level) -> Self {
        Self {
            facility,
            level,
            message: LineBuffer::new(),
            flushed: false,
        }
    }

    /// Appends a value, see [`Append`] for the supported types.
    pub fn append<T>(&mut self, value: T) -> &mut Self
    where
        T: Append,
    {
        value.append_to(self);
        self
    }

    /// Appends formatted text, truncating what does not fit.
    pub fn printf(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        if !self.flushed {
            let _ = self.message.write_fmt(args);
        }
        self
    }

    /// Appends text verbatim, truncating what does not fit.
    pub fn print(&mut self, text: &str) -> &mut Self {
        if !self.flushed {
            self.message.push_str(text);
        }
        self
    }

    /// Logs the accumulated text, unless that already happened.
    pub fn flush(&mut self) -> &mut Self {
        if !core::mem::replace(&mut self.flushed, true) && !self.message.is_empty() {
            crate::log::log_str(self.level, self.facility, self.message.as_str());
        }
        self
    }

    /// The facility the line is logged with.
    pub fn facility(&self) -> &'a str {
        self.facility
    }

    /// The severity the line is logged with.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The text accumulated so far.
    pub fn as_str(&self) -> &str {
        self.message.as_str()
    }

    /// Whether the stream has been flushed.
    pub fn is_flushed(&self) -> bool {
        self.flushed
    }
}

impl Write for LogStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}

impl Drop for LogStream<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

impl fmt::Debug for LogStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStream")
            .field("facility", &self.facility)
            .field("level", &self.level)
            .field("message", &self.message.as_str())
            .field("flushed", &self.flushed)
            .finish()
    }
}

/// Creates [`LogStream`]s for a default facility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logger {
    facility: &'static str,
}

impl Logger {
    /// The facility used by [`Logger::default`].
    pub const DEFAULT_FACILITY: &'static str = "Root";

    /// Creates a logger for `facility`.
    pub const fn new(facility: &'static str) -> Self {
        Self { facility }
    }

    /// The default facility of this logger.
    pub fn facility(&self) -> &'static str {
        self.facility
    }

    /// Starts an info-level line with the default facility.
    pub fn begin(&self) -> LogStream<'static> {
        LogStream::new(self.facility, Level::Info)
    }

    /// Starts an info-level line with another facility.
    pub fn begin_with<'a>(&self, facility: &'a str) -> LogStream<'a> {
        LogStream::new(facility, Level::Info)
    }

    /// Starts a line at `level` with the default facility.
    pub fn begin_at(&self, level: Level) -> LogStream<'static> {
        LogStream::new(self.facility, level)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACILITY)
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::{LogStream, Logger};
    use crate::{LINE_MAX, Level};
    use pretty_assertions::assert_eq;

    // Trace is below the default threshold, flushing these streams dispatches nothing.
    fn stream() -> LogStream<'static> {
        LogStream::new("Test", Level::Trace)
    }

    #[test]
    fn appends_scalars() {
        let mut stream = stream();
        stream
            .append(7_u8)
            .append(' ')
            .append(u64::MAX)
            .append(' ')
            .append(-12_i16)
            .append(' ')
            .append(i64::MIN)
            .append(' ')
            .append(usize::MAX)
            .append(' ')
            .append(1.5_f32)
            .append(' ')
            .append(-0.125_f64)
            .append(' ')
            .append('\u{e9}')
            .append(' ')
            .append("str");

        let expected = std::format!(
            "7 18446744073709551615 -12 -9223372036854775808 {} 1.500000 -0.125000 \u{e9} str",
            usize::MAX
        );
        assert_eq!(stream.as_str(), expected);
    }

    #[test]
    fn appends_strings() {
        let owned = std::string::String::from("owned");
        let mut stream = stream();
        stream.append(&owned);
        write!(stream, "+{}", 1).unwrap();
        stream.printf(format_args!("+{:x}", 255));
        assert_eq!(stream.as_str(), "owned+1+ff");
    }

    #[test]
    fn truncates_at_capacity() {
        let mut stream = stream();
        for _ in 0..LINE_MAX {
            stream.append("ab");
        }
        assert_eq!(stream.as_str().len(), LINE_MAX - 1);
    }

    #[test]
    fn appends_after_flush_are_discarded() {
        let mut stream = stream();
        stream.append("before").flush();
        stream.append("after");
        assert!(stream.is_flushed());
        assert_eq!(stream.as_str(), "before");
    }

    #[test]
    fn logger_facilities() {
        let logger = Logger::default();
        assert_eq!(logger.facility(), "Root");
        assert_eq!(logger.begin().facility(), "Root");
        assert_eq!(logger.begin().level(), Level::Info);

        let facility = std::string::String::from("Dyn");
        assert_eq!(logger.begin_with(&facility).facility(), "Dyn");
        assert_eq!(Logger::new("Sys").begin_at(Level::Warn).level(), Level::Warn);
    }
}
