use serde::Serialize;

use crate::Level;

/// One accepted log event, as handed to the [`Sink`][crate::Sink] and [`Hook`][crate::Hook].
///
/// The record borrows its facility and text, so it only lives for the duration of the dispatch.
/// Use [`LogMessage::to_owned_record`] (with the `alloc` feature) to keep a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LogMessage<'a> {
    /// Monotonic uptime as reported by the configured uptime source.
    pub uptime: u32,

    /// Wall-clock time in seconds since the Unix epoch, 0 if unavailable.
    pub time: u32,

    /// Sequence number, incremented once per accepted message and wrapping on overflow.
    pub number: u32,

    /// Severity of the message.
    pub level: Level,

    /// The subsystem the message originates from.
    pub facility: &'a str,

    /// The rendered message body, without prefix.
    pub message: &'a str,
}

/// An owned copy of a [`LogMessage`].
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct LogRecord {
    /// See [`LogMessage::uptime`].
    pub uptime: u32,
    /// See [`LogMessage::time`].
    pub time: u32,
    /// See [`LogMessage::number`].
    pub number: u32,
    /// See [`LogMessage::level`].
    pub level: Level,
    /// See [`LogMessage::facility`].
    pub facility: alloc::string::String,
    /// See [`LogMessage::message`].
    pub message: alloc::string::String,
}

#[cfg(feature = "alloc")]
impl LogMessage<'_> {
    /// Creates owned copies of the borrowed facility and text.
    pub fn to_owned_record(&self) -> LogRecord {
        use alloc::borrow::ToOwned;

        LogRecord {
            uptime: self.uptime,
            time: self.time,
            number: self.number,
            level: self.level,
            facility: self.facility.to_owned(),
            message: self.message.to_owned(),
        }
    }
}
