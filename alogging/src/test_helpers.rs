//! Helpers for tests of code that logs.

use std::string::String;
use std::sync::Mutex;
use std::vec::Vec;

use crate::{Hook, LogMessage, LogRecord, Sink};

/// One line delivered to a [`CaptureSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captured {
    /// Owned copy of the dispatched record.
    pub record: LogRecord,
    /// The rendered line.
    pub line: String,
}

/// A sink (and hook) that stores every line it receives in memory.
///
/// # Examples
///
/// ```rust
/// use alogging::test_helpers::CaptureSink;
///
/// static CAPTURE: CaptureSink = CaptureSink::new();
///
/// alogging::config::set_sink(Some(&CAPTURE));
/// alogging::error!("Test", "captured");
///
/// for captured in CAPTURE.take() {
///     println!("{:?}: {}", captured.record.level, captured.line);
/// }
/// ```
#[derive(Debug)]
pub struct CaptureSink {
    captured: Mutex<Vec<Captured>>,
}

impl CaptureSink {
    /// Creates an empty capture.
    pub const fn new() -> Self {
        Self {
            captured: Mutex::new(Vec::new()),
        }
    }

    /// Removes and returns everything captured so far.
    pub fn take(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().drain(..).collect()
    }

    /// Removes everything captured so far and returns only the record texts.
    pub fn take_messages(&self) -> Vec<String> {
        self.take()
            .into_iter()
            .map(|captured| captured.record.message)
            .collect()
    }

    fn capture(&self, message: &LogMessage<'_>, line: &str) {
        self.captured.lock().unwrap().push(Captured {
            record: message.to_owned_record(),
            line: line.into(),
        });
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for CaptureSink {
    fn write(&self, message: &LogMessage<'_>, line: &str) -> usize {
        self.capture(message, line);
        line.len()
    }
}

impl Hook for CaptureSink {
    fn hook(&self, message: &LogMessage<'_>, line: &str) {
        self.capture(message, line);
    }
}

/// Restores the startup configuration, including the sequence counter.
pub fn reset() {
    crate::config::reset();
}
