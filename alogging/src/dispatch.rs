//! Rendering of complete lines and delivery to the sink and hook.
//!
//! [`log_raw`] renders the configured prefix, the message body and a line terminator into a
//! [`LINE_CAPACITY`][crate::LINE_CAPACITY]-byte buffer, then hands the record and the line to the
//! [`Sink`] and, if one is registered and enabled, to the [`Hook`].
//!
//! The hook is disabled while it runs.
//! Anything it logs still reaches the sink, but never the hook itself.

use crate::{LINE_CAPACITY, LINE_TERMINATOR, LineBuffer, LogMessage, config};

/// Destination for rendered lines, such as a serial port or console.
///
/// Called synchronously once per accepted message.
///
/// # Examples
///
/// ```rust
/// use alogging::{LogMessage, Sink};
///
/// #[derive(Debug)]
/// struct Uart;
///
/// impl Sink for Uart {
///     fn write(&self, _message: &LogMessage<'_>, line: &str) -> usize {
///         // Push `line` to the hardware here.
///         line.len()
///     }
/// }
/// ```
pub trait Sink {
    /// Writes one rendered line, returning the number of bytes written.
    fn write(&self, message: &LogMessage<'_>, line: &str) -> usize;
}

impl<F> Sink for F
where
    F: Fn(&LogMessage<'_>, &str) -> usize,
{
    fn write(&self, message: &LogMessage<'_>, line: &str) -> usize {
        self(message, line)
    }
}

/// Secondary observer of rendered lines, invoked after the sink.
///
/// The hook value doubles as the context argument of the observer: keep any state the hook needs
/// in the implementing type.
pub trait Hook {
    /// Observes one rendered line.
    fn hook(&self, message: &LogMessage<'_>, line: &str);
}

impl<F> Hook for F
where
    F: Fn(&LogMessage<'_>, &str),
{
    fn hook(&self, message: &LogMessage<'_>, line: &str) {
        self(message, line)
    }
}

/// Re-enables the hook when dropped, including while unwinding out of it.
struct HookReentry;

impl Drop for HookReentry {
    fn drop(&mut self) {
        config::set_hook_enabled(true);
    }
}

/// Renders `message` into a complete line and delivers it to the sink and hook.
///
/// The line is the configured [`Prefix`][crate::Prefix], followed by as much of the message body
/// as fits, followed by [`LINE_TERMINATOR`] unless the line already ends in `\r` or `\n`.
///
/// This bypasses the severity threshold and the sequence counter, the record is delivered as is.
pub fn log_raw(message: &LogMessage<'_>) {
    let route = config::route();

    let mut line = LineBuffer::<LINE_CAPACITY>::with_reserve(LINE_TERMINATOR.len());
    // Rendering into a `LineBuffer` cannot fail.
    let _ = route.prefix.render(&mut line, message);
    line.push_str(message.message);
    line.finish_line();

    if let Some(sink) = route.sink {
        sink.write(message, line.as_str());
    }

    if let Some(hook) = config::take_hook() {
        let _reentry = HookReentry;
        hook.hook(message, line.as_str());
    }
}
