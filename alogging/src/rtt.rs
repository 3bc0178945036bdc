use crate::{LogMessage, Sink};

/// Writes rendered lines to the RTT print channel.
///
/// The channel must be set up with `rtt_target::rtt_init_print!()` before the first message is
/// logged, lines logged earlier are dropped by `rtt-target`.
#[derive(Debug, Default)]
pub struct RttSink(());

impl RttSink {
    /// A `const` version of `RttSink::default()` to allow use as a `&'static`.
    pub const DEFAULT: Self = RttSink(());
}

impl Sink for RttSink {
    fn write(&self, _message: &LogMessage<'_>, line: &str) -> usize {
        // A single expression is written verbatim, skipping the formatting machinery.
        rtt_target::rprint!(line);
        line.len()
    }
}
