//! Sinks writing to the standard streams.

use std::io::Write;

use alogging::{LogMessage, Sink};

/// Writes rendered lines to stdout.
///
/// # Examples
///
/// ```rust
/// use alogging_std::sink::StdoutSink;
///
/// alogging::config::set_sink(Some(&StdoutSink::DEFAULT));
/// alogging::info!("Net", "up");
/// ```
#[derive(Debug, Default)]
pub struct StdoutSink(());

impl StdoutSink {
    /// A `const` version of `StdoutSink::default()` to allow use as a `&'static`.
    pub const DEFAULT: Self = StdoutSink(());
}

impl Sink for StdoutSink {
    fn write(&self, _message: &LogMessage<'_>, line: &str) -> usize {
        write_bytes(line.as_bytes(), std::io::stdout().lock())
    }
}

/// Writes rendered lines to stderr.
#[derive(Debug, Default)]
pub struct StderrSink(());

impl StderrSink {
    /// A `const` version of `StderrSink::default()` to allow use as a `&'static`.
    pub const DEFAULT: Self = StderrSink(());
}

impl Sink for StderrSink {
    fn write(&self, _message: &LogMessage<'_>, line: &str) -> usize {
        write_bytes(line.as_bytes(), std::io::stderr().lock())
    }
}

/// Writes each record to stdout as one JSON object per line, ignoring the rendered prefix.
///
/// ```text
/// {"uptime":42,"time":0,"number":0,"level":"Info","facility":"Net","message":"x=5"}
/// ```
#[derive(Debug, Default)]
pub struct JsonSink(());

impl JsonSink {
    /// A `const` version of `JsonSink::default()` to allow use as a `&'static`.
    pub const DEFAULT: Self = JsonSink(());
}

impl Sink for JsonSink {
    fn write(&self, message: &LogMessage<'_>, _line: &str) -> usize {
        format_json(message, std::io::stdout().lock())
    }
}

fn format_json(message: &LogMessage<'_>, output: impl Write) -> usize {
    let Ok(mut json) = serde_json::to_vec(message) else {
        return 0;
    };
    json.push(b'\n');
    write_bytes(&json, output)
}

// A logger has nowhere to report its own I/O errors, they are dropped.
fn write_bytes(bytes: &[u8], mut output: impl Write) -> usize {
    match output.write_all(bytes) {
        Ok(()) => bytes.len(),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use alogging::{Level, LogMessage};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::{format_json, write_bytes};

    fn message(number: u32, level: Level, message: &'static str) -> LogMessage<'static> {
        LogMessage {
            uptime: 1_500 * number,
            time: 0,
            number,
            level,
            facility: "Net",
            message,
        }
    }

    #[test]
    fn json_smoke_test() {
        let mut output = Vec::new();

        let mut written = 0;
        written += format_json(&message(0, Level::Info, "link up"), &mut output);
        written += format_json(&message(1, Level::Warn, "retry \"dhcp\""), &mut output);
        written += format_json(&message(2, Level::Error, "gave up"), &mut output);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(written, output.len());
        assert_eq!(
            output,
            indoc! {r#"
                {"uptime":0,"time":0,"number":0,"level":"Info","facility":"Net","message":"link up"}
                {"uptime":1500,"time":0,"number":1,"level":"Warn","facility":"Net","message":"retry \"dhcp\""}
                {"uptime":3000,"time":0,"number":2,"level":"Error","facility":"Net","message":"gave up"}
            "#}
        );
    }

    #[test]
    fn write_reports_bytes() {
        let mut output = Vec::new();
        assert_eq!(write_bytes(b"abc\n", &mut output), 4);
        assert_eq!(output, b"abc\n");
    }

    #[test]
    fn write_errors_are_swallowed() {
        let mut full = [0_u8; 2];
        assert_eq!(write_bytes(b"abc\n", &mut full[..]), 0);
    }
}
