#![expect(missing_docs, reason = "example")]

use std::io::Write;
use std::sync::LazyLock;
use std::time::Instant;

use alogging::{Level, LogMessage, Logger, config, debug, info, trace, warn};

static LOG: Logger = Logger::new("Main");

fn stdout_sink(_message: &LogMessage<'_>, line: &str) -> usize {
    // Write errors have nowhere to be reported.
    let _ = std::io::stdout().write_all(line.as_bytes());
    line.len()
}

fn uptime() -> u32 {
    static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
    EPOCH.elapsed().as_millis() as u32
}

static SINK: fn(&LogMessage<'_>, &str) -> usize = stdout_sink;

fn main() {
    config::build()
        .sink(&SINK)
        .uptime(uptime)
        .level(Level::Debug)
        .formatting("{:06} {:06} {:<8} ", true)
        .expect("template has three placeholders")
        .apply();

    info!("Main", "starting {} workers", 3);
    trace!("Main", "not shown, below the threshold");

    for worker in 0..3_u8 {
        LOG.begin_with("Worker")
            .append("worker ")
            .append(worker)
            .append(" ready after ")
            .append(0.5_f32 * f32::from(worker))
            .append("s");
    }

    if config::is_debug() {
        debug!("Main", "counter at {}", config::counter());
    }

    warn!("Main", "shutting down");
}
