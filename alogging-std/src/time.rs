//! Time sources backed by `std::time`.
//!
//! Both functions match [`alogging::config::TimeSource`] and can be passed to
//! [`alogging::config::set_time_sources`].

use std::sync::LazyLock;
use std::time::{Instant, SystemTime};

static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Milliseconds since the first call, wrapping after roughly 49 days.
pub fn uptime_millis() -> u32 {
    EPOCH.elapsed().as_millis() as u32
}

/// Seconds since the Unix epoch, or 0 if the system clock is before 1970 or past 2106.
pub fn unix_seconds() -> u32 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .ok()
        .and_then(|since_epoch| u32::try_from(since_epoch.as_secs()).ok())
        .unwrap_or(0)
}
