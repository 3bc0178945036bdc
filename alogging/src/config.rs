//! Process-wide logging configuration.
//!
//! The configuration holds the active [`Sink`], the optional [`Hook`] and its enabled flag, the
//! severity threshold, the time sources, the line [`Prefix`] and the running sequence counter.
//! It starts out with defaults: no sink, no hook, threshold [`Level::Info`], time sources that
//! always return zero and [`Prefix::DEFAULT`].
//!
//! Setters are meant to run during setup, before logging from other contexts begins.
//! Each access holds a [`critical_section`] only long enough to copy values in or out.
//!
//! # Examples
//!
//! Individual setters:
//!
//! ```rust
//! use alogging::{Level, config};
//!
//! config::set_level(Level::Debug);
//!
//! if config::is_trace() {
//!     // Only reached when the threshold is lowered to `Level::Trace`.
//! }
//! ```
//!
//! Or the builder, which replaces the whole configuration at once:
//!
//! ```rust
//! use alogging::{Level, LogMessage, config};
//!
//! fn uptime() -> u32 {
//!     1234
//! }
//!
//! static SINK: fn(&LogMessage<'_>, &str) -> usize = |_, line| line.len();
//!
//! config::build()
//!     .sink(&SINK)
//!     .level(Level::Warn)
//!     .formatting("{:06} {:06} {:<12} ", true)
//!     .unwrap()
//!     .uptime(uptime)
//!     .apply();
//! ```

use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

use crate::dispatch::{Hook, Sink};
use crate::{Level, Prefix, PrefixError};

/// A source of time, returning either uptime or seconds since the Unix epoch.
pub type TimeSource = fn() -> u32;

fn always_zero() -> u32 {
    0
}

struct State {
    sink: Cell<Option<&'static (dyn Sink + Sync)>>,
    hook: Cell<Option<&'static (dyn Hook + Sync)>>,
    hook_enabled: Cell<bool>,
    level: Cell<Level>,
    uptime: Cell<TimeSource>,
    time: Cell<TimeSource>,
    prefix: Cell<Prefix>,
    counter: Cell<u32>,
}

impl State {
    const fn new() -> Self {
        Self {
            sink: Cell::new(None),
            hook: Cell::new(None),
            hook_enabled: Cell::new(false),
            level: Cell::new(Level::Info),
            uptime: Cell::new(always_zero),
            time: Cell::new(always_zero),
            prefix: Cell::new(Prefix::DEFAULT),
            counter: Cell::new(0),
        }
    }
}

static STATE: Mutex<State> = Mutex::new(State::new());

fn with_state<R>(f: impl FnOnce(&State) -> R) -> R {
    critical_section::with(|cs: CriticalSection<'_>| f(STATE.borrow(cs)))
}

/// Sets the sink every accepted message is written to, `None` removes it.
///
/// Without a sink, messages are still rendered but not written anywhere.
pub fn set_sink(sink: Option<&'static (dyn Sink + Sync)>) {
    with_state(|state| state.sink.set(sink));
}

/// Sets the line prefix template and whether it includes the sequence counter.
///
/// The template must contain two placeholders (uptime, facility) without the counter, or three
/// (sequence, uptime, facility) with it, see [`prefix`][crate::prefix].
pub fn set_formatting(template: &'static str, show_counter: bool) -> Result<(), PrefixError> {
    let prefix = Prefix::new(template, show_counter)?;
    set_prefix(prefix);
    Ok(())
}

/// Sets an already validated line prefix.
pub fn set_prefix(prefix: Prefix) {
    with_state(|state| state.prefix.set(prefix));
}

/// Registers `hook` as the observer of every dispatched line and enables it.
///
/// Any state the hook needs is carried by the hook value itself.
pub fn register_hook(hook: &'static (dyn Hook + Sync)) {
    with_state(|state| {
        state.hook.set(Some(hook));
        state.hook_enabled.set(true);
    });
}

/// Enables or disables the registered hook without unregistering it.
pub fn set_hook_enabled(enabled: bool) {
    with_state(|state| state.hook_enabled.set(enabled));
}

/// Unregisters the hook.
pub fn clear_hook() {
    with_state(|state| {
        state.hook.set(None);
        state.hook_enabled.set(false);
    });
}

/// Sets the severity threshold; messages below it are discarded.
pub fn set_level(level: Level) {
    with_state(|state| state.level.set(level));
}

/// Returns the severity threshold.
pub fn level() -> Level {
    with_state(|state| state.level.get())
}

/// Whether messages at [`Level::Trace`] pass the threshold.
///
/// Use this to skip building expensive arguments.
pub fn is_trace() -> bool {
    enabled(Level::Trace)
}

/// Whether messages at [`Level::Debug`] pass the threshold.
pub fn is_debug() -> bool {
    enabled(Level::Debug)
}

/// Whether messages at `level` pass the threshold.
pub fn enabled(level: Level) -> bool {
    level >= self::level()
}

/// Sets the uptime and wall-clock sources.
///
/// `None` restores the default for that source, which always returns zero.
pub fn set_time_sources(uptime: Option<TimeSource>, time: Option<TimeSource>) {
    with_state(|state| {
        state.uptime.set(uptime.unwrap_or(always_zero));
        state.time.set(time.unwrap_or(always_zero));
    });
}

/// Everything needed to render and route one line.
#[derive(Clone, Copy)]
pub(crate) struct Route {
    pub(crate) sink: Option<&'static (dyn Sink + Sync)>,
    pub(crate) prefix: Prefix,
}

/// Reads the routing configuration.
pub(crate) fn route() -> Route {
    with_state(|state| Route {
        sink: state.sink.get(),
        prefix: state.prefix.get(),
    })
}

/// The time sources and the sequence number reserved for one accepted message.
pub(crate) struct Stamp {
    pub(crate) uptime: TimeSource,
    pub(crate) time: TimeSource,
    pub(crate) number: u32,
}

/// Post-increments the sequence counter and reads the time sources in one critical section.
pub(crate) fn next_stamp() -> Stamp {
    with_state(|state| {
        let number = state.counter.get();
        state.counter.set(number.wrapping_add(1));

        Stamp {
            uptime: state.uptime.get(),
            time: state.time.get(),
            number,
        }
    })
}

/// Returns the registered hook and disables it, if it is registered and enabled.
///
/// The caller re-enables it with [`set_hook_enabled`] once the hook returns.
pub(crate) fn take_hook() -> Option<&'static (dyn Hook + Sync)> {
    with_state(|state| match state.hook.get() {
        Some(hook) if state.hook_enabled.replace(false) => Some(hook),
        _ => None,
    })
}

/// Returns the next sequence number without consuming it.
pub fn counter() -> u32 {
    with_state(|state| state.counter.get())
}

/// Restores the startup defaults, including the sequence counter.
#[cfg(feature = "std")]
pub(crate) fn reset() {
    with_state(|state| {
        let defaults = State::new();
        state.sink.set(defaults.sink.get());
        state.hook.set(defaults.hook.get());
        state.hook_enabled.set(defaults.hook_enabled.get());
        state.level.set(defaults.level.get());
        state.uptime.set(defaults.uptime.get());
        state.time.set(defaults.time.get());
        state.prefix.set(defaults.prefix.get());
        state.counter.set(defaults.counter.get());
    });
}

/// Creates a configuration builder.
///
/// Fields that are not set take their startup defaults when the configuration is applied.
/// The sequence counter is left untouched.
pub fn build() -> Builder {
    Builder::default()
}

/// Builder for a complete logging configuration, created via [`build()`].
#[derive(Clone, Copy)]
#[must_use]
pub struct Builder {
    sink: Option<&'static (dyn Sink + Sync)>,
    hook: Option<&'static (dyn Hook + Sync)>,
    level: Level,
    uptime: TimeSource,
    time: TimeSource,
    prefix: Prefix,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            sink: None,
            hook: None,
            level: Level::Info,
            uptime: always_zero,
            time: always_zero,
            prefix: Prefix::DEFAULT,
        }
    }
}

impl core::fmt::Debug for Builder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Builder")
            .field("sink", &self.sink.is_some())
            .field("hook", &self.hook.is_some())
            .field("level", &self.level)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Builder {
    /// Sets the sink.
    pub fn sink(mut self, sink: &'static (dyn Sink + Sync)) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets the hook, it is enabled when the configuration is applied.
    pub fn hook(mut self, hook: &'static (dyn Hook + Sync)) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Sets the severity threshold.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the uptime source.
    pub fn uptime(mut self, uptime: TimeSource) -> Self {
        self.uptime = uptime;
        self
    }

    /// Sets the wall-clock source.
    pub fn time(mut self, time: TimeSource) -> Self {
        self.time = time;
        self
    }

    /// Sets the line prefix template, see [`set_formatting`].
    pub fn formatting(
        mut self,
        template: &'static str,
        show_counter: bool,
    ) -> Result<Self, PrefixError> {
        self.prefix = Prefix::new(template, show_counter)?;
        Ok(self)
    }

    /// Sets an already validated line prefix.
    pub fn prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = prefix;
        self
    }

    /// Replaces the global configuration.
    pub fn apply(self) {
        with_state(|state| {
            state.sink.set(self.sink);
            state.hook.set(self.hook);
            state.hook_enabled.set(self.hook.is_some());
            state.level.set(self.level);
            state.uptime.set(self.uptime);
            state.time.set(self.time);
            state.prefix.set(self.prefix);
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::vec;

    use super::with_state;
    use crate::Level;
    use crate::test_helpers::{CaptureSink, reset};

    #[test]
    #[serial]
    fn sequence_number_wraps() {
        static SINK: CaptureSink = CaptureSink::new();
        reset();
        super::set_sink(Some(&SINK));
        with_state(|state| state.counter.set(u32::MAX));

        crate::log::log_str(Level::Error, "Test", "last");
        crate::log::log_str(Level::Error, "Test", "first");

        let numbers: std::vec::Vec<_> = SINK
            .take()
            .into_iter()
            .map(|captured| captured.record.number)
            .collect();
        assert_eq!(numbers, [u32::MAX, 0]);
        assert_eq!(super::counter(), 1);

        reset();
    }
}
