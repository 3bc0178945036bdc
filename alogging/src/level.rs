use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log message severity levels.
///
/// These levels follow standard logging conventions, ordered from most verbose to most
/// critical.
/// A message passes the configured threshold when `level >= threshold`.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Level {
    /// The "trace" level.
    ///
    /// Designates very low priority, often extremely verbose, information.
    Trace = 0,

    /// The "debug" level.
    ///
    /// Designates lower priority information.
    Debug = 1,

    /// The "info" level.
    ///
    /// Designates useful information.
    #[default]
    Info = 2,

    /// The "warn" level.
    ///
    /// Designates hazardous situations.
    Warn = 3,

    /// The "error" level.
    ///
    /// Designates very serious errors.
    Error = 4,
}

impl Level {
    /// All levels, from most verbose to most critical.
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Returns the upper-case name of this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Returns the level with the given numeric representation, if any.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The error returned when parsing a [`Level`] from a string fails.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
#[error("unknown log level, expected one of trace, debug, info, warn or error")]
pub struct ParseLevelError(());

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let level = if s.eq_ignore_ascii_case("trace") {
            Level::Trace
        } else if s.eq_ignore_ascii_case("debug") {
            Level::Debug
        } else if s.eq_ignore_ascii_case("info") {
            Level::Info
        } else if s.eq_ignore_ascii_case("warn") || s.eq_ignore_ascii_case("warning") {
            Level::Warn
        } else if s.eq_ignore_ascii_case("error") {
            Level::Error
        } else {
            return Err(ParseLevelError(()));
        };

        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, ParseLevelError};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(Level::default(), Level::Info);
    }

    #[test_case("trace", Level::Trace)]
    #[test_case("DEBUG", Level::Debug)]
    #[test_case(" Info ", Level::Info)]
    #[test_case("warning", Level::Warn)]
    #[test_case("Error", Level::Error)]
    fn parses_names(input: &str, expected: Level) {
        assert_eq!(input.parse::<Level>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!("verbose".parse::<Level>(), Err(ParseLevelError(())));
    }

    #[test]
    fn round_trips_through_u8() {
        for level in Level::ALL {
            assert_eq!(Level::from_u8(level as u8), Some(level));
        }
        assert_eq!(Level::from_u8(5), None);
    }
}
