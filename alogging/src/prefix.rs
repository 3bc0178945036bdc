//! Line-prefix templates.
//!
//! Every rendered line starts with a prefix built from a template and the message record.
//! Templates use `{}` placeholders that are filled, in order, with either
//! `{uptime, facility}` or `{sequence, uptime, facility}`, depending on whether the sequence
//! counter is displayed.
//!
//! A placeholder may carry a spec of the form `{:[align][0][width]}`:
//!
//! - `align` is one of `<` (left), `>` (right) or `^` (center)
//! - `0` pads numbers with zeros and cannot be combined with `align`
//! - `width` is the minimum field width, at most [`LINE_CAPACITY`][crate::LINE_CAPACITY]
//!
//! `{{` and `}}` produce literal braces.
//!
//! # Examples
//!
//! ```rust
//! use alogging::{Level, LineBuffer, LogMessage, Prefix};
//!
//! let prefix = Prefix::new("[{:>4}] {:06} {:<6}| ", true).unwrap();
//! let message = LogMessage {
//!     uptime: 1500,
//!     time: 0,
//!     number: 7,
//!     level: Level::Info,
//!     facility: "Net",
//!     message: "up",
//! };
//!
//! let mut line = LineBuffer::<64>::new();
//! prefix.render(&mut line, &message).unwrap();
//! assert_eq!(line.as_str(), "[   7] 001500 Net   | ");
//! ```

use core::fmt::{self, Write};

use crate::{LINE_CAPACITY, LogMessage};

/// An error validating a prefix template.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum PrefixError {
    /// A placeholder could not be parsed.
    #[error("malformed placeholder at byte {offset}")]
    MalformedPlaceholder {
        /// Byte offset of the placeholder in the template.
        offset: usize,
    },
    /// The number of placeholders does not match the fields provided.
    #[error("the template has {found} placeholders, expected {expected}")]
    FieldCount {
        /// Number of fields provided for the counter-display setting.
        expected: usize,
        /// Number of placeholders in the template.
        found: usize,
    },
}

/// A validated line-prefix template together with its counter-display flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix {
    template: &'static str,
    show_counter: bool,
}

impl Prefix {
    /// Zero-padded uptime followed by the facility, left-aligned in 25 columns.
    pub const DEFAULT: Self = Self {
        template: "{:06} {:<25} ",
        show_counter: false,
    };

    /// Like [`Prefix::DEFAULT`], with the zero-padded sequence number in front.
    pub const DEFAULT_WITH_COUNTER: Self = Self {
        template: "{:06} {:06} {:<25} ",
        show_counter: true,
    };

    /// Validates `template` against the fields selected by `show_counter`.
    pub fn new(template: &'static str, show_counter: bool) -> Result<Self, PrefixError> {
        let mut found = 0;
        for (offset, segment) in Segments::new(template) {
            match segment {
                Segment::Literal(_) => {}
                Segment::Field(_) => found += 1,
                Segment::Invalid(_) => return Err(PrefixError::MalformedPlaceholder { offset }),
            }
        }

        let expected = Self::field_count(show_counter);
        if found != expected {
            return Err(PrefixError::FieldCount { expected, found });
        }

        Ok(Self {
            template,
            show_counter,
        })
    }

    /// Number of placeholders a template needs for the given counter-display setting.
    pub const fn field_count(show_counter: bool) -> usize {
        if show_counter { 3 } else { 2 }
    }

    /// The template string.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Whether the sequence number is part of the prefix.
    pub fn show_counter(&self) -> bool {
        self.show_counter
    }

    /// Renders the prefix for `message` into `out`.
    pub fn render<W>(&self, out: &mut W, message: &LogMessage<'_>) -> fmt::Result
    where
        W: Write,
    {
        let with_counter = [
            Value::Number(message.number),
            Value::Number(message.uptime),
            Value::Text(message.facility),
        ];
        let without_counter = [Value::Number(message.uptime), Value::Text(message.facility)];
        let values: &[Value<'_>] = if self.show_counter {
            &with_counter
        } else {
            &without_counter
        };

        let mut values = values.iter();
        for (_, segment) in Segments::new(self.template) {
            match segment {
                Segment::Literal(text) | Segment::Invalid(text) => out.write_str(text)?,
                Segment::Field(spec) => {
                    if let Some(value) = values.next() {
                        spec.write(out, value)?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FieldSpec {
    align: Option<Align>,
    zero: bool,
    width: usize,
}

impl FieldSpec {
    /// Parses the text between the braces of a placeholder.
    fn parse(inner: &str) -> Option<Self> {
        let mut spec = FieldSpec {
            align: None,
            zero: false,
            width: 0,
        };

        if inner.is_empty() {
            return Some(spec);
        }

        let mut rest = inner.strip_prefix(':')?;

        spec.align = match rest.chars().next() {
            Some('<') => Some(Align::Left),
            Some('>') => Some(Align::Right),
            Some('^') => Some(Align::Center),
            _ => None,
        };
        if spec.align.is_some() {
            rest = &rest[1..];
        }

        if let Some(stripped) = rest.strip_prefix('0') {
            spec.zero = true;
            rest = stripped;
        }

        // Zero padding already implies right alignment for numbers.
        if spec.zero && spec.align.is_some() {
            return None;
        }

        if !rest.is_empty() {
            spec.width = rest.parse().ok()?;
        }

        // Padding can never usefully exceed a whole line.
        if spec.width > LINE_CAPACITY {
            return None;
        }

        Some(spec)
    }

    fn write<W>(&self, out: &mut W, value: &Value<'_>) -> fmt::Result
    where
        W: Write,
    {
        let width = self.width;
        match (self.zero, self.align) {
            (true, _) => write!(out, "{value:0width$}"),
            (false, Some(Align::Left)) => write!(out, "{value:<width$}"),
            (false, Some(Align::Right)) => write!(out, "{value:>width$}"),
            (false, Some(Align::Center)) => write!(out, "{value:^width$}"),
            (false, None) => write!(out, "{value:width$}"),
        }
    }
}

enum Value<'a> {
    Number(u32),
    Text(&'a str),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => fmt::Display::fmt(number, f),
            Value::Text(text) => fmt::Display::fmt(text, f),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Field(FieldSpec),
    /// Unparseable text, rendered verbatim.
    Invalid(&'a str),
}

/// Splits a template into segments, yielding each with its byte offset.
struct Segments<'a> {
    template: &'a str,
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            template,
            rest: template,
        }
    }

    fn advance(&mut self, by: usize) -> &'a str {
        let (taken, rest) = self.rest.split_at(by);
        self.rest = rest;
        taken
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = (usize, Segment<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let offset = self.template.len() - self.rest.len();

        let segment = if self.rest.starts_with("{{") || self.rest.starts_with("}}") {
            let escaped = self.advance(2);
            Segment::Literal(&escaped[..1])
        } else if self.rest.starts_with('{') {
            match self.rest.find('}') {
                Some(end) => {
                    let placeholder = self.advance(end + 1);
                    match FieldSpec::parse(&placeholder[1..end]) {
                        Some(spec) => Segment::Field(spec),
                        None => Segment::Invalid(placeholder),
                    }
                }
                None => Segment::Invalid(self.advance(self.rest.len())),
            }
        } else if self.rest.starts_with('}') {
            Segment::Invalid(self.advance(1))
        } else {
            let end = self.rest.find(['{', '}']).unwrap_or(self.rest.len());
            Segment::Literal(self.advance(end))
        };

        Some((offset, segment))
    }
}
