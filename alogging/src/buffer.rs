use core::fmt;

use crate::LINE_TERMINATOR;

/// A fixed-capacity text buffer that truncates instead of overflowing.
///
/// `N` is the total capacity including the NUL byte that always follows the contents, so at most
/// `N - 1` bytes of text are stored.
/// Truncation happens on a `char` boundary, the contents are always valid UTF-8.
///
/// Writing through [`core::fmt::Write`] never fails; output that does not fit is dropped.
///
/// # Examples
///
/// ```rust
/// use core::fmt::Write;
///
/// use alogging::LineBuffer;
///
/// let mut buffer = LineBuffer::<8>::new();
/// write!(buffer, "x={}", 123_456_789).unwrap();
///
/// assert_eq!(buffer.as_str(), "x=12345");
/// assert_eq!(buffer.as_bytes_with_nul(), b"x=12345\0");
/// ```
pub struct LineBuffer<const N: usize> {
    // The text followed by a single `'\0'`.
    text: heapless::String<N>,
    // Maximum number of text bytes accepted by `push_str`.
    limit: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// Total capacity in bytes, including the NUL byte.
    pub const CAPACITY: usize = N;

    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::with_reserve(0)
    }

    /// Creates an empty buffer that keeps `reserve` bytes free for [`finish_line`](Self::finish_line).
    pub fn with_reserve(reserve: usize) -> Self {
        const { assert!(N > 0, "a line buffer needs room for the NUL byte") };

        let mut text = heapless::String::new();
        let _ = text.push('\0');

        Self {
            text,
            limit: (N - 1).saturating_sub(reserve),
        }
    }

    /// Appends as much of `s` as fits and returns the number of bytes written.
    pub fn push_str(&mut self, s: &str) -> usize {
        let room = self.limit.saturating_sub(self.len());

        let mut take = room.min(s.len());
        while !s.is_char_boundary(take) {
            take -= 1;
        }

        if take > 0 {
            self.text.pop();
            // Both pushes fit: `limit` is at most `N - 1`, leaving a byte for the NUL.
            let _ = self.text.push_str(&s[..take]);
            let _ = self.text.push('\0');
        }

        take
    }

    /// Releases any reservation and appends [`LINE_TERMINATOR`] unless the text already ends
    /// in `\r` or `\n`.
    pub fn finish_line(&mut self) {
        self.limit = N - 1;

        if !self.as_str().ends_with(['\r', '\n']) {
            self.push_str(LINE_TERMINATOR);
        }
    }

    /// Returns the text, without the NUL byte.
    pub fn as_str(&self) -> &str {
        &self.text[..self.len()]
    }

    /// Returns the text followed by its NUL byte.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of text bytes stored.
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    /// Whether no text has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of text bytes that can still be written.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.len())
    }

    /// Removes all text.
    pub fn clear(&mut self) {
        self.text.clear();
        let _ = self.text.push('\0');
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for LineBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("capacity", &N)
            .field("text", &self.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::LineBuffer;
    use crate::LINE_TERMINATOR;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_one_byte_for_the_nul() {
        let mut buffer = LineBuffer::<4>::new();
        assert_eq!(buffer.push_str("abcdef"), 3);
        assert_eq!(buffer.as_str(), "abc");
        assert_eq!(buffer.as_bytes_with_nul(), b"abc\0");
        assert_eq!(buffer.remaining(), 0);
        assert_eq!(buffer.push_str("g"), 0);
    }

    #[test]
    fn truncates_on_char_boundaries() {
        let mut buffer = LineBuffer::<6>::new();
        write!(buffer, "ab{}", "\u{e9}\u{e9}\u{e9}").unwrap();
        // 'é' is two bytes, only one fits after "ab" in the five available bytes.
        assert_eq!(buffer.as_str(), "ab\u{e9}");
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn formatting_past_capacity_does_not_fail() {
        let mut buffer = LineBuffer::<16>::new();
        for i in 0..100 {
            write!(buffer, "{i},").unwrap();
        }
        // The trailing comma after "7" no longer fits.
        assert_eq!(buffer.as_str(), "0,1,2,3,4,5,6,7");
    }

    #[test]
    fn reserved_room_is_used_by_the_terminator() {
        let mut buffer = LineBuffer::<8>::with_reserve(LINE_TERMINATOR.len());
        buffer.push_str("0123456789");
        assert_eq!(buffer.len(), 7 - LINE_TERMINATOR.len());

        buffer.finish_line();
        assert!(buffer.as_str().ends_with(LINE_TERMINATOR));
        assert_eq!(buffer.len(), 7);
    }

    #[test]
    fn existing_terminator_is_kept() {
        for text in ["done\n", "done\r", "done\r\n"] {
            let mut buffer = LineBuffer::<32>::new();
            buffer.push_str(text);
            buffer.finish_line();
            assert_eq!(buffer.as_str(), text);
        }
    }

    #[test]
    fn empty_line_gets_a_terminator() {
        let mut buffer = LineBuffer::<32>::new();
        buffer.finish_line();
        assert_eq!(buffer.as_str(), LINE_TERMINATOR);
    }

    #[test]
    fn clear_resets_contents() {
        let mut buffer = LineBuffer::<8>::new();
        buffer.push_str("abc");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_bytes_with_nul(), b"\0");
    }
}
