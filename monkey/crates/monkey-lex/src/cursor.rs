//! Character cursor for traversing source code.
//!
//! The cursor owns the scanner's position state: the byte offset of the
//! current character, the byte offset of the next unread character, and the
//! current character itself. [`Cursor::read_char`] is the only method that
//! changes any of the three.

/// A forward-only cursor over a source string.
///
/// `ch` is `None` once the input is exhausted. Outside of construction,
/// `read_position` is always one character past `position`.
pub(crate) struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,

    /// Byte offset of the next unread character.
    read_position: usize,

    /// Character at `position`, or `None` past the end.
    ch: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned on the first character of `source`.
    pub(crate) fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            ch: None,
        };
        cursor.read_char();
        cursor
    }

    /// Advances one character.
    ///
    /// Past the end the current character stays `None` and both offsets keep
    /// moving forward by one.
    #[inline]
    pub(crate) fn read_char(&mut self) {
        self.ch = self.char_at(self.read_position);
        self.position = self.read_position;
        self.read_position += self.ch.map_or(1, char::len_utf8);
    }

    /// Returns the character after the current one without consuming it.
    #[inline]
    pub(crate) fn peek_char(&self) -> Option<char> {
        self.char_at(self.read_position)
    }

    /// Returns the current character, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.ch
    }

    /// Returns true once the input is exhausted.
    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.ch.is_none()
    }

    /// Returns the byte offset of the current character.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current character.
    ///
    /// Offsets past the end of the source are clamped.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        let len = self.source.len();
        let end = self.position.min(len);
        &self.source[start.min(end)..end]
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.source.len() {
            return None;
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return Some(b as char);
        }

        self.source[pos..].chars().next()
    }
}
