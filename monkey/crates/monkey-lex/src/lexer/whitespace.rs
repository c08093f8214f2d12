//! Whitespace skipping.

use crate::chars::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips all consecutive whitespace characters.
    ///
    /// Called before every token, so whitespace never produces tokens.
    pub(crate) fn skip_whitespace(&mut self) {
        while is_whitespace(self.cursor.current()) {
            self.cursor.read_char();
        }
    }
}
