//! Identifier and keyword lexing.

use crate::chars::is_letter;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads the run of letters starting at the current character.
    ///
    /// Leaves the cursor on the first character after the identifier, so
    /// the caller must not advance again. Keyword resolution is left to the
    /// caller.
    pub(crate) fn read_identifier(&mut self) -> &'a str {
        let start = self.cursor.position();
        while is_letter(self.cursor.current()) {
            self.cursor.read_char();
        }
        self.cursor.slice_from(start)
    }
}
