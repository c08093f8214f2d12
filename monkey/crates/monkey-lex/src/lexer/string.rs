//! String literal lexing.
//!
//! Strings are delimited by double quotes. Escape sequences are not
//! processed and an unterminated string is not an error.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads a string literal starting at its opening quote.
    ///
    /// Returns the text strictly between the quotes and leaves the cursor on
    /// the closing quote, for the caller's trailing advance. If the input ends
    /// first, returns everything after the opening quote.
    pub(crate) fn read_string(&mut self) -> &'a str {
        let start = self.cursor.position() + 1;
        self.cursor.read_char();
        loop {
            match self.cursor.current() {
                Some('"') => break,
                None => {
                    log::debug!("unterminated string literal");
                    break;
                },
                Some(_) => self.cursor.read_char(),
            }
        }
        self.cursor.slice_from(start)
    }
}
