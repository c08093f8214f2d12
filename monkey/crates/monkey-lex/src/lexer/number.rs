//! Number literal lexing.
//!
//! Only decimal integers exist; there are no fractional or exponent forms.

use crate::chars::is_digit;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads the run of decimal digits starting at the current character.
    ///
    /// Leaves the cursor on the first non-digit, so the caller must not
    /// advance again.
    pub(crate) fn read_number(&mut self) -> &'a str {
        let start = self.cursor.position();
        while is_digit(self.cursor.current()) {
            self.cursor.read_char();
        }
        self.cursor.slice_from(start)
    }
}
