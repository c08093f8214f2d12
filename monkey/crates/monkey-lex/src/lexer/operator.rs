//! Operator lexing.
//!
//! Handles the operators that need one character of lookahead. Both methods
//! leave the cursor on the last character they matched; the caller performs
//! the trailing advance.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes assign or equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        if self.cursor.peek_char() == Some('=') {
            self.cursor.read_char();
            Token::new(TokenKind::Eq, "==")
        } else {
            Token::new(TokenKind::Assign, "=")
        }
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        if self.cursor.peek_char() == Some('=') {
            self.cursor.read_char();
            Token::new(TokenKind::NotEq, "!=")
        } else {
            Token::new(TokenKind::Bang, "!")
        }
    }
}
