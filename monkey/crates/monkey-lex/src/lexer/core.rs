//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the token dispatch, and the
//! iteration wrapper.

use std::iter::FusedIterator;

use crate::chars::{is_digit, is_letter};
use crate::cursor::Cursor;
use crate::token::{lookup_identifier, Token, TokenKind};

/// Lexer for the Monkey language.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the
/// input is exhausted every further call returns an EOF token.
///
/// The lexer is also a single-pass [`Iterator`] over the same tokens. The
/// iterator stops when the cursor reaches the end of the input and never
/// yields the EOF token itself; call `next_token` afterwards to get it.
///
/// # Example
///
/// ```
/// use monkey_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
/// let kinds: Vec<TokenKind> = (&mut lexer).map(|token| token.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Let,
///         TokenKind::Ident,
///         TokenKind::Assign,
///         TokenKind::Int,
///         TokenKind::Semicolon,
///     ]
/// );
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the current character. Fixed
    /// tokens, strings, EOF and ILLEGAL share a single trailing advance past
    /// the last character they matched. Identifiers and integers are
    /// variable width and advance themselves, so they return early.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.cursor.current() {
            Some('=') => self.lex_equals(),
            Some('!') => self.lex_bang(),
            Some('"') => Token::new(TokenKind::String, self.read_string()),
            Some(c) => match TokenKind::from_char(c) {
                Some(kind) => Token::new(kind, c.to_string()),
                None if is_letter(Some(c)) => {
                    let literal = self.read_identifier();
                    return emit(Token::new(lookup_identifier(literal), literal));
                },
                None if is_digit(Some(c)) => {
                    return emit(Token::new(TokenKind::Int, self.read_number()));
                },
                None => {
                    log::debug!("illegal character {:?}", c);
                    Token::new(TokenKind::Illegal, c.to_string())
                },
            },
            None => Token::eof(),
        };

        self.cursor.read_char();
        emit(token)
    }

    /// Drains the lexer into a vector that ends with the EOF token.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::new("x").tokenize();
    /// assert_eq!(tokens.len(), 2);
    /// assert_eq!(tokens[1].kind, TokenKind::Eof);
    /// ```
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = self.by_ref().collect();
        tokens.push(self.next_token());
        tokens
    }
}

fn emit(token: Token) -> Token {
    log::trace!("scanned {}", token);
    token
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.cursor.is_at_end() {
            return None;
        }
        Some(self.next_token())
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|token| token.kind).collect()
    }

    #[test]
    fn test_next_token_let_statement() {
        let mut lexer = Lexer::new("let five = 5;");
        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];
        for (kind, literal) in expected {
            let token = lexer.next_token();
            assert_eq!(token.kind, kind);
            assert_eq!(token.literal, literal);
        }
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let mut lexer = Lexer::new("let five = 5;");
        let tokens: Vec<Token> = (&mut lexer).collect();
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|token| !token.is_eof()));
        assert_eq!(tokens[4], Token::new(TokenKind::Semicolon, ";"));
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_iterator_with_trailing_whitespace() {
        let tokens: Vec<Token> = Lexer::new("x   \n\t ").collect();
        assert_eq!(tokens, [Token::new(TokenKind::Ident, "x")]);
    }

    #[test]
    fn test_iterator_single_token_input() {
        assert_eq!(kinds("x"), [TokenKind::Ident]);
        assert_eq!(kinds(";"), [TokenKind::Semicolon]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut lexer = Lexer::new("a");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("");
        for _ in 0..10 {
            assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn test_eof_after_tokens_is_idempotent() {
        let mut lexer = Lexer::new("+");
        assert_eq!(lexer.next_token().kind, TokenKind::Plus);
        for _ in 0..5 {
            assert!(lexer.next_token().is_eof());
        }
    }

    #[test]
    fn test_single_char_tokens() {
        let mut lexer = Lexer::new("=+-!*/<>,;:(){}[]");
        let expected = [
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
        ];
        for kind in expected {
            let token = lexer.next_token();
            assert_eq!(token.kind, kind);
            assert_eq!(token.literal, kind.as_str());
        }
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_illegal_character() {
        let mut lexer = Lexer::new("a # b");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "a"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Illegal, "#"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "b"));
    }

    #[test]
    fn test_illegal_multibyte_character() {
        let mut lexer = Lexer::new("é1");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Illegal, "é"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Int, "1"));
    }

    #[test]
    fn test_identifier_then_operator_not_skipped() {
        let mut lexer = Lexer::new("x+y");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Plus, "+"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "y"));
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_number_then_delimiter_not_skipped() {
        assert_eq!(
            kinds("(5)"),
            [TokenKind::LParen, TokenKind::Int, TokenKind::RParen]
        );
    }

    #[test]
    fn test_function_literal() {
        let source = "let add = fn(x, y) {\n  x + y;\n};";
        assert_eq!(
            kinds(source),
            [
                TokenKind::Let,
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Function,
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::Ident,
                TokenKind::Plus,
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_tokenize_appends_eof() {
        let tokens = Lexer::new("let x = 1;").tokenize();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens.last(), Some(&Token::eof()));
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(Lexer::new("").tokenize(), [Token::eof()]);
    }
}
