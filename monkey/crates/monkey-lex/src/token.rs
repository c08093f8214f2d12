//! Token definitions for the Monkey lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal source text it was
//! scanned from. Tokens carry no position information.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// The closed set of token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character the lexer does not recognize.
    Illegal,
    /// End of input.
    Eof,

    // Identifiers + literals
    /// Identifier such as `foobar` or `snake_case`.
    Ident,
    /// Decimal integer literal.
    Int,
    /// Double-quoted string literal, quotes stripped.
    String,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // Keywords
    /// `fn`
    Function,
    /// `let`
    Let,
}

impl TokenKind {
    /// Maps a character to its single-character token kind.
    ///
    /// Returns `None` for characters that do not form a fixed one-character
    /// token on their own (letters, digits, quotes, unknown characters).
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_char('+'), Some(TokenKind::Plus));
    /// assert_eq!(TokenKind::from_char('a'), None);
    /// ```
    pub fn from_char(c: char) -> Option<TokenKind> {
        let kind = match c {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '!' => TokenKind::Bang,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the canonical name of this kind.
    ///
    /// Operators and delimiters are named by their source text, everything
    /// else by an upper-case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
        }
    }

    /// Returns true for reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Function | TokenKind::Let)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Category of the token.
    pub kind: TokenKind,
    /// Source text the token was scanned from. Empty for [`TokenKind::Eof`].
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Int, "5");
    /// assert_eq!(token.kind, TokenKind::Int);
    /// assert_eq!(token.literal, "5");
    /// ```
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Creates the end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.literal)
    }
}

lazy_static! {
    static ref KEYWORDS: FxHashMap<&'static str, TokenKind> = {
        let mut map = FxHashMap::default();
        map.insert("fn", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map
    };
}

/// Resolves an identifier to its keyword kind, or [`TokenKind::Ident`].
///
/// The lookup is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use monkey_lex::{lookup_identifier, TokenKind};
///
/// assert_eq!(lookup_identifier("fn"), TokenKind::Function);
/// assert_eq!(lookup_identifier("Let"), TokenKind::Ident);
/// ```
pub fn lookup_identifier(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}
