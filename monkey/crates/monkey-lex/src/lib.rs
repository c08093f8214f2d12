//! monkey-lex - Lexical Analyzer for the Monkey Programming Language
//!
//! This crate turns Monkey source text into a sequence of classified tokens
//! for the parser.
//!
//! # Example Usage
//!
//! ```
//! use monkey_lex::{Lexer, Token, TokenKind};
//!
//! let source = "let x = 42;";
//!
//! // Iterate through tokens (EOF is not yielded)
//! for token in Lexer::new(source) {
//!     println!("{}", token);
//! }
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Let, "let"));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens, and the keyword table
//! - [`chars`] - Character classification
//! - [`lexer`] - Main lexer implementation
//!
//! # Token Categories
//!
//! - **Keywords**: `fn`, `let`
//! - **Identifiers**: `[a-zA-Z_]+` (digits are not identifier characters)
//! - **Literals**: decimal integers `42`, strings `"hello"` (no escapes)
//! - **Operators**: `=`, `+`, `-`, `!`, `*`, `/`, `<`, `>`, `==`, `!=`
//! - **Delimiters**: `,`, `;`, `:`, `()`, `{}`, `[]`
//! - **Special**: `EOF` at end of input, `ILLEGAL` for anything else
//!
//! The lexer never fails. Unknown characters become `ILLEGAL` tokens and an
//! unterminated string yields whatever text was scanned.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use lexer::Lexer;
pub use token::{lookup_identifier, Token, TokenKind};
