//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Lexer struct, token dispatch, and iteration
//! - `whitespace` - Whitespace skipping
//! - `operator` - Two-character operator lookahead
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Integer literal scanning
//! - `string` - String literal scanning

mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod whitespace;

pub use self::core::Lexer;
