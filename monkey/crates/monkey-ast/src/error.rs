//! Error types for monkey-ast
//!
//! The AST layer reports precondition violations as values; nothing here
//! panics.

use monkey_lex::TokenKind;
use thiserror::Error;

/// Error type for AST construction and rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A prefix expression was rendered before its operand was attached
    #[error("prefix expression `{operator}` has no operand")]
    MissingOperand { operator: String },

    /// A token that cannot start a prefix expression
    #[error("token {kind} is not a prefix operator")]
    NotPrefixOperator { kind: TokenKind },

    /// An integer literal that does not fit in 64 bits
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String },
}

/// Result type alias for AST operations
pub type AstResult<T> = std::result::Result<T, AstError>;
