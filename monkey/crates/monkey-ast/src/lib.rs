//! monkey-ast - Expression Nodes for the Monkey Programming Language
//!
//! This crate defines the contract every expression node satisfies and the
//! expression variants the parser builds from `monkey-lex` tokens.
//!
//! # Example Usage
//!
//! ```
//! use monkey_ast::{Expression, Identifier, Node, PrefixExpression};
//! use monkey_lex::Lexer;
//!
//! let mut lexer = Lexer::new("!ready");
//! let mut prefix = PrefixExpression::from_token(lexer.next_token()).unwrap();
//! prefix.set_operand(Expression::from(Identifier::new(lexer.next_token())));
//!
//! assert_eq!(prefix.render().unwrap(), "(!ready)");
//! ```
//!
//! # Module Structure
//!
//! - [`ast`] - The [`Node`] trait and expression nodes
//! - [`error`] - Error types

pub mod ast;
pub mod error;

pub use ast::{Expression, Identifier, IntegerLiteral, Node, PrefixExpression, StringLiteral};
pub use error::{AstError, AstResult};
