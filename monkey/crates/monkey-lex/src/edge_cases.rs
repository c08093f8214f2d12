//! Edge case tests for monkey-lex
