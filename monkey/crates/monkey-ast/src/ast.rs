//! monkey-ast - AST Node Definitions
//!
//! Expression nodes and the capability trait the parser and evaluator rely
//! on. Statement nodes live with the parser.

use std::fmt;

use monkey_lex::{Token, TokenKind};

use crate::error::{AstError, AstResult};

/// Capabilities shared by every AST node.
pub trait Node {
    /// Returns the literal text of the token the node is anchored on.
    fn token_literal(&self) -> &str;

    /// Renders the node back to a canonical, source-like string.
    ///
    /// Fails if the node is still incomplete.
    fn render(&self) -> AstResult<String>;
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    String(StringLiteral),
    Prefix(PrefixExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(e) => e.token_literal(),
            Expression::Integer(e) => e.token_literal(),
            Expression::String(e) => e.token_literal(),
            Expression::Prefix(e) => e.token_literal(),
        }
    }

    fn render(&self) -> AstResult<String> {
        match self {
            Expression::Identifier(e) => e.render(),
            Expression::Integer(e) => e.render(),
            Expression::String(e) => e.render(),
            Expression::Prefix(e) => e.render(),
        }
    }
}

/// Writes the rendered expression.
///
/// Formatting an incomplete expression reports [`fmt::Error`]; use
/// [`Node::render`] to get the underlying [`AstError`].
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl From<Identifier> for Expression {
    fn from(e: Identifier) -> Self {
        Expression::Identifier(e)
    }
}

impl From<IntegerLiteral> for Expression {
    fn from(e: IntegerLiteral) -> Self {
        Expression::Integer(e)
    }
}

impl From<StringLiteral> for Expression {
    fn from(e: StringLiteral) -> Self {
        Expression::String(e)
    }
}

impl From<PrefixExpression> for Expression {
    fn from(e: PrefixExpression) -> Self {
        Expression::Prefix(e)
    }
}

/// Identifier expression, e.g. `five`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> AstResult<String> {
        Ok(self.value.clone())
    }
}

/// Integer literal expression, e.g. `5`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    /// Builds the literal from an INT token, parsing its text.
    pub fn from_token(token: Token) -> AstResult<Self> {
        let value = token
            .literal
            .parse::<i64>()
            .map_err(|_| AstError::InvalidInteger {
                literal: token.literal.clone(),
            })?;
        Ok(Self { token, value })
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> AstResult<String> {
        Ok(self.token.literal.clone())
    }
}

/// String literal expression; `value` is the text between the quotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl StringLiteral {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Node for StringLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> AstResult<String> {
        Ok(self.value.clone())
    }
}

/// Unary prefix expression, e.g. `-5` or `!ok`.
///
/// Built in two phases: the parser creates the node from the operator
/// token, then parses the operand and attaches it. The node owns the
/// operand once attached. Rendering before the operand is attached fails
/// with [`AstError::MissingOperand`].
///
/// # Example
///
/// ```
/// use monkey_ast::{Expression, IntegerLiteral, Node, PrefixExpression};
/// use monkey_lex::{Token, TokenKind};
///
/// let mut prefix = PrefixExpression::new(Token::new(TokenKind::Minus, "-"), "-");
/// assert!(prefix.render().is_err());
///
/// let five = IntegerLiteral::from_token(Token::new(TokenKind::Int, "5")).unwrap();
/// prefix.set_operand(Expression::from(five));
/// assert_eq!(prefix.render().unwrap(), "(-5)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    operand: Option<Box<Expression>>,
}

impl PrefixExpression {
    /// Creates a prefix node with no operand yet.
    pub fn new(token: Token, operator: impl Into<String>) -> Self {
        Self {
            token,
            operator: operator.into(),
            operand: None,
        }
    }

    /// Creates a prefix node from a `-` or `!` token, using its literal as
    /// the operator.
    pub fn from_token(token: Token) -> AstResult<Self> {
        match token.kind {
            TokenKind::Minus | TokenKind::Bang => {
                let operator = token.literal.clone();
                Ok(Self::new(token, operator))
            },
            kind => Err(AstError::NotPrefixOperator { kind }),
        }
    }

    /// Attaches the operand, consuming and returning the node.
    pub fn with_operand(mut self, operand: Expression) -> Self {
        self.set_operand(operand);
        self
    }

    /// Attaches the operand, replacing any previous one.
    pub fn set_operand(&mut self, operand: Expression) {
        self.operand = Some(Box::new(operand));
    }

    /// Returns the operand, if attached.
    pub fn operand(&self) -> Option<&Expression> {
        self.operand.as_deref()
    }
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> AstResult<String> {
        let operand = self.operand().ok_or_else(|| AstError::MissingOperand {
            operator: self.operator.clone(),
        })?;
        Ok(format!("({}{})", self.operator, operand.render()?))
    }
}
