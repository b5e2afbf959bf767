use crate::token::Token;

/// Errors raised while reading a token's attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("invalid integer literal: '{text}'")]
    InvalidLiteral { text: String },
}

/// Errors raised while converting infix tokens to postfix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    /// A closing parenthesis with no matching opening one.
    #[error("mismatched closing parenthesis at token {position}")]
    MismatchedParenthesis { position: usize },
    /// An opening parenthesis that is never closed.
    #[error("unbalanced opening parenthesis at token {position}")]
    UnbalancedParenthesis { position: usize },
}

/// Errors raised while reducing a postfix stack to a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    InvalidLiteral(#[from] TokenError),

    #[error("cannot evaluate token {0}")]
    UnevaluableToken(Token),

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,

    #[error("malformed postfix expression: missing operand")]
    MalformedPostfix,

    #[error("malformed postfix expression: {remaining} token(s) left after evaluation")]
    TrailingTokens { remaining: usize },
}

/// Any failure of the reorder-then-evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("failed to convert the expression to postfix: {0}")]
    Reorder(#[from] ReorderError),

    #[error("failed to evaluate the postfix expression: {0}")]
    Eval(#[from] EvalError),
}

pub type Result<T> = std::result::Result<T, Error>;
