//! Integer expression evaluation over pre-tokenized input.
//!
//! Infix tokens are reordered into postfix order with the Shunting Yard
//! algorithm ([`RpnConverter`]), then reduced to a value ([`RpnEvaluator`]).
//! Turning text into tokens is left to the caller.

pub mod error;
pub mod rpn_converter;
pub mod rpn_evaluator;
pub mod token;

pub use error::{Error, EvalError, ReorderError, Result, TokenError};
pub use rpn_converter::{Classification, Postfix, Preceding, RpnConverter};
pub use rpn_evaluator::RpnEvaluator;
pub use token::{NumberToken, OperatorToken, SymbolToken, Token, TokenKind};

/// Reorders `tokens` into postfix order and evaluates the result.
pub fn calculate<I>(tokens: I) -> Result<i64>
where
    I: IntoIterator<Item = Token>,
{
    let mut postfix = RpnConverter::reorder(tokens)?;
    Ok(RpnEvaluator::evaluate(&mut postfix)?)
}
