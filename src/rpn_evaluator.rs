use tracing::{debug, trace};

use crate::error::EvalError;
use crate::rpn_converter::Postfix;
use crate::token::{OperatorToken, Token};

pub struct RpnEvaluator;

impl RpnEvaluator {
    /// Reduces a postfix stack to a single value, draining it.
    ///
    /// The stack must hold exactly one expression: a missing operand is
    /// [`EvalError::MalformedPostfix`] and leftover tokens are
    /// [`EvalError::TrailingTokens`].
    pub fn evaluate(postfix: &mut Postfix) -> Result<i64, EvalError> {
        // Each entry is a value and the number of tokens it was reduced from.
        let mut eval_stack: Vec<(i64, usize)> = Vec::new();

        for token in postfix.drain(..) {
            trace!(%token, "reducing");

            let entry = match token {
                Token::Number(n) => (n.value()?, 1),
                Token::Operator(op) if op.is_unary() => {
                    let (operand, span) = eval_stack.pop().ok_or(EvalError::MalformedPostfix)?;
                    (Self::apply_unary(op, operand)?, span + 1)
                }
                Token::Operator(op) => {
                    // Operands come off the stack in reverse source order.
                    let (rhs, rhs_span) = eval_stack.pop().ok_or(EvalError::MalformedPostfix)?;
                    let (lhs, lhs_span) = eval_stack.pop().ok_or(EvalError::MalformedPostfix)?;
                    (Self::apply_binary(op, lhs, rhs)?, lhs_span + rhs_span + 1)
                }
                Token::Symbol(_) => return Err(EvalError::UnevaluableToken(token)),
            };

            eval_stack.push(entry);
        }

        let (value, _) = eval_stack.pop().ok_or(EvalError::MalformedPostfix)?;

        if !eval_stack.is_empty() {
            return Err(EvalError::TrailingTokens {
                remaining: eval_stack.iter().map(|(_, span)| span).sum(),
            });
        }

        debug!(value, "evaluated postfix expression");
        Ok(value)
    }

    fn apply_unary(op: OperatorToken, operand: i64) -> Result<i64, EvalError> {
        match op.text() {
            "!" => Ok(i64::from(operand == 0)),
            "+" => Ok(operand),
            "-" => operand.checked_neg().ok_or(EvalError::Overflow),
            _ => Err(EvalError::UnevaluableToken(op.into())),
        }
    }

    fn apply_binary(op: OperatorToken, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let result = match op.text() {
            "+" => lhs.checked_add(rhs),
            "-" => lhs.checked_sub(rhs),
            "*" => lhs.checked_mul(rhs),
            "/" if rhs == 0 => return Err(EvalError::DivisionByZero),
            "/" => lhs.checked_div(rhs),
            _ => return Err(EvalError::UnevaluableToken(op.into())),
        };

        result.ok_or(EvalError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use pretty_assertions::assert_eq;

    fn num(text: &str) -> Token {
        Token::number(text)
    }

    fn binary(text: &str) -> Token {
        OperatorToken::new(text).into()
    }

    fn unary(text: &str) -> Token {
        OperatorToken::new(text).right_associative().unary(true).into()
    }

    fn eval(tokens: Vec<Token>) -> Result<i64, EvalError> {
        RpnEvaluator::evaluate(&mut Postfix(tokens))
    }

    #[test]
    fn test_rpn_evaluator() {
        assert_eq!(eval(vec![num("1"), num("2"), binary("+")]), Ok(3));
        assert_eq!(eval(vec![num("1"), num("2"), binary("-")]), Ok(-1));
        assert_eq!(eval(vec![num("2"), num("3"), binary("*")]), Ok(6));
        assert_eq!(eval(vec![num("6"), num("3"), binary("/")]), Ok(2));
        assert_eq!(eval(vec![num("7"), num("2"), unary("-"), binary("/")]), Ok(-3));
        assert_eq!(
            eval(vec![num("1"), num("2"), unary("-"), binary("-")]),
            Ok(3)
        );
        assert_eq!(eval(vec![num("5"), unary("+")]), Ok(5));
        assert_eq!(eval(vec![num("5"), unary("-"), unary("-")]), Ok(5));
    }

    #[test]
    fn test_rpn_evaluator_not() {
        assert_eq!(eval(vec![num("0"), unary("!")]), Ok(1));
        assert_eq!(eval(vec![num("42"), unary("!")]), Ok(0));
        assert_eq!(
            eval(vec![num("4"), num("1"), unary("!"), binary("-")]),
            Ok(4)
        );
    }

    #[test]
    fn test_rpn_evaluator_consumes_stack() {
        let mut postfix = Postfix(vec![num("2"), num("3"), binary("*")]);
        assert_eq!(RpnEvaluator::evaluate(&mut postfix), Ok(6));
        assert!(postfix.is_empty());
    }

    #[test]
    fn test_rpn_evaluator_division_by_zero() {
        assert_eq!(
            eval(vec![num("1"), num("0"), binary("/")]),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_rpn_evaluator_overflow() {
        let max = i64::MAX.to_string();

        assert_eq!(
            eval(vec![num(&max), num("1"), binary("+")]),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            eval(vec![num(&max), unary("-"), num("2"), binary("-")]),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            eval(vec![num(&max), num("2"), binary("*")]),
            Err(EvalError::Overflow)
        );
        // i64::MIN has no positive literal, so build it from MAX.
        assert_eq!(
            eval(vec![
                num(&max),
                unary("-"),
                num("1"),
                binary("-"),
                num("1"),
                unary("-"),
                binary("/"),
            ]),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_rpn_evaluator_missing_operand() {
        assert_eq!(eval(vec![]), Err(EvalError::MalformedPostfix));
        assert_eq!(
            eval(vec![num("1"), binary("+")]),
            Err(EvalError::MalformedPostfix)
        );
        assert_eq!(eval(vec![unary("-")]), Err(EvalError::MalformedPostfix));
    }

    #[test]
    fn test_rpn_evaluator_trailing_tokens() {
        assert_eq!(
            eval(vec![num("1"), num("2"), num("3"), binary("+")]),
            Err(EvalError::TrailingTokens { remaining: 1 })
        );
    }

    #[test]
    fn test_rpn_evaluator_unevaluable() {
        assert_eq!(
            eval(vec![num("1"), Token::symbol("(")]),
            Err(EvalError::UnevaluableToken(Token::symbol("(")))
        );
        assert_eq!(
            eval(vec![num("2"), num("3"), binary("^")]),
            Err(EvalError::UnevaluableToken(binary("^")))
        );
        assert_eq!(
            eval(vec![num("2"), unary("*")]),
            Err(EvalError::UnevaluableToken(unary("*")))
        );
    }

    #[test]
    fn test_rpn_evaluator_trailing_expressions() {
        // Two complete expressions below the last one.
        assert_eq!(
            eval(vec![
                num("1"),
                num("2"),
                binary("+"),
                num("3"),
                unary("-"),
                num("4"),
            ]),
            Err(EvalError::TrailingTokens { remaining: 5 })
        );
    }

    #[test]
    fn test_rpn_evaluator_long_chain() {
        let mut tokens = vec![num("1")];
        for _ in 1..200_000 {
            tokens.push(num("1"));
            tokens.push(binary("+"));
        }

        assert_eq!(eval(tokens), Ok(200_000));
    }

    #[test]
    fn test_rpn_evaluator_deep_unary_chain() {
        let mut tokens = vec![num("1")];
        tokens.extend((0..200_001).map(|_| unary("-")));

        assert_eq!(eval(tokens), Ok(-1));
    }

    #[test]
    fn test_rpn_evaluator_invalid_literal() {
        assert_eq!(
            eval(vec![num("abc")]),
            Err(EvalError::InvalidLiteral(TokenError::InvalidLiteral {
                text: "abc".to_string()
            }))
        );
    }
}
