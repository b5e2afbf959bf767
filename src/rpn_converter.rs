use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::ReorderError;
use crate::token::{OperatorToken, Token};

/// Tokens in postfix order. The top of the stack (the last element) is the
/// operator applied last.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Postfix(pub Vec<Token>);

impl Postfix {
    /// Walks the stack from the top down, which is the order the evaluator
    /// consumes it in.
    pub fn iter_top_first(&self) -> impl Iterator<Item = &Token> {
        self.0.iter().rev()
    }
}

impl std::ops::Deref for Postfix {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Postfix {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Lexemes in evaluation order, space separated. Unary operators carry a `u`
/// prefix so a sign reads apart from subtraction: `6 u- 2 -` is `-6 - 2`.
impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match token {
                Token::Operator(op) if op.is_unary() => write!(f, "u{}", op.text())?,
                _ => write!(f, "{}", token.text())?,
            }
        }
        Ok(())
    }
}

/// What came right before an operator in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preceding {
    /// Start of the input.
    Nothing,
    /// A number or a closing parenthesis.
    Operand,
    Operator,
    /// Any symbol other than a closing parenthesis.
    Symbol,
}

impl Preceding {
    pub fn of(token: Option<&Token>) -> Self {
        match token {
            None => Preceding::Nothing,
            Some(Token::Number(_)) => Preceding::Operand,
            // A closing parenthesis ends a complete operand, so `(1) - 2`
            // subtracts.
            Some(Token::Symbol(s)) if s.is_close_paren() => Preceding::Operand,
            Some(Token::Symbol(_)) => Preceding::Symbol,
            Some(Token::Operator(_)) => Preceding::Operator,
        }
    }
}

/// Arity and associativity resolved for one occurrence of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub unary: bool,
    pub left_associative: bool,
}

pub struct RpnConverter;

impl RpnConverter {
    /// Decides whether an operator is used in prefix-unary position.
    ///
    /// `+` and `-` become unary (and right-associative, so chains like `- - 1`
    /// nest) unless they follow an operand. Every other operator keeps the
    /// attributes it was constructed with.
    pub fn classify(op: &OperatorToken, preceding: Preceding) -> Classification {
        let sign = matches!(op.text(), "+" | "-");

        if sign && preceding != Preceding::Operand {
            Classification {
                unary: true,
                left_associative: false,
            }
        } else {
            Classification {
                unary: op.is_unary(),
                left_associative: op.is_left_associative(),
            }
        }
    }

    /// Whether the incoming operator `current` forces `top` off the operator
    /// stack before it is pushed.
    fn pops(top: &Token, current: &OperatorToken) -> bool {
        match top {
            Token::Operator(top) => {
                top.precedence() > current.precedence()
                    || (top.precedence() == current.precedence() && current.is_left_associative())
            }
            _ => false,
        }
    }

    /// Converts infix tokens to postfix order using the Shunting Yard
    /// algorithm.
    ///
    /// The input is consumed; operators come out re-classified by
    /// [`RpnConverter::classify`], everything else is moved through as is.
    pub fn reorder<I>(tokens: I) -> Result<Postfix, ReorderError>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut output = Vec::new();
        // Operators and opening parentheses, with their input positions.
        let mut stack: Vec<(usize, Token)> = Vec::new();
        let mut preceding = Preceding::Nothing;

        for (position, token) in tokens.into_iter().enumerate() {
            let next = Preceding::of(Some(&token));

            match token {
                Token::Number(_) => {
                    trace!(%token, "number to output");
                    output.push(token);
                }
                Token::Symbol(_) if token.is_open_paren() => stack.push((position, token)),
                Token::Symbol(_) if token.is_close_paren() => loop {
                    match stack.pop() {
                        Some((_, top)) if top.is_open_paren() => break,
                        Some((_, top)) => {
                            trace!(%top, "operator to output");
                            output.push(top);
                        }
                        None => {
                            warn!(position, "mismatched parenthesis");
                            return Err(ReorderError::MismatchedParenthesis { position });
                        }
                    }
                },
                Token::Symbol(_) => debug!(%token, position, "ignoring unknown symbol"),
                Token::Operator(op) => {
                    let class = Self::classify(&op, preceding);
                    let op = op
                        .unary(class.unary)
                        .left_associative(class.left_associative);
                    debug!(op = op.text(), ?class, position, "classified operator");

                    // A prefix operator has not seen its operand yet, so
                    // nothing on the stack can be complete.
                    if !op.is_unary() {
                        while let Some((_, top)) = stack.last() {
                            if !Self::pops(top, &op) {
                                break;
                            }
                            if let Some((_, top)) = stack.pop() {
                                trace!(%top, "operator to output");
                                output.push(top);
                            }
                        }
                    }

                    stack.push((position, Token::Operator(op)));
                }
            }

            preceding = next;
        }

        while let Some((position, top)) = stack.pop() {
            if top.is_open_paren() {
                warn!(position, "unbalanced parenthesis");
                return Err(ReorderError::UnbalancedParenthesis { position });
            }
            output.push(top);
        }

        let postfix = Postfix(output);
        debug!(%postfix, "converted to postfix");
        Ok(postfix)
    }
}
