pub mod cli;
pub mod display;
pub mod operator_table;
pub mod samples;
pub mod tokenizer;

use shunting_yard::{Postfix, RpnConverter, RpnEvaluator, Token};
use tracing::debug;

use crate::tokenizer::{Tokenizer, TokenizerError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("failed to tokenize the input: {0}")]
    Tokenize(#[from] TokenizerError),

    #[error(transparent)]
    Calculate(#[from] shunting_yard::Error),
}

/// Every stage of one evaluation, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub tokens: Vec<Token>,
    pub postfix: Postfix,
    pub value: i64,
}

/// Runs already-built tokens through the converter and the evaluator.
pub fn evaluate_tokens(tokens: Vec<Token>) -> Result<Evaluation, CalcError> {
    let postfix = RpnConverter::reorder(tokens.clone()).map_err(shunting_yard::Error::from)?;
    let value =
        RpnEvaluator::evaluate(&mut postfix.clone()).map_err(shunting_yard::Error::from)?;

    Ok(Evaluation {
        tokens,
        postfix,
        value,
    })
}

/// Tokenizes `input` and evaluates it.
pub fn evaluate(tokenizer: &Tokenizer, input: &str) -> Result<Evaluation, CalcError> {
    let tokens = tokenizer.tokenize(input)?;
    debug!(count = tokens.len(), "tokenized input");
    evaluate_tokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shunting_yard::{EvalError, ReorderError};

    #[test]
    fn test_evaluate() {
        let tokenizer = Tokenizer::default();

        let evaluation = evaluate(&tokenizer, "4 + 2 * (3 - 1)").unwrap();
        assert_eq!(evaluation.value, 8);
        assert_eq!(evaluation.tokens.len(), 9);
        assert_eq!(evaluation.postfix.to_string(), "4 2 3 1 - * +");

        assert_eq!(evaluate(&tokenizer, "-6 + 2 * (-3 - 1)").unwrap().value, -14);
        assert_eq!(evaluate(&tokenizer, "4 - !1").unwrap().value, 4);
        assert_eq!(evaluate(&tokenizer, "!!7").unwrap().value, 1);
        assert_eq!(evaluate(&tokenizer, "-(2 + 3) * 4").unwrap().value, -20);
    }

    #[test]
    fn test_evaluate_errors() {
        let tokenizer = Tokenizer::default();

        assert_eq!(
            evaluate(&tokenizer, "1 $ 2").unwrap_err(),
            CalcError::Tokenize(TokenizerError::UnexpectedCharacter {
                ch: '$',
                position: 2
            })
        );
        assert_eq!(
            evaluate(&tokenizer, "(1 + 2))").unwrap_err(),
            CalcError::Calculate(shunting_yard::Error::Reorder(
                ReorderError::MismatchedParenthesis { position: 5 }
            ))
        );
        assert_eq!(
            evaluate(&tokenizer, "8 / (4 - 4)").unwrap_err(),
            CalcError::Calculate(shunting_yard::Error::Eval(EvalError::DivisionByZero))
        );
    }
}
