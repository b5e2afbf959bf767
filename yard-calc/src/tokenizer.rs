use std::iter;

use shunting_yard::Token;
use tracing::trace;

use crate::operator_table::OperatorTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenizerError {
    #[error("unexpected character '{ch}' at offset {position}")]
    UnexpectedCharacter { ch: char, position: usize },
}

/// Splits expression text into tokens.
///
/// Digit runs become numbers, operator characters are looked up in the
/// [`OperatorTable`], and `(`/`)` become symbols. Literals are kept as text;
/// their values are only parsed when the expression is evaluated.
#[derive(Debug, Default)]
pub struct Tokenizer {
    table: OperatorTable,
}

impl Tokenizer {
    pub fn new(table: OperatorTable) -> Self {
        Self { table }
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, TokenizerError> {
        let mut tokens = Vec::new();
        let mut chars = input.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            let token = match c {
                '0'..='9' => {
                    let num: String = iter::once(c)
                        .chain(iter::from_fn(|| {
                            chars
                                .next_if(|(_, c)| c.is_ascii_digit())
                                .map(|(_, c)| c)
                        }))
                        .collect();
                    Token::number(num)
                }
                '(' | ')' => Token::symbol(c.to_string()),
                c if c.is_whitespace() => continue,
                c => match self.table.token(c) {
                    Some(op) => Token::operator(op),
                    None => return Err(TokenizerError::UnexpectedCharacter { ch: c, position }),
                },
            };

            trace!(%token, position, "token");
            tokens.push(token);
        }

        Ok(tokens)
    }
}
