//! Pre-built token lists with known results.

use shunting_yard::{OperatorToken, Token};

pub struct Sample {
    pub name: &'static str,
    pub tokens: Vec<Token>,
    pub expected: i64,
}

fn plus() -> Token {
    OperatorToken::new("+").into()
}

fn minus() -> Token {
    OperatorToken::new("-").into()
}

fn mult() -> Token {
    OperatorToken::new("*").with_precedence(2).into()
}

/// `4 + 2 * (3 - 1)`: multiplication binds before addition.
pub fn precedence() -> Sample {
    Sample {
        name: "4 + 2 * (3 - 1)",
        tokens: vec![
            Token::number("4"),
            plus(),
            Token::number("2"),
            mult(),
            Token::symbol("("),
            Token::number("3"),
            minus(),
            Token::number("1"),
            Token::symbol(")"),
        ],
        expected: 8,
    }
}

/// `4 - !1`: binary minus followed by a prefix not.
pub fn logical_not() -> Sample {
    Sample {
        name: "4 - !1",
        tokens: vec![
            Token::number("4"),
            minus(),
            OperatorToken::with("!", 2, true, true).into(),
            Token::number("1"),
        ],
        expected: 4,
    }
}

/// `-6 + 2 * (-3 - 1)`: signs at the start and after an opening parenthesis.
pub fn signs() -> Sample {
    Sample {
        name: "-6 + 2 * (-3 - 1)",
        tokens: vec![
            minus(),
            Token::number("6"),
            plus(),
            Token::number("2"),
            mult(),
            Token::symbol("("),
            minus(),
            Token::number("3"),
            minus(),
            Token::number("1"),
            Token::symbol(")"),
        ],
        expected: -14,
    }
}

pub fn all() -> Vec<Sample> {
    vec![precedence(), logical_not(), signs()]
}
