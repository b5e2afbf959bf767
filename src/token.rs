use std::fmt;

use crate::error::TokenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Operator,
    Symbol,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "Number"),
            TokenKind::Operator => write!(f, "Operator"),
            TokenKind::Symbol => write!(f, "Symbol"),
        }
    }
}

/// An integer literal. The sign is never part of the text; a leading `-` is
/// a separate operator token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    text: String,
}

impl NumberToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parses the literal as a base-10 integer.
    pub fn value(&self) -> Result<i64, TokenError> {
        self.text
            .parse::<i64>()
            .map_err(|_| TokenError::InvalidLiteral {
                text: self.text.clone(),
            })
    }
}

/// An operator together with the attributes the shunting-yard pass needs.
///
/// `+` and `-` are re-classified by the converter according to the token
/// before them, so the arity and associativity given here are only the
/// binary-position defaults for those two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorToken {
    text: String,
    precedence: u32,
    left_associative: bool,
    unary: bool,
}

impl OperatorToken {
    /// A binary, left-associative operator with precedence 1.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with(text, 1, true, false)
    }

    pub fn with(
        text: impl Into<String>,
        precedence: u32,
        left_associative: bool,
        unary: bool,
    ) -> Self {
        Self {
            text: text.into(),
            precedence,
            left_associative,
            unary,
        }
    }

    pub fn with_precedence(mut self, precedence: u32) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn left_associative(mut self, left_associative: bool) -> Self {
        self.left_associative = left_associative;
        self
    }

    pub fn right_associative(self) -> Self {
        self.left_associative(false)
    }

    pub fn unary(mut self, unary: bool) -> Self {
        self.unary = unary;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn precedence(&self) -> u32 {
        self.precedence
    }

    pub fn is_left_associative(&self) -> bool {
        self.left_associative
    }

    pub fn is_unary(&self) -> bool {
        self.unary
    }
}

/// A grouping marker. Only `(` and `)` mean anything to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolToken {
    text: String,
}

impl SymbolToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_open_paren(&self) -> bool {
        self.text == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.text == ")"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(NumberToken),
    Operator(OperatorToken),
    Symbol(SymbolToken),
}

impl Token {
    pub fn number(text: impl Into<String>) -> Self {
        Token::Number(NumberToken::new(text))
    }

    pub fn operator(op: OperatorToken) -> Self {
        Token::Operator(op)
    }

    pub fn symbol(text: impl Into<String>) -> Self {
        Token::Symbol(SymbolToken::new(text))
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::Symbol(_) => TokenKind::Symbol,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Token::Number(n) => n.text(),
            Token::Operator(op) => op.text(),
            Token::Symbol(s) => s.text(),
        }
    }

    pub fn as_number(&self) -> Option<&NumberToken> {
        match self {
            Token::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_operator(&self) -> Option<&OperatorToken> {
        match self {
            Token::Operator(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&SymbolToken> {
        match self {
            Token::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_open_paren(&self) -> bool {
        matches!(self, Token::Symbol(s) if s.is_open_paren())
    }

    pub fn is_close_paren(&self) -> bool {
        matches!(self, Token::Symbol(s) if s.is_close_paren())
    }
}

impl From<NumberToken> for Token {
    fn from(value: NumberToken) -> Self {
        Token::Number(value)
    }
}

impl From<OperatorToken> for Token {
    fn from(value: OperatorToken) -> Self {
        Token::Operator(value)
    }
}

impl From<SymbolToken> for Token {
    fn from(value: SymbolToken) -> Self {
        Token::Symbol(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operator(op) => write!(
                f,
                "(Operator: '{}', {})",
                op.text(),
                if op.is_unary() { "unary" } else { "binary" }
            ),
            _ => write!(f, "({}: '{}')", self.kind(), self.text()),
        }
    }
}
