use std::collections::BTreeMap;

use shunting_yard::OperatorToken;

/// Attributes the tokenizer gives an operator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub precedence: u32,
    pub left_associative: bool,
    pub unary: bool,
}

impl OperatorSpec {
    pub const fn binary(precedence: u32) -> Self {
        Self {
            precedence,
            left_associative: true,
            unary: false,
        }
    }

    pub const fn prefix(precedence: u32) -> Self {
        Self {
            precedence,
            left_associative: false,
            unary: true,
        }
    }
}

/// Maps operator characters to their precedence, associativity and arity.
///
/// `+` and `-` are listed as binary; whether a given occurrence is a sign is
/// decided later by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    entries: BTreeMap<char, OperatorSpec>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        let entries = [
            ('+', OperatorSpec::binary(1)),
            ('-', OperatorSpec::binary(1)),
            ('*', OperatorSpec::binary(2)),
            ('/', OperatorSpec::binary(2)),
            ('!', OperatorSpec::prefix(3)),
        ];

        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl OperatorTable {
    pub fn get(&self, c: char) -> Option<OperatorSpec> {
        self.entries.get(&c).copied()
    }

    /// Overrides the attributes of an operator character. Returns the
    /// previous entry, if any.
    pub fn set(&mut self, c: char, spec: OperatorSpec) -> Option<OperatorSpec> {
        self.entries.insert(c, spec)
    }

    /// Builds the token for `c`, or `None` if `c` is not an operator.
    pub fn token(&self, c: char) -> Option<OperatorToken> {
        self.get(c).map(|spec| {
            OperatorToken::with(
                c.to_string(),
                spec.precedence,
                spec.left_associative,
                spec.unary,
            )
        })
    }

    pub fn operators(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }
}
