//! Expression tokens.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One lexical unit of an expression: a number or an operator.
///
/// Tokens are immutable values created as the caller enters digits and
/// operator presses. The caller is responsible for entry-level constraints
/// (such as rejecting a second decimal separator) before constructing a
/// `Number`.
///
/// # Example
///
/// ```rust
/// use reckon::core::{Operator, Token};
///
/// let number = Token::Number(2.5);
/// let operator = Token::Operator(Operator::Add);
///
/// assert_eq!(number.as_number(), Some(2.5));
/// assert_eq!(operator.as_operator(), Some(Operator::Add));
/// assert_eq!(number.as_operator(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Token {
    /// A numeric operand
    Number(f64),
    /// A binary operator
    Operator(Operator),
}

impl Token {
    /// The numeric value, if this token is a `Number`.
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Operator(_) => None,
        }
    }

    /// The operator, if this token is an `Operator`.
    pub fn as_operator(self) -> Option<Operator> {
        match self {
            Self::Number(_) => None,
            Self::Operator(op) => Some(op),
        }
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let number = Token::Number(7.0);
        assert_eq!(number.as_number(), Some(7.0));
        assert_eq!(number.as_operator(), None);

        let operator = Token::Operator(Operator::Divide);
        assert_eq!(operator.as_number(), None);
        assert_eq!(operator.as_operator(), Some(Operator::Divide));
    }

    #[test]
    fn conversions_build_expected_variants() {
        assert_eq!(Token::from(1.5), Token::Number(1.5));
        assert_eq!(
            Token::from(Operator::Subtract),
            Token::Operator(Operator::Subtract)
        );
    }

    #[test]
    fn display_uses_keypad_symbols() {
        assert_eq!(Token::Number(2.5).to_string(), "2.5");
        assert_eq!(Token::Operator(Operator::Multiply).to_string(), "x");
    }

    #[test]
    fn token_serializes_correctly() {
        let token = Token::Number(42.0);
        let json = serde_json::to_string(&token).unwrap();
        let deserialized: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, token);
    }
}
