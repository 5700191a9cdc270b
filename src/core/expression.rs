//! Expression buffers and left-to-right evaluation.
//!
//! An expression is the ordered sequence of tokens the caller has entered
//! so far. Evaluation folds it strictly left-to-right, with no operator
//! precedence, exactly as an accumulating calculator applies each operator
//! the moment the next operand is known.

use super::error::EvalError;
use super::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of tokens awaiting evaluation.
///
/// Expressions are immutable — [`push`](Self::push) returns a new expression
/// with the token appended, following the same functional style as the rest
/// of the core. A well-formed expression alternates
/// `Number, Operator, Number, …, Number`, but malformed sequences are
/// deliberately tolerated by [`evaluate`](Self::evaluate).
///
/// # Example
///
/// ```rust
/// use reckon::core::{Expression, Operator, Token};
///
/// let expression = Expression::new()
///     .push(Token::Number(2.0))
///     .push(Token::Operator(Operator::Add))
///     .push(Token::Number(3.0))
///     .push(Token::Operator(Operator::Multiply))
///     .push(Token::Number(4.0));
///
/// // Left-to-right: (2 + 3) x 4, not 2 + (3 x 4).
/// assert_eq!(expression.evaluate(), Ok(20.0));
/// assert_eq!(expression.to_string(), "2 + 3 x 4");
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    /// Create a new empty expression.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append a token, returning a new expression.
    ///
    /// This is a pure function — the original expression is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::{Expression, Token};
    ///
    /// let empty = Expression::new();
    /// let one = empty.push(Token::Number(1.0));
    ///
    /// assert!(empty.is_empty());
    /// assert_eq!(one.len(), 1);
    /// ```
    pub fn push(&self, token: Token) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Self { tokens }
    }

    /// All tokens in entry order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens entered so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens have been entered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Discard all tokens, returning the empty expression.
    ///
    /// Callers do this after every evaluation (successful or not) and on an
    /// explicit clear action.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Reduce the expression to a single result by a left-to-right fold.
    ///
    /// The first token seeds the running result; the remaining tokens are
    /// consumed as `(Operator, Number)` pairs, each applied to the running
    /// result immediately. There is no operator precedence:
    /// `2 + 3 x 4` evaluates to `20`.
    ///
    /// Structural leniency:
    /// - An empty expression evaluates to `Ok(0.0)`.
    /// - A first token that is not a number evaluates to `Ok(0.0)`.
    /// - A wrong-typed token at either position of a pair stops the fold
    ///   silently; the result accumulated so far is returned as success and
    ///   the malformed tail is ignored.
    ///
    /// The only failure is [`EvalError::DivisionByZero`], which aborts the
    /// fold immediately without consuming further tokens.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::{EvalError, Expression, Operator, Token};
    ///
    /// let expression: Expression = [
    ///     Token::Number(4.0),
    ///     Token::Operator(Operator::Divide),
    ///     Token::Number(0.0),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// assert_eq!(expression.evaluate(), Err(EvalError::DivisionByZero));
    /// ```
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        // Empty buffer or an operator in the leading position falls back to
        // zero instead of erroring. Intentional leniency: an incomplete entry
        // reads as zero. See DESIGN.md before changing this.
        let mut current = match self.tokens.first() {
            Some(Token::Number(first)) => *first,
            _ => return Ok(0.0),
        };

        let mut index = 1;
        while index + 1 < self.tokens.len() {
            match (self.tokens[index], self.tokens[index + 1]) {
                (Token::Operator(op), Token::Number(rhs)) => {
                    current = op.apply(current, rhs)?;
                }
                // Alternation broken: stop folding and keep what we have.
                // Malformed trailing tokens are ignored, not rejected.
                _ => break,
            }
            index += 2;
        }

        Ok(current)
    }
}

impl FromIterator<Token> for Expression {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
