//! The four binary operators and their arithmetic.
//!
//! Operators are pure values. Applying one is a pure function over its two
//! operands with native IEEE-754 double semantics, no rounding of its own.

use super::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four supported binary arithmetic operators.
///
/// # Example
///
/// ```rust
/// use reckon::core::Operator;
///
/// assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
/// assert_eq!(Operator::Multiply.apply(5.0, 4.0), Ok(20.0));
/// assert_eq!(Operator::Divide.symbol(), "/");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator to `(a, b)`, with `a` the left (accumulated)
    /// operand and `b` the right operand.
    ///
    /// Division fails with [`EvalError::DivisionByZero`] when `b` compares
    /// equal to zero. The comparison is exact, so `-0.0` also fails. There
    /// are no other error conditions and no side effects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::{EvalError, Operator};
    ///
    /// assert_eq!(Operator::Subtract.apply(10.0, 4.0), Ok(6.0));
    /// assert_eq!(
    ///     Operator::Divide.apply(1.0, 0.0),
    ///     Err(EvalError::DivisionByZero)
    /// );
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }

    /// The display symbol for this operator, matching the calculator keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "/",
        }
    }

    /// Parse an operator from its keypad symbol.
    ///
    /// Returns `None` for anything that is not one of `+ - x /`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "x" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
