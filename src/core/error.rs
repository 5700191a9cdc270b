//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur while evaluating an expression.
///
/// Division by zero is the only arithmetic failure. Structurally malformed
/// expressions do not produce errors; see
/// [`Expression::evaluate`](crate::core::Expression::evaluate) for the
/// tolerant-truncation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right-hand operand of a division was exactly zero
    #[error("division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_displays_message() {
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
    }
}
