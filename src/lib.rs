//! Reckon: a left-to-right calculator expression core.
//!
//! Reckon models the accumulating calculator: digits and operator presses
//! become [`Token`]s appended to an immutable [`Expression`], and `=` folds
//! the expression strictly left-to-right into one result. The core is pure
//! functions with no side effects; persistence of completed calculations is
//! isolated in the [`history`] module, and long-running numeric work is
//! isolated in [`worker`].
//!
//! # Core Concepts
//!
//! - **Token**: one lexical unit, a number or an operator
//! - **Expression**: ordered token sequence, evaluated as a left-to-right fold
//! - **Calculation**: immutable record of a completed evaluation, persisted
//!   in append order by the [`history::HistoryStore`]
//!
//! There is no operator precedence: each operator applies to the running
//! result the moment the next operand is known, so `2 + 3 x 4` is `20`.
//!
//! # Example
//!
//! ```rust
//! use reckon::core::{Expression, Operator, Token};
//! use reckon::history::Calculation;
//!
//! let expression = Expression::new()
//!     .push(Token::Number(2.0))
//!     .push(Token::Operator(Operator::Add))
//!     .push(Token::Number(3.0))
//!     .push(Token::Operator(Operator::Multiply))
//!     .push(Token::Number(4.0));
//!
//! let result = expression.evaluate().unwrap();
//! assert_eq!(result, 20.0);
//!
//! let record = Calculation::new(expression, result);
//! assert_eq!(record.result, 20.0);
//! ```

pub mod core;
pub mod history;
pub mod worker;

// Re-export commonly used types
pub use crate::core::{EvalError, Expression, Operator, Token};
pub use crate::history::{Calculation, CalculationLog, HistoryStore, StoreError};
