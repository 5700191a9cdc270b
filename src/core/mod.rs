//! Core expression types and evaluation logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Operators and their arithmetic via [`Operator`]
//! - The [`Token`] sum type
//! - Expression accumulation and left-to-right evaluation via [`Expression`]
//!
//! All logic in this module is pure (no side effects); persistence lives in
//! [`crate::history`].

mod error;
mod expression;
mod operator;
mod token;

pub use error::EvalError;
pub use expression::Expression;
pub use operator::Operator;
pub use token::Token;
