//! Calculation records and history tracking.
//!
//! A [`Calculation`] pairs a completed expression with its result and a
//! timestamp. Records are immutable once created; the in-memory
//! [`CalculationLog`] preserves insertion order, and [`HistoryStore`]
//! persists it across process restarts.

use crate::core::Expression;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;
mod store;

pub use error::StoreError;
pub use store::{HistoryStore, StoreFormat};

/// Record of a single completed calculation.
///
/// Created once per successful evaluation, never mutated or deleted.
///
/// # Example
///
/// ```rust
/// use reckon::core::{Expression, Operator, Token};
/// use reckon::history::Calculation;
///
/// let expression = Expression::new()
///     .push(Token::Number(2.0))
///     .push(Token::Operator(Operator::Add))
///     .push(Token::Number(3.0));
/// let result = expression.evaluate().unwrap();
///
/// let calculation = Calculation::new(expression, result);
/// assert_eq!(calculation.result, 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Unique record identifier
    pub id: Uuid,
    /// The expression that was evaluated
    pub expression: Expression,
    /// The evaluation result
    pub result: f64,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    /// Create a record for a just-completed evaluation, stamped with the
    /// current time.
    pub fn new(expression: Expression, result: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression,
            result,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, insertion-order-preserving list of calculations.
///
/// The log is immutable — [`record`](Self::record) returns a new log with
/// the calculation appended, in the same style as the rest of the core.
///
/// # Example
///
/// ```rust
/// use reckon::core::{Expression, Token};
/// use reckon::history::{Calculation, CalculationLog};
///
/// let expression = Expression::new().push(Token::Number(5.0));
/// let calculation = Calculation::new(expression, 5.0);
///
/// let log = CalculationLog::new();
/// let log = log.record(calculation.clone());
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.latest(), Some(&calculation));
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationLog {
    calculations: Vec<Calculation>,
}

impl CalculationLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            calculations: Vec::new(),
        }
    }

    /// Record a calculation, returning a new log.
    ///
    /// This is a pure function — it does not mutate the existing log.
    pub fn record(&self, calculation: Calculation) -> Self {
        let mut calculations = self.calculations.clone();
        calculations.push(calculation);
        Self { calculations }
    }

    /// All calculations in original append order.
    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    /// The most recently recorded calculation.
    pub fn latest(&self) -> Option<&Calculation> {
        self.calculations.last()
    }

    /// Number of recorded calculations.
    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    /// Whether the log has no records.
    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }
}

impl FromIterator<Calculation> for CalculationLog {
    fn from_iter<I: IntoIterator<Item = Calculation>>(iter: I) -> Self {
        Self {
            calculations: iter.into_iter().collect(),
        }
    }
}
