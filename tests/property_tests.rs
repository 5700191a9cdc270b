//! Property-based tests for the expression core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated expressions.

use proptest::prelude::*;
use reckon::core::{Expression, Operator, Token};
use reckon::history::{Calculation, CalculationLog};

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

prop_compose! {
    /// A non-zero operand, so divisions in generated expressions never fail.
    fn arbitrary_operand()(value in -1e6..1e6f64) -> f64 {
        if value == 0.0 {
            1.0
        } else {
            value
        }
    }
}

prop_compose! {
    /// A well-formed alternating expression together with its token values.
    fn arbitrary_expression()(
        first in arbitrary_operand(),
        pairs in prop::collection::vec((arbitrary_operator(), arbitrary_operand()), 0..8)
    ) -> (Expression, f64, Vec<(Operator, f64)>) {
        let mut expression = Expression::new().push(Token::Number(first));
        for (op, value) in &pairs {
            expression = expression
                .push(Token::Operator(*op))
                .push(Token::Number(*value));
        }
        (expression, first, pairs)
    }
}

/// Identical computations may both be NaN; treat that as equal.
fn same_result(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn evaluation_matches_reference_fold(
        (expression, first, pairs) in arbitrary_expression()
    ) {
        let mut expected = first;
        for (op, value) in &pairs {
            expected = op.apply(expected, *value).unwrap();
        }

        let result = expression.evaluate().unwrap();
        prop_assert!(same_result(result, expected));
    }

    #[test]
    fn evaluation_is_deterministic((expression, _, _) in arbitrary_expression()) {
        let first = expression.evaluate();
        let second = expression.evaluate();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn trailing_operator_never_changes_the_result(
        (expression, _, _) in arbitrary_expression(),
        op in arbitrary_operator()
    ) {
        let dangling = expression.push(Token::Operator(op));
        prop_assert_eq!(dangling.evaluate(), expression.evaluate());
    }

    #[test]
    fn push_leaves_the_original_unchanged(
        (expression, _, _) in arbitrary_expression(),
        value in arbitrary_operand()
    ) {
        let before = expression.len();
        let pushed = expression.push(Token::Number(value));

        prop_assert_eq!(expression.len(), before);
        prop_assert_eq!(pushed.len(), before + 1);
    }

    #[test]
    fn serde_round_trip_preserves_evaluation(
        (expression, _, _) in arbitrary_expression()
    ) {
        let json = serde_json::to_string(&expression).unwrap();
        let deserialized: Expression = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(deserialized.evaluate(), expression.evaluate());
    }

    #[test]
    fn operator_apply_matches_native_arithmetic(
        a in -1e6..1e6f64,
        b in arbitrary_operand()
    ) {
        prop_assert_eq!(Operator::Add.apply(a, b).unwrap(), a + b);
        prop_assert_eq!(Operator::Subtract.apply(a, b).unwrap(), a - b);
        prop_assert!(same_result(Operator::Multiply.apply(a, b).unwrap(), a * b));
        prop_assert!(same_result(Operator::Divide.apply(a, b).unwrap(), a / b));
    }

    #[test]
    fn log_preserves_append_order(
        results in prop::collection::vec(-1e6..1e6f64, 0..10)
    ) {
        let mut log = CalculationLog::new();
        for result in &results {
            let expression = Expression::new().push(Token::Number(*result));
            log = log.record(Calculation::new(expression, *result));
        }

        prop_assert_eq!(log.len(), results.len());
        for (record, expected) in log.calculations().iter().zip(&results) {
            prop_assert_eq!(record.result, *expected);
        }
    }
}
