//! Two-operand evaluation.
//!
//! Computes `previous <operation> current` from a calculator state and
//! returns the result as a display-ready string.

use super::number::{format_number, parse_prefix};
use super::state::CalculatorState;

/// Evaluate the pending operation of `state`.
///
/// Returns an empty string when there is nothing to compute: either operand
/// is absent or not numeric, or no operation is pending. Division by zero is
/// not special-cased and yields `"Infinity"` or `"NaN"`.
pub fn evaluate(state: &CalculatorState) -> String {
    let prev = state.previous_operand.as_deref().and_then(parse_prefix);
    let curr = state.current_operand.as_deref().and_then(parse_prefix);

    match (prev, curr, state.operation) {
        (Some(prev), Some(curr), Some(operation)) => format_number(operation.apply(prev, curr)),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    fn state(prev: Option<&str>, op: Option<Operation>, curr: Option<&str>) -> CalculatorState {
        CalculatorState {
            current_operand: curr.map(str::to_string),
            previous_operand: prev.map(str::to_string),
            operation: op,
            overwrite: false,
        }
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(&state(Some("3"), Some(Operation::Add), Some("4"))), "7");
        assert_eq!(evaluate(&state(Some("3"), Some(Operation::Subtract), Some("4"))), "-1");
        assert_eq!(evaluate(&state(Some("3"), Some(Operation::Multiply), Some("4"))), "12");
        assert_eq!(evaluate(&state(Some("10"), Some(Operation::Divide), Some("4"))), "2.5");
    }

    #[test]
    fn test_decimal_result() {
        let result = evaluate(&state(Some("0.1"), Some(Operation::Add), Some("0.2")));
        assert_eq!(result, "0.30000000000000004");

        let result = evaluate(&state(Some("1"), Some(Operation::Divide), Some("3")));
        assert!(result.starts_with("0.333"));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate(&state(Some("1"), Some(Operation::Divide), Some("0"))),
            "Infinity"
        );
        assert_eq!(
            evaluate(&state(Some("0"), Some(Operation::Divide), Some("0"))),
            "NaN"
        );
    }

    #[test]
    fn test_missing_operand_yields_empty() {
        assert_eq!(evaluate(&state(None, Some(Operation::Add), Some("4"))), "");
        assert_eq!(evaluate(&state(Some("3"), Some(Operation::Add), None)), "");
        assert_eq!(evaluate(&state(Some(""), Some(Operation::Add), Some("4"))), "");
        assert_eq!(evaluate(&state(Some("NaN"), Some(Operation::Add), Some("4"))), "");
    }

    #[test]
    fn test_missing_operation_yields_empty() {
        assert_eq!(evaluate(&state(Some("3"), None, Some("4"))), "");
    }

    #[test]
    fn test_previous_result_feeds_forward() {
        assert_eq!(
            evaluate(&state(Some("Infinity"), Some(Operation::Subtract), Some("1"))),
            "Infinity"
        );
        assert_eq!(
            evaluate(&state(Some("1e+21"), Some(Operation::Multiply), Some("10"))),
            "1e+22"
        );
    }

    #[test]
    fn test_trailing_decimal_point_operand() {
        assert_eq!(evaluate(&state(Some("5."), Some(Operation::Add), Some(".5"))), "5.5");
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let s = state(Some("2"), Some(Operation::Divide), Some("3"));
        assert_eq!(evaluate(&s), evaluate(&s));
    }
}
