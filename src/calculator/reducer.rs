//! State transitions for the calculator.
//!
//! `reduce` is the only place the calculator state changes. It borrows the
//! old state and always returns a complete new one, so callers can keep the
//! previous value around untouched.

use super::action::Action;
use super::evaluation::evaluate;
use super::state::{CalculatorState, Operation};

/// Compute the state that follows `state` after `action`.
///
/// Never fails: actions that do not apply return a copy of `state`.
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit { digit } => add_digit(state, digit),
        Action::ChooseOperation { operation } => choose_operation(state, operation),
        Action::Clear => CalculatorState {
            // previous operand and operation survive a clear
            current_operand: Some("0".to_string()),
            ..state.clone()
        },
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");

    // No leading double zero
    if digit == '0' && current == "0" {
        return state.clone();
    }

    // At most one decimal point
    if digit == '.' && current.contains('.') {
        return state.clone();
    }

    let mut appended = current.to_string();
    appended.push(digit);

    CalculatorState {
        current_operand: Some(appended),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => state.clone(),
        // Changing the operator before typing the second operand
        (None, Some(_)) => CalculatorState {
            operation: Some(operation),
            ..state.clone()
        },
        (Some(current), None) => CalculatorState {
            previous_operand: Some(current.clone()),
            operation: Some(operation),
            current_operand: None,
            ..state.clone()
        },
        // Chained: fold the pending operation before starting the next one
        (Some(_), Some(_)) => CalculatorState {
            previous_operand: Some(evaluate(state)),
            operation: Some(operation),
            current_operand: None,
            ..state.clone()
        },
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            overwrite: false,
            current_operand: Some("0".to_string()),
            ..state.clone()
        };
    }

    let current_operand = match state.current_operand.as_deref() {
        None => "0".to_string(),
        Some(current) if current.chars().count() == 1 => "0".to_string(),
        Some(current) => {
            let mut shortened = current.to_string();
            shortened.pop();
            shortened
        }
    };

    CalculatorState {
        current_operand: Some(current_operand),
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none() || state.previous_operand.is_none() {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(evaluate(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_current(current: &str) -> CalculatorState {
        CalculatorState {
            current_operand: Some(current.to_string()),
            ..CalculatorState::default()
        }
    }

    fn pending(prev: &str, op: Operation, curr: Option<&str>) -> CalculatorState {
        CalculatorState {
            current_operand: curr.map(str::to_string),
            previous_operand: Some(prev.to_string()),
            operation: Some(op),
            overwrite: false,
        }
    }

    fn digit(d: char) -> Action {
        Action::AddDigit { digit: d }
    }

    fn choose(op: Operation) -> Action {
        Action::ChooseOperation { operation: op }
    }

    #[test]
    fn test_add_digit_appends() {
        let state = reduce(&CalculatorState::new(), digit('1'));
        let state = reduce(&state, digit('2'));
        assert_eq!(state.current_operand.as_deref(), Some("12"));
    }

    #[test]
    fn test_add_digit_replaces_when_overwriting() {
        let state = CalculatorState {
            overwrite: true,
            ..with_current("7")
        };
        let next = reduce(&state, digit('3'));
        assert_eq!(next.current_operand.as_deref(), Some("3"));
        assert!(!next.overwrite);
    }

    #[test]
    fn test_repeated_zero_stays_single() {
        let mut state = with_current("0");
        for _ in 0..3 {
            state = reduce(&state, digit('0'));
        }
        assert_eq!(state.current_operand.as_deref(), Some("0"));
    }

    #[test]
    fn test_zero_on_empty_operand_is_kept() {
        let state = reduce(&CalculatorState::new(), digit('0'));
        assert_eq!(state.current_operand.as_deref(), Some("0"));
        let state = reduce(&state, digit('5'));
        assert_eq!(state.current_operand.as_deref(), Some("05"));
    }

    #[test]
    fn test_second_decimal_point_is_ignored() {
        let state = reduce(&CalculatorState::new(), digit('.'));
        let state = reduce(&state, digit('.'));
        assert_eq!(state.current_operand.as_deref(), Some("."));

        let state = reduce(&with_current("0"), digit('.'));
        let state = reduce(&state, digit('.'));
        assert_eq!(state.current_operand.as_deref(), Some("0."));

        let state = reduce(&with_current("1.5"), digit('.'));
        assert_eq!(state.current_operand.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_choose_operation_with_nothing_entered() {
        let state = CalculatorState::new();
        assert_eq!(reduce(&state, choose(Operation::Add)), state);
    }

    #[test]
    fn test_choose_operation_changes_pending_operator() {
        let state = pending("3", Operation::Add, None);
        let next = reduce(&state, choose(Operation::Divide));
        assert_eq!(next, pending("3", Operation::Divide, None));
    }

    #[test]
    fn test_choose_operation_moves_current_to_previous() {
        let next = reduce(&with_current("3"), choose(Operation::Add));
        assert_eq!(next.previous_operand.as_deref(), Some("3"));
        assert_eq!(next.operation, Some(Operation::Add));
        assert_eq!(next.current_operand, None);
    }

    #[test]
    fn test_choose_operation_chains() {
        let state = pending("3", Operation::Add, Some("4"));
        let next = reduce(&state, choose(Operation::Multiply));
        assert_eq!(next.previous_operand.as_deref(), Some("7"));
        assert_eq!(next.operation, Some(Operation::Multiply));
        assert_eq!(next.current_operand, None);
    }

    #[test]
    fn test_choose_operation_keeps_overwrite() {
        let state = CalculatorState {
            overwrite: true,
            ..with_current("7")
        };
        let next = reduce(&state, choose(Operation::Subtract));
        assert!(next.overwrite);
        assert_eq!(next.previous_operand.as_deref(), Some("7"));
    }

    #[test]
    fn test_empty_current_counts_as_entered() {
        let next = reduce(&with_current(""), choose(Operation::Add));
        assert_eq!(next.previous_operand.as_deref(), Some(""));
        assert_eq!(next.current_operand, None);
    }

    #[test]
    fn test_clear_only_resets_current() {
        let state = pending("3", Operation::Add, Some("4"));
        let next = reduce(&state, Action::Clear);
        assert_eq!(next.current_operand.as_deref(), Some("0"));
        assert_eq!(next.previous_operand.as_deref(), Some("3"));
        assert_eq!(next.operation, Some(Operation::Add));
    }

    #[test]
    fn test_clear_keeps_overwrite() {
        let state = CalculatorState {
            overwrite: true,
            ..with_current("7")
        };
        assert!(reduce(&state, Action::Clear).overwrite);
    }

    #[test]
    fn test_delete_digit() {
        let next = reduce(&with_current("5"), Action::DeleteDigit);
        assert_eq!(next.current_operand.as_deref(), Some("0"));

        let next = reduce(&with_current("123"), Action::DeleteDigit);
        assert_eq!(next.current_operand.as_deref(), Some("12"));

        let next = reduce(&CalculatorState::new(), Action::DeleteDigit);
        assert_eq!(next.current_operand.as_deref(), Some("0"));

        let next = reduce(&with_current(""), Action::DeleteDigit);
        assert_eq!(next.current_operand.as_deref(), Some(""));
    }

    #[test]
    fn test_delete_digit_cancels_overwrite() {
        let state = CalculatorState {
            overwrite: true,
            ..with_current("42")
        };
        let next = reduce(&state, Action::DeleteDigit);
        assert_eq!(next.current_operand.as_deref(), Some("0"));
        assert!(!next.overwrite);
    }

    #[test]
    fn test_evaluate() {
        let next = reduce(&pending("3", Operation::Add, Some("4")), Action::Evaluate);
        assert_eq!(next.current_operand.as_deref(), Some("7"));
        assert_eq!(next.previous_operand, None);
        assert_eq!(next.operation, None);
        assert!(next.overwrite);
    }

    #[test]
    fn test_evaluate_without_pending_operation() {
        let state = with_current("4");
        assert_eq!(reduce(&state, Action::Evaluate), state);

        let state = CalculatorState {
            operation: Some(Operation::Add),
            ..with_current("4")
        };
        assert_eq!(reduce(&state, Action::Evaluate), state);
    }

    #[test]
    fn test_evaluate_without_second_operand_stores_empty() {
        let next = reduce(&pending("3", Operation::Add, None), Action::Evaluate);
        assert_eq!(next.current_operand.as_deref(), Some(""));
        assert!(next.overwrite);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = pending("3", Operation::Add, Some("4"));
        let snapshot = state.clone();
        let _ = reduce(&state, Action::Evaluate);
        let _ = reduce(&state, digit('9'));
        let _ = reduce(&state, Action::Clear);
        assert_eq!(state, snapshot);
    }
}
