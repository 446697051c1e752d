//! Display rendering for the calculator's two text lines.
//!
//! The upper line shows the previous operand and the pending operator, the
//! lower line shows the operand being typed (or the last result).

use crate::calculator::{CalculatorState, to_number};
use serde::Serialize;

/// The rendered calculator display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayLines {
    /// Previous operand and pending operator, e.g. `"1,234 +"`.
    pub previous: String,
    /// Current operand formatted for display (with thousand separators).
    pub current: String,
    /// Raw current operand as typed or computed, without separators.
    /// None when the operand is absent or empty.
    pub clipboard: Option<String>,
}

impl DisplayLines {
    /// Render both display lines from a state.
    ///
    /// With `show_operation` off, the pending operator is left out of the
    /// upper line.
    pub fn render(state: &CalculatorState, show_operation: bool) -> Self {
        let previous_operand = format_operand(state.previous_operand.as_deref()).unwrap_or_default();
        let operation = match state.operation {
            Some(op) if show_operation => op.to_string(),
            _ => String::new(),
        };

        let previous = format!("{} {}", previous_operand, operation)
            .trim()
            .to_string();
        let current = format_operand(state.current_operand.as_deref()).unwrap_or_default();
        let clipboard = state
            .current_operand
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(str::to_string);

        Self {
            previous,
            current,
            clipboard,
        }
    }
}

/// Format an operand for display.
///
/// The integer part gets thousand separators, the decimal part (everything
/// after the first `.`) is passed through unchanged. Absent operands stay
/// absent and an empty operand (a failed evaluation) renders as blank.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    if operand.is_empty() {
        return Some(String::new());
    }

    match operand.split_once('.') {
        None => Some(format_integer(operand)),
        Some((integer, decimal)) => Some(format!("{}.{}", format_integer(integer), decimal)),
    }
}

/// Format the integer part of an operand with US-English grouping.
///
/// Plain digit strings are grouped as typed, so no precision is lost on
/// long operands. Anything else goes through number conversion: an empty
/// part reads as zero, non-numeric text renders as `NaN` and infinities as
/// `∞`.
fn format_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        let trimmed = digits.trim_start_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        return format!("{}{}", sign, group_thousands(trimmed));
    }

    let value = to_number(integer);

    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    // Rounds half away from zero; `{:.0}` prints the exact integer digits
    let digits = format!("{:.0}", value.abs().round());
    format!("{}{}", sign, group_thousands(&digits))
}

/// Insert a `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
