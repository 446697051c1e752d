//! Actions accepted by the reducer.

use super::state::Operation;

/// A single user interaction, carrying only the data its kind needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Append a digit (`0`-`9`) or the decimal point.
    AddDigit { digit: char },
    /// Pick the operator for the next operand.
    ChooseOperation { operation: Operation },
    /// Reset the current operand to `0`.
    Clear,
    /// Remove the last character of the current operand.
    DeleteDigit,
    /// Compute the pending operation.
    Evaluate,
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDigit { .. } => "add_digit",
            Self::ChooseOperation { .. } => "choose_operation",
            Self::Clear => "clear",
            Self::DeleteDigit => "delete_digit",
            Self::Evaluate => "evaluate",
        }
    }
}
