//! Calculator state and operator codes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four binary operators on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    /// Written as an uppercase `X` on the keypad.
    Multiply,
    Divide,
}

impl Operation {
    /// The single-character code used on the keypad.
    pub fn code(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => 'X',
            Self::Divide => '/',
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rejected operator code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation code '{0}' (expected one of +, -, X, /)")]
pub struct OperationError(pub String);

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "X" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(OperationError(other.to_string())),
        }
    }
}

/// Everything the calculator remembers between presses.
///
/// `Some("")` is a real value: it is what a failed evaluation leaves behind
/// and is distinct from an absent operand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorState {
    /// Operand being typed, or the last result.
    pub current_operand: Option<String>,
    /// Left-hand operand waiting for `operation`.
    pub previous_operand: Option<String>,
    /// Pending operator.
    pub operation: Option<Operation>,
    /// When set, the next digit replaces `current_operand`.
    pub overwrite: bool,
}

impl CalculatorState {
    /// The empty state the calculator starts in.
    pub fn new() -> Self {
        Self::default()
    }
}
