//! Calculator core.
//!
//! This module provides:
//! - The calculator state and its operator codes
//! - The reducer mapping an action to the next state
//! - Two-operand evaluation with canonical number formatting
//! - Copying results to the clipboard

mod action;
mod clipboard;
mod evaluation;
mod number;
mod reducer;
mod state;

pub use action::Action;
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use evaluation::evaluate;
pub use number::{format_number, parse_prefix, to_number};
pub use reducer::reduce;
pub use state::{CalculatorState, Operation, OperationError};
