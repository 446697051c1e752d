//! A button-driven four-function calculator.
//!
//! The core is a pure reducer over [`calculator::CalculatorState`]; the
//! [`ui`] layer maps keypad buttons onto actions and renders the display.

pub mod calculator;
pub mod config;
pub mod display;
pub mod ui;
