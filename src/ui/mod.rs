pub mod button;
pub mod controller;
pub mod driver;

pub use button::{Button, ButtonError, ButtonKind};
pub use controller::Calculator;
pub use driver::{OutputFormat, press_tokens, render, run_lines};
