//! The calculator controller.
//!
//! Owns the state container, feeds it through the reducer and renders the
//! display after every press.

use super::button::{Button, ButtonError};
use crate::calculator::{Action, CalculatorState, copy_to_clipboard, reduce};
use crate::config::Config;
use crate::display::DisplayLines;
use tracing::{debug, warn};

/// A calculator instance: current state plus rendering options.
#[derive(Debug)]
pub struct Calculator {
    state: CalculatorState,
    show_operation: bool,
    copy_on_evaluate: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with default options.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            state: CalculatorState::new(),
            show_operation: config.display.show_operation,
            copy_on_evaluate: config.clipboard.copy_on_evaluate,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Run an action through the reducer and replace the state with the result.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = reduce(&self.state, action);
        let changed = next != self.state;
        debug!(action = action.name(), changed, "dispatched");
        self.state = next;

        if self.copies_after(action, changed) {
            self.copy_result(false);
        }

        &self.state
    }

    /// Press a keypad button.
    ///
    /// On error the state is left exactly as it was.
    pub fn press(&mut self, button: &Button) -> Result<&CalculatorState, ButtonError> {
        let action = button.to_action()?;
        Ok(self.dispatch(action))
    }

    /// Press a button given as a `type[:value]` token.
    ///
    /// Unknown button types are ignored like any other inapplicable press:
    /// the state does not change and the error is handed back for reporting.
    pub fn press_token(&mut self, token: &str) -> Result<&CalculatorState, ButtonError> {
        let button = Button::parse(token)?;
        self.press(&button)
    }

    /// Render the two display lines for the current state.
    pub fn display(&self) -> DisplayLines {
        DisplayLines::render(&self.state, self.show_operation)
    }

    /// Only an Evaluate that produced a new result is copied.
    fn copies_after(&self, action: Action, changed: bool) -> bool {
        self.copy_on_evaluate && changed && action == Action::Evaluate
    }

    /// Copy the current result to the clipboard.
    ///
    /// `hold` keeps the clipboard contents alive past process exit (see
    /// [`copy_to_clipboard`]). Failures are logged, never fatal.
    pub fn copy_result(&self, hold: bool) -> bool {
        let lines = self.display();
        let Some(text) = lines.clipboard.as_deref() else {
            debug!("no result to copy");
            return false;
        };

        match copy_to_clipboard(text, hold) {
            Ok(()) => {
                debug!(text, "copied result to clipboard");
                true
            }
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                false
            }
        }
    }
}
