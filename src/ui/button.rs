//! Keypad buttons and their mapping to reducer actions.
//!
//! A button is described the way the keypad markup describes it: a
//! `data-type` tag plus a `value`. Tokens on the command line and on stdin
//! use the compact form `type[:value]`, e.g. `digit:7`, `operation:X`,
//! `evaluate`.

use crate::calculator::{Action, Operation, OperationError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while turning a button press into an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ButtonError {
    #[error("empty button token")]
    Empty,
    #[error("unknown button type '{0}'")]
    UnknownKind(String),
    #[error("invalid digit '{0}' (expected 0-9 or '.')")]
    InvalidDigit(String),
    #[error(transparent)]
    InvalidOperation(#[from] OperationError),
}

/// The `data-type` tag of a keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Operation,
    Digit,
    Clear,
    Evaluate,
    Delete,
}

impl ButtonKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Operation => "operation",
            Self::Digit => "digit",
            Self::Clear => "clear",
            Self::Evaluate => "evaluate",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for ButtonKind {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operation" => Ok(Self::Operation),
            "digit" => Ok(Self::Digit),
            "clear" => Ok(Self::Clear),
            "evaluate" => Ok(Self::Evaluate),
            "delete" => Ok(Self::Delete),
            other => Err(ButtonError::UnknownKind(other.to_string())),
        }
    }
}

/// A single keypad button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub kind: ButtonKind,
    pub value: String,
}

impl Button {
    pub fn new(kind: ButtonKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Parse a `type[:value]` token.
    ///
    /// Only the first `:` separates the tag from the value.
    pub fn parse(token: &str) -> Result<Self, ButtonError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ButtonError::Empty);
        }

        let (tag, value) = token.split_once(':').unwrap_or((token, ""));
        Ok(Self::new(tag.parse()?, value))
    }

    /// Map the button onto the action it triggers.
    ///
    /// Digit and operation buttons validate their value; the other kinds
    /// ignore it.
    pub fn to_action(&self) -> Result<Action, ButtonError> {
        match self.kind {
            ButtonKind::Digit => Ok(Action::AddDigit {
                digit: parse_digit(&self.value)?,
            }),
            ButtonKind::Operation => Ok(Action::ChooseOperation {
                operation: self.value.parse::<Operation>()?,
            }),
            ButtonKind::Clear => Ok(Action::Clear),
            ButtonKind::Evaluate => Ok(Action::Evaluate),
            ButtonKind::Delete => Ok(Action::DeleteDigit),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind.tag())
        } else {
            write!(f, "{}:{}", self.kind.tag(), self.value)
        }
    }
}

fn parse_digit(value: &str) -> Result<char, ButtonError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c == '.' => Ok(c),
        _ => Err(ButtonError::InvalidDigit(value.to_string())),
    }
}
