//! User actions accepted by the engine.

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when turning front-end input into actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(char),

    #[error("Unknown input '{0}'")]
    UnknownToken(String),
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = ActionParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .and_then(|d| Digit::new(d as u8))
            .ok_or(ActionParseError::InvalidDigit(ch))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One press on the calculator keypad.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Negate,
    Percent,
}

impl Action {
    /// Name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::DecimalPoint => "decimal_point",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Negate => "negate",
            Self::Percent => "percent",
        }
    }

    /// Parse whitespace separated input into actions.
    ///
    /// Tokens that are not a single action but consist only of digits and
    /// decimal points, such as `12.5`, expand to one action per character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chaincalc::core::Operator;
    /// use chaincalc::engine::{Action, Digit};
    ///
    /// let actions = Action::parse_sequence("12 +").unwrap();
    /// assert_eq!(
    ///     actions,
    ///     vec![
    ///         Action::Digit(Digit::new(1).unwrap()),
    ///         Action::Digit(Digit::new(2).unwrap()),
    ///         Action::Operator(Operator::Add),
    ///     ]
    /// );
    /// ```
    pub fn parse_sequence(input: &str) -> Result<Vec<Action>, ActionParseError> {
        let mut actions = Vec::new();
        for token in input.split_whitespace() {
            match token.parse::<Action>() {
                Ok(action) => actions.push(action),
                Err(err) => {
                    if !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                        return Err(err);
                    }
                    for ch in token.chars() {
                        actions.push(match ch {
                            '.' => Action::DecimalPoint,
                            _ => Action::Digit(Digit::try_from(ch)?),
                        });
                    }
                }
            }
        }
        Ok(actions)
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let lowered = token.trim().to_lowercase();
        let action = match lowered.as_str() {
            "." => Self::DecimalPoint,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" | "x" | "×" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "c" | "ac" | "clear" => Self::Clear,
            "+/-" | "±" | "neg" => Self::Negate,
            "%" => Self::Percent,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_digit() => Self::Digit(Digit::try_from(ch)?),
                    _ => return Err(ActionParseError::UnknownToken(token.to_string())),
                }
            }
        };
        Ok(action)
    }
}
