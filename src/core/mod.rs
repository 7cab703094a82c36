//! Pure calculator core.
//!
//! This module contains the side-effect free pieces of the calculator:
//! - The `Operator` tagged variant and the `evaluate` function
//! - Numeric parsing and display formatting for entries
//! - The `CalculatorState` value and its derived `Phase`
//!
//! Nothing in here logs, persists or renders. The engine owns a
//! `CalculatorState` and drives it with these functions.

mod number;
mod operator;
mod state;

pub use number::{format_number, parse_entry};
pub use operator::{evaluate, EvalError, Operator, ERROR_MARKER};
pub use state::{CalculatorState, Phase};
