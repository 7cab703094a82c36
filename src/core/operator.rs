//! Binary operators and their evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Display string written into the entry and history when evaluation fails.
pub const ERROR_MARKER: &str = "Error";

/// Errors produced by [`evaluate`].
///
/// These are values, not faults: the engine renders them as [`ERROR_MARKER`]
/// and keeps running.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    /// The string shown in place of a numeric result.
    pub fn display_marker(&self) -> &'static str {
        match self {
            Self::DivisionByZero => ERROR_MARKER,
        }
    }
}

/// The four operators of a chained calculator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used when building history expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Apply `operator` to the two operands.
///
/// Pure and deterministic with plain IEEE-754 semantics. The only
/// non-numeric outcome is dividing by zero, which returns
/// [`EvalError::DivisionByZero`] for every dividend, including NaN and zero.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{evaluate, EvalError, Operator};
///
/// assert_eq!(evaluate(Operator::Add, 5.0, 3.0), Ok(8.0));
/// assert_eq!(evaluate(Operator::Divide, 8.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(operator: Operator, first: f64, second: f64) -> Result<f64, EvalError> {
    match operator {
        Operator::Add => Ok(first + second),
        Operator::Subtract => Ok(first - second),
        Operator::Multiply => Ok(first * second),
        Operator::Divide if second == 0.0 => Err(EvalError::DivisionByZero),
        Operator::Divide => Ok(first / second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_each_operator() {
        assert_eq!(evaluate(Operator::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(evaluate(Operator::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(evaluate(Operator::Multiply, 2.0, 3.0), Ok(6.0));
        assert_eq!(evaluate(Operator::Divide, 3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn divide_by_zero_is_marker() {
        assert_eq!(
            evaluate(Operator::Divide, 8.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            evaluate(Operator::Divide, 0.0, -0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn marker_displays_error_literal() {
        assert_eq!(EvalError::DivisionByZero.display_marker(), "Error");
    }

    #[test]
    fn follows_ieee_semantics() {
        assert_eq!(evaluate(Operator::Add, 0.1, 0.2), Ok(0.1 + 0.2));
        assert_eq!(
            evaluate(Operator::Multiply, f64::MAX, 2.0),
            Ok(f64::INFINITY)
        );
        assert!(evaluate(Operator::Add, f64::NAN, 1.0).unwrap().is_nan());
    }

    #[test]
    fn symbols_are_stable() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Subtract.to_string(), "-");
        assert_eq!(Operator::Multiply.to_string(), "×");
        assert_eq!(Operator::Divide.to_string(), "÷");
    }
}
