//! Calculator interaction state.
//!
//! `CalculatorState` is a plain value owned by the engine. The engine is
//! the only code that mutates it, and only through the crate-internal
//! setters below, so the entry invariants hold between actions.

use super::number::format_number;
use super::operator::{Operator, ERROR_MARKER};
use serde::{Deserialize, Serialize};

/// Entry shown at startup and after a clear.
pub const DEFAULT_ENTRY: &str = "0";

/// Position of the state within a chain.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.phase(), Phase::Idle);
/// assert_eq!(state.phase().name(), "Idle");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No operator selected.
    Idle,
    /// Operator just pressed; the next digit starts a new entry.
    AwaitingOperand,
    /// Digits are being typed for the right-hand operand.
    Accumulating,
}

impl Phase {
    /// Name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::Accumulating => "Accumulating",
        }
    }

    /// Whether a chain is open (an operator is selected).
    pub fn is_chain_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// The running calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    current_entry: String,
    pending_operand: Option<f64>,
    selected_operator: Option<Operator>,
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create a state with all defaults: entry `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            current_entry: DEFAULT_ENTRY.to_string(),
            pending_operand: None,
            selected_operator: None,
            awaiting_operand: false,
        }
    }

    /// The value currently being typed or displayed.
    pub fn current_entry(&self) -> &str {
        &self.current_entry
    }

    /// Left-hand operand fixed by the last operator press.
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn selected_operator(&self) -> Option<Operator> {
        self.selected_operator
    }

    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Whether the entry holds the evaluation error marker.
    pub fn is_error(&self) -> bool {
        self.current_entry == ERROR_MARKER
    }

    /// Derived phase of the chain.
    pub fn phase(&self) -> Phase {
        match (self.selected_operator, self.awaiting_operand) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::AwaitingOperand,
            (Some(_), false) => Phase::Accumulating,
        }
    }

    /// `"<pending> <symbol>"` while a chain is open.
    pub fn chain_prefix(&self) -> Option<String> {
        let operator = self.selected_operator?;
        let pending = self.pending_operand?;
        Some(format!("{} {}", format_number(pending), operator))
    }

    pub(crate) fn set_entry(&mut self, entry: impl Into<String>) {
        self.current_entry = entry.into();
    }

    pub(crate) fn push_entry(&mut self, ch: char) {
        self.current_entry.push(ch);
    }

    pub(crate) fn set_pending(&mut self, operand: Option<f64>) {
        self.pending_operand = operand;
    }

    pub(crate) fn set_operator(&mut self, operator: Option<Operator>) {
        self.selected_operator = operator;
    }

    pub(crate) fn set_awaiting(&mut self, awaiting: bool) {
        self.awaiting_operand = awaiting;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}
