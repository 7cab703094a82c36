//! The calculator engine.

use super::action::{Action, Digit};
use crate::core::{
    evaluate, format_number, parse_entry, CalculatorState, Operator, Phase,
};
use crate::history::HistoryManager;
use crate::render::Render;
use crate::store::KeyValueStore;
use tracing::debug;

/// Chained two-operand calculator.
///
/// Owns the interaction state, the history manager and the render
/// collaborator for one session. Operations resolve strictly left to
/// right with no precedence. Every action re-renders the display, even
/// when it leaves the state unchanged.
pub struct Calculator<St: KeyValueStore, R: Render> {
    state: CalculatorState,
    history: HistoryManager<St>,
    render: R,
    previous_display: String,
}

impl<St: KeyValueStore, R: Render> Calculator<St, R> {
    /// Start a session: load history from `store` and render the initial display.
    pub fn new(store: St, render: R) -> Self {
        let mut calculator = Self {
            state: CalculatorState::new(),
            history: HistoryManager::load(store),
            render,
            previous_display: String::new(),
        };
        calculator.history.publish(&mut calculator.render);
        calculator.finish("start", None);
        calculator
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Digit(d) => self.digit(d),
            Action::DecimalPoint => self.decimal_point(),
            Action::Operator(op) => self.operator(op),
            Action::Equals => self.equals(),
            Action::Clear => self.clear(),
            Action::Negate => self.negate(),
            Action::Percent => self.percent(),
        }
    }

    pub fn digit(&mut self, digit: Digit) {
        let ch = digit.as_char();
        if self.state.is_awaiting_operand() {
            self.state.set_entry(ch.to_string());
            self.state.set_awaiting(false);
        } else if self.state.current_entry() == "0" {
            self.state.set_entry(ch.to_string());
        } else {
            self.state.push_entry(ch);
        }
        self.finish("digit", None);
    }

    pub fn decimal_point(&mut self) {
        if self.state.is_awaiting_operand() {
            self.state.set_entry("0.");
            self.state.set_awaiting(false);
        } else if !self.state.current_entry().contains('.') {
            self.state.push_entry('.');
        }
        self.finish("decimal_point", None);
    }

    /// Select `op`, resolving the open operation first if there is one.
    ///
    /// Pressing an operator again before any digit only swaps the operator.
    pub fn operator(&mut self, op: Operator) {
        let open = (self.state.selected_operator(), self.state.pending_operand());
        if open.0.is_some() && self.state.is_awaiting_operand() {
            debug!(operator = %op, "operator replaced");
        } else if let (Some(selected), Some(pending)) = open {
            let (_, value) = self.resolve(selected, pending);
            self.state.set_pending(Some(value));
        } else {
            self.state
                .set_pending(Some(parse_entry(self.state.current_entry())));
        }
        self.state.set_operator(Some(op));
        self.state.set_awaiting(true);
        self.finish("operator", None);
    }

    /// Resolve the open operation and close the chain.
    ///
    /// No-op without a selected operator or before a second operand is typed.
    pub fn equals(&mut self) {
        let open = match (self.state.selected_operator(), self.state.pending_operand()) {
            (Some(selected), Some(pending)) if !self.state.is_awaiting_operand() => {
                Some((selected, pending))
            }
            _ => None,
        };
        let Some((selected, pending)) = open else {
            self.finish("equals", None);
            return;
        };

        let (lhs, _) = self.resolve(selected, pending);
        self.state.set_operator(None);
        self.state.set_pending(None);
        self.state.set_awaiting(false);
        self.finish("equals", Some(format!("{lhs} =")));
    }

    pub fn clear(&mut self) {
        self.state.reset();
        self.finish("clear", None);
    }

    pub fn negate(&mut self) {
        let value = -1.0 * parse_entry(self.state.current_entry());
        self.state.set_entry(format_number(value));
        self.finish("negate", None);
    }

    pub fn percent(&mut self) {
        let value = parse_entry(self.state.current_entry()) / 100.0;
        self.state.set_entry(format_number(value));
        self.finish("percent", None);
    }

    /// Empty the history log and its persisted copy.
    pub fn clear_history(&mut self) {
        self.history.clear_all(&mut self.render);
    }

    pub fn current_entry(&self) -> &str {
        self.state.current_entry()
    }

    /// Secondary display line as last rendered.
    pub fn previous_display(&self) -> &str {
        &self.previous_display
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &HistoryManager<St> {
        &self.history
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    /// End the session, returning the store and render collaborator.
    pub fn into_parts(self) -> (St, R) {
        (self.history.into_store(), self.render)
    }

    /// Evaluate `pending <selected> entry`, record it and show the result.
    ///
    /// Returns the `"<lhs> <symbol> <rhs>"` part of the expression and the
    /// numeric result, NaN when evaluation produced the error marker.
    fn resolve(&mut self, selected: Operator, pending: f64) -> (String, f64) {
        let rhs = self.state.current_entry().to_string();
        let (result, value) = match evaluate(selected, pending, parse_entry(&rhs)) {
            Ok(value) => (format_number(value), value),
            Err(e) => {
                debug!(error = %e, "evaluation failed");
                (e.display_marker().to_string(), f64::NAN)
            }
        };

        let lhs = format!("{} {} {}", format_number(pending), selected, rhs);
        self.history
            .append(format!("{lhs} = {result}"), result.clone(), &mut self.render);
        self.state.set_entry(result);
        (lhs, value)
    }

    fn finish(&mut self, action: &str, resolved: Option<String>) {
        self.previous_display = resolved
            .or_else(|| self.state.chain_prefix())
            .unwrap_or_default();
        debug!(
            action,
            entry = self.state.current_entry(),
            phase = self.state.phase().name(),
            "transition"
        );
        self.render
            .on_state_changed(self.state.current_entry(), &self.previous_display);
    }
}
