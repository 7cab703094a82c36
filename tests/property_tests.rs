//! Property-based tests for the calculator engine and history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chaincalc::core::{evaluate, EvalError, Operator};
use chaincalc::engine::{Action, Calculator, Digit};
use chaincalc::history::{HistoryEntry, HistoryLog, HistoryManager, HISTORY_CAPACITY};
use chaincalc::render::{NullRender, RecordingRender};
use chaincalc::store::MemoryStore;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

prop_compose! {
    fn arbitrary_digit()(value in 0..=9u8) -> Digit {
        Digit::new(value).unwrap()
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Action::Digit),
        1 => Just(Action::DecimalPoint),
        2 => arbitrary_operator().prop_map(Action::Operator),
        1 => Just(Action::Equals),
        1 => Just(Action::Clear),
        1 => Just(Action::Negate),
        1 => Just(Action::Percent),
    ]
}

fn same_outcome(a: Result<f64, EvalError>, b: Result<f64, EvalError>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan()),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

proptest! {
    #[test]
    fn digits_concatenate(digits in prop::collection::vec(arbitrary_digit(), 1..15)) {
        let mut calc = Calculator::new(MemoryStore::new(), NullRender);
        for digit in &digits {
            calc.digit(*digit);
        }

        let typed: String = digits.iter().map(|d| d.as_char()).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(calc.current_entry(), expected);
    }

    #[test]
    fn divide_by_zero_always_marks_error(x in any::<f64>()) {
        prop_assert_eq!(evaluate(Operator::Divide, x, 0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn evaluate_is_deterministic(
        op in arbitrary_operator(),
        a in any::<f64>(),
        b in any::<f64>(),
    ) {
        prop_assert!(same_outcome(evaluate(op, a, b), evaluate(op, a, b)));
    }

    #[test]
    fn history_never_exceeds_capacity(count in 0..30usize) {
        let mut manager = HistoryManager::load(MemoryStore::new());
        for n in 0..count {
            manager.append(format!("{n} + 0 = {n}"), n.to_string(), &mut NullRender);
            prop_assert!(manager.entries().len() <= HISTORY_CAPACITY);
        }

        prop_assert_eq!(manager.entries().len(), count.min(HISTORY_CAPACITY));
        if count > 0 {
            let newest = (count - 1).to_string();
            prop_assert_eq!(manager.entries()[0].result(), newest.as_str());
        }
    }

    #[test]
    fn persisted_log_roundtrips_through_store(count in 0..15usize) {
        let mut manager = HistoryManager::load(MemoryStore::new());
        for n in 0..count {
            manager.append(format!("{n} × 1 = {n}"), n.to_string(), &mut NullRender);
        }
        let expected = manager.log().clone();

        let reloaded = HistoryManager::load(manager.into_store());
        prop_assert_eq!(reloaded.log(), &expected);
    }

    #[test]
    fn clear_all_then_load_is_empty(count in 0..15usize) {
        let mut manager = HistoryManager::load(MemoryStore::new());
        for n in 0..count {
            manager.append(format!("{n} - 0 = {n}"), n.to_string(), &mut NullRender);
        }
        manager.clear_all(&mut NullRender);

        let reloaded = HistoryManager::load(manager.into_store());
        prop_assert!(reloaded.entries().is_empty());
    }

    #[test]
    fn record_is_pure(results in prop::collection::vec("[0-9]{1,4}", 1..12)) {
        let mut log = HistoryLog::new();
        for result in &results {
            let before = log.clone();
            let next = log.record(HistoryEntry::new(format!("{result} + 0 = {result}"), result.clone()));
            prop_assert_eq!(&log, &before);
            log = next;
        }
        prop_assert_eq!(log.newest().map(|e| e.result()), results.last().map(String::as_str));
    }

    #[test]
    fn entry_has_at_most_one_decimal_point(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut calc = Calculator::new(MemoryStore::new(), RecordingRender::new());
        for action in &actions {
            calc.apply(*action);
            prop_assert!(calc.current_entry().matches('.').count() <= 1);
            prop_assert!(calc.history().entries().len() <= HISTORY_CAPACITY);
        }

        // One render per action plus the initial render
        prop_assert_eq!(calc.render().states.len(), actions.len() + 1);
    }

    #[test]
    fn equals_always_returns_to_idle(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let mut calc = Calculator::new(MemoryStore::new(), NullRender);
        for action in &actions {
            calc.apply(*action);
        }
        let awaiting_with_operator = calc.state().is_awaiting_operand()
            && calc.state().selected_operator().is_some();

        calc.equals();

        if !awaiting_with_operator {
            prop_assert!(!calc.phase().is_chain_open());
        }
    }
}
