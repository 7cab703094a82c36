//! Calculator engine.
//!
//! The engine is the imperative shell around the pure core: it owns the
//! `CalculatorState`, applies each user action to it, resolves pending
//! operations through `evaluate`, records completed calculations with the
//! `HistoryManager` and pushes the display to the render boundary.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::engine::{Action, Calculator};
//! use chaincalc::render::NullRender;
//! use chaincalc::store::MemoryStore;
//!
//! let mut calc = Calculator::new(MemoryStore::new(), NullRender);
//! for action in Action::parse_sequence("5 + 3 =").unwrap() {
//!     calc.apply(action);
//! }
//!
//! assert_eq!(calc.current_entry(), "8");
//! assert_eq!(calc.history().entries()[0].expression(), "5 + 3 = 8");
//! ```

mod action;
mod machine;

pub use action::{Action, ActionParseError, Digit};
pub use machine::Calculator;
