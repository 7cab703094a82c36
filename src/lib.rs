//! Chaincalc: a chained two-operand calculator engine
//!
//! Chaincalc follows the "pure core, imperative shell" split. The core
//! evaluates operators and describes the interaction state as plain values;
//! the engine applies user actions to that state, records completed
//! calculations and pushes display updates to a front end.
//!
//! # Core Concepts
//!
//! - **Engine**: `Calculator` interprets digit, decimal, operator, equals,
//!   clear, negate and percent presses, left to right with no precedence
//! - **History**: newest-first log of at most ten completed calculations,
//!   persisted as JSON through a `KeyValueStore`
//! - **Render**: the `Render` trait receives every display and history change
//!
//! # Example
//!
//! ```rust
//! use chaincalc::core::Operator;
//! use chaincalc::engine::{Calculator, Digit};
//! use chaincalc::render::RecordingRender;
//! use chaincalc::store::MemoryStore;
//!
//! let mut calc = Calculator::new(MemoryStore::new(), RecordingRender::new());
//! calc.digit(Digit::new(5).unwrap());
//! calc.operator(Operator::Add);
//! calc.digit(Digit::new(3).unwrap());
//! calc.equals();
//!
//! assert_eq!(calc.current_entry(), "8");
//! assert_eq!(calc.render().last_state(), Some(("8", "5 + 3 =")));
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod history;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use self::core::{evaluate, CalculatorState, EvalError, Operator, Phase};
pub use engine::{Action, Calculator, Digit};
pub use history::{HistoryEntry, HistoryLog, HistoryManager};
pub use render::Render;
pub use store::{FileStore, KeyValueStore, MemoryStore};
