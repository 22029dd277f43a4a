//! Keystroke-driven calculator expression engine.
//!
//! # Why?
//!
//! An interactive calculator never sees a whole expression up front:
//! operands and operators arrive one keypress at a time, and at every
//! keypress the display needs a value and a human-readable description of
//! what has been entered so far. The [`Brain`] builds an expression tree
//! incrementally, defers one binary operation at a time until its right
//! operand arrives, renders precedence-correct descriptions as it goes, and
//! peels the tree back one level per undo. One algebraic variable can stand
//! in for an operand and be re-bound at evaluation time.
//!
//! Arithmetic faults are not errors: division by zero and friends produce
//! IEEE-754 specials that flow through results, and unknown operator
//! symbols are ignored outright. No call on the engine ever fails.
//!
//! # Example
//!
//! ```rust
//! use calc_expr::*;
//!
//! let mut brain: Brain<f64> = Brain::new();
//! brain.set_operand(2.0);
//! brain.perform_operation("+");
//! brain.set_operand(3.0);
//! brain.perform_operation("=");
//! brain.perform_operation("×");
//! brain.set_operand(4.0);
//! brain.perform_operation("=");
//!
//! let evaluation = brain.evaluate();
//! assert_eq!(evaluation.result, 20.0);
//! assert_eq!(evaluation.description, "(2 + 3) × 4");
//! assert!(!evaluation.is_pending);
//!
//! // Undo discards one operand level, not one keystroke.
//! brain.undo_operation();
//! assert_eq!(brain.evaluate().result, 5.0);
//! ```

mod brain;
mod evaluate;
mod expression;
mod graph;
mod keypad;
mod operation;
mod proptests;

pub use brain::{Brain, Evaluation};
pub use expression::{Expression, Precedence, Value};
pub use graph::GraphModel;
pub use keypad::OperandEntry;
pub use operation::Operation;

/// Float types the engine can calculate with.
pub trait Real:
    num_traits::Float + num_traits::FloatConst + std::fmt::Display + std::str::FromStr + Send + Sync
{
}
impl Real for f32 {}
impl Real for f64 {}
