#![deny(clippy::arithmetic_side_effects)]
//! Rill Eval - tree-walking evaluator for Rill expression trees.
//!
//! The evaluator is a pure recursive function from `(expression,
//! environment)` to a value:
//! - [`Environment`]: persistent chain of name/value bindings; extending
//!   never mutates, so environments share structure freely
//! - [`evaluate`]: depth-first dispatch over [`rill_ir::Expr`]
//! - [`evaluate_binary`]: direct enum-based binary operator dispatch with
//!   checked arithmetic
//! - [`Value`]: the runtime value variants (integer, boolean)
//!
//! Failures surface as [`EvalError`]; no case recovers from a child
//! failure, so the first fault anywhere in the tree aborts the whole
//! evaluation.

mod environment;
pub mod errors;
mod eval;
mod operators;
mod stack;
mod value;

#[cfg(test)]
mod tests;

pub use environment::Environment;
pub use errors::{
    division_by_zero, integer_overflow, type_mismatch, undefined_variable, EvalError, EvalResult,
};
pub use eval::evaluate;
pub use operators::evaluate_binary;
pub use stack::ensure_sufficient_stack;
pub use value::Value;
