//! Error types for evaluation.
//!
//! Factory functions (e.g. [`division_by_zero`]) are the public API for
//! constructing errors, keeping message wording in one place.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Evaluation-time fault.
///
/// All variants are surfaced unchanged to the caller of
/// [`evaluate`](crate::evaluate); the evaluator never recovers, retries,
/// or substitutes a default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// A variable reference had no binding in any enclosing scope.
    UndefinedVariable { name: String },
    /// A construct received a value of the wrong runtime type.
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
        context: String,
    },
    /// Right operand of `/` evaluated to zero.
    DivisionByZero,
    /// Checked integer arithmetic overflowed.
    IntegerOverflow { operation: &'static str },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::TypeMismatch {
                expected,
                got,
                context,
            } => {
                write!(f, "type mismatch in {context}: expected {expected}, got {got}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// A variable reference had no binding at the point of use.
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::UndefinedVariable {
        name: name.to_owned(),
    }
}

/// A construct received a value of the wrong runtime type.
pub fn type_mismatch(
    expected: &'static str,
    got: &'static str,
    context: impl Into<String>,
) -> EvalError {
    EvalError::TypeMismatch {
        expected,
        got,
        context: context.into(),
    }
}

/// Division with a zero right operand.
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

/// Checked integer arithmetic overflowed.
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}
