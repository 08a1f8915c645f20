//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operand type set is fixed, so pattern
//! matching is preferred over trait objects, and the exhaustive `match`
//! makes adding an operator a compile-time-checked change site.

use rill_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, EvalResult};
use crate::value::Value;

/// Checked arithmetic with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation on two already-evaluated operands.
///
/// Both operands must be integers. All arithmetic is checked: overflow is
/// an `IntegerOverflow` error, and `/` with a zero right operand is a
/// `DivisionByZero` error, propagated to the caller rather than caught
/// here.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let (a, b) = match (left, right) {
        (Value::Int(a), Value::Int(b)) => (a, b),
        (Value::Int(_), other) | (other, _) => {
            return Err(type_mismatch(
                "int",
                other.type_name(),
                format!("binary `{}`", op.as_symbol()),
            ));
        }
    };

    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
    }
}
