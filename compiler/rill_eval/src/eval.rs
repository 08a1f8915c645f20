//! Recursive evaluation of expression trees.

use rill_ir::{Expr, Name, StringInterner};

use crate::environment::Environment;
use crate::errors::{type_mismatch, undefined_variable, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

/// Evaluate `expr` under `env`.
///
/// Pure: the only observable effect is the returned value. Recursion is
/// depth-first and left-to-right; the environment is threaded down
/// unchanged except by `Let`, which extends it for its body only. Child
/// failures propagate unchanged, so the first fault anywhere in the tree
/// aborts the whole evaluation.
///
/// The interner is needed only to resolve names in error messages.
pub fn evaluate(expr: &Expr, env: &Environment, interner: &StringInterner) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        Expr::Int(v) => Ok(Value::Int(*v)),

        Expr::Binary { op, left, right } => {
            let left = evaluate(left, env, interner)?;
            let right = evaluate(right, env, interner)?;
            evaluate_binary(left, right, *op)
        }

        Expr::Ident(name) => eval_ident(*name, env, interner),

        Expr::Let { name, value, body } => {
            // The value is evaluated in the outer environment, so the
            // binding is never visible to its own defining expression.
            let bound = evaluate(value, env, interner)?;
            evaluate(body, &env.extend(*name, bound), interner)
        }

        Expr::IntEq { left, right } => {
            let left = expect_int(evaluate(left, env, interner)?, "left side of `==`")?;
            let right = expect_int(evaluate(right, env, interner)?, "right side of `==`")?;
            Ok(Value::Bool(left == right))
        }

        Expr::If {
            cond,
            then_branch,
            else_branch,
        } => match evaluate(cond, env, interner)? {
            // Only the taken branch is evaluated.
            Value::Bool(true) => evaluate(then_branch, env, interner),
            Value::Bool(false) => evaluate(else_branch, env, interner),
            other => Err(type_mismatch("bool", other.type_name(), "if condition")),
        },
    })
}

/// Evaluate an identifier lookup.
///
/// Looks up the name in the environment chain; resolves the identifier
/// through the interner only on failure, for the error message.
fn eval_ident(name: Name, env: &Environment, interner: &StringInterner) -> EvalResult {
    env.lookup(name)
        .ok_or_else(|| undefined_variable(interner.lookup(name)))
}

/// Require an integer value, naming the construct that needed it.
fn expect_int(value: Value, context: &'static str) -> Result<i64, EvalError> {
    match value {
        Value::Int(v) => Ok(v),
        other => Err(type_mismatch("int", other.type_name(), context)),
    }
}
