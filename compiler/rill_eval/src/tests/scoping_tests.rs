//! Lexical scoping: let-binding, shadowing, and environment persistence.

use pretty_assertions::assert_eq;
use rill_ir::{BinaryOp, Expr, SharedInterner};

use crate::{evaluate, Environment, EvalError, Value};

use super::{doubling_with_let, guarded_division};

#[test]
fn variable_resolves_through_the_environment() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let env = Environment::empty().extend(x, Value::Int(4));
    assert_eq!(evaluate(&Expr::ident(x), &env, &interner), Ok(Value::Int(4)));
}

#[test]
fn let_binding_is_visible_in_its_body() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    assert_eq!(
        evaluate(&doubling_with_let(x), &Environment::empty(), &interner),
        Ok(Value::Int(20))
    );
}

#[test]
fn let_binding_does_not_escape_its_body() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    // (let x = 1 in x) + x: the second x is outside the binding's body.
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::let_in(x, Expr::int(1), Expr::ident(x)),
        Expr::ident(x),
    );
    assert_eq!(
        evaluate(&expr, &Environment::empty(), &interner),
        Err(EvalError::UndefinedVariable {
            name: "x".to_owned()
        })
    );
}

#[test]
fn inner_let_shadows_outer_binding() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    // let x = 1 in let x = 2 in x
    let expr = Expr::let_in(
        x,
        Expr::int(1),
        Expr::let_in(x, Expr::int(2), Expr::ident(x)),
    );
    assert_eq!(
        evaluate(&expr, &Environment::empty(), &interner),
        Ok(Value::Int(2))
    );
}

#[test]
fn outer_binding_is_restored_after_the_shadowing_body() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    // let x = 1 in (let x = 2 in x) + x = 2 + 1
    let expr = Expr::let_in(
        x,
        Expr::int(1),
        Expr::binary(
            BinaryOp::Add,
            Expr::let_in(x, Expr::int(2), Expr::ident(x)),
            Expr::ident(x),
        ),
    );
    assert_eq!(
        evaluate(&expr, &Environment::empty(), &interner),
        Ok(Value::Int(3))
    );
}

#[test]
fn let_is_non_recursive() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    // let x = x in 0: the bound value never sees its own binding.
    let expr = Expr::let_in(x, Expr::ident(x), Expr::int(0));
    assert_eq!(
        evaluate(&expr, &Environment::empty(), &interner),
        Err(EvalError::UndefinedVariable {
            name: "x".to_owned()
        })
    );
}

#[test]
fn let_value_sees_the_outer_binding_it_shadows() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    // let x = 1 in let x = x + 1 in x: the inner value reads the outer x.
    let expr = Expr::let_in(
        x,
        Expr::int(1),
        Expr::let_in(
            x,
            Expr::binary(BinaryOp::Add, Expr::ident(x), Expr::int(1)),
            Expr::ident(x),
        ),
    );
    assert_eq!(
        evaluate(&expr, &Environment::empty(), &interner),
        Ok(Value::Int(2))
    );
}

#[test]
fn guarded_division_takes_the_safe_branch() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let env = Environment::empty().extend(x, Value::Int(0));
    assert_eq!(
        evaluate(&guarded_division(x), &env, &interner),
        Ok(Value::Int(0))
    );
}

#[test]
fn guarded_division_divides_when_safe() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let env = Environment::empty().extend(x, Value::Int(2));
    assert_eq!(
        evaluate(&guarded_division(x), &env, &interner),
        Ok(Value::Int(5))
    );
}

#[test]
fn branches_share_the_same_environment() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    // Both branches read x from one shared environment chain.
    let expr = Expr::if_else(
        Expr::int_eq(Expr::ident(x), Expr::int(0)),
        Expr::ident(x),
        Expr::binary(BinaryOp::Sub, Expr::int(0), Expr::ident(x)),
    );

    let zero = Environment::empty().extend(x, Value::Int(0));
    assert_eq!(evaluate(&expr, &zero, &interner), Ok(Value::Int(0)));

    let five = Environment::empty().extend(x, Value::Int(5));
    assert_eq!(evaluate(&expr, &five, &interner), Ok(Value::Int(-5)));
}
