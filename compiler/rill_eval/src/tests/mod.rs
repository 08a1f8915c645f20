//! End-to-end evaluator tests.
//!
//! The named sample trees here mirror the expressions a driver builds by
//! hand: a literal, a sum, let-bound doubling, and division guarded by an
//! equality check.

mod scoping_tests;

use rill_ir::{BinaryOp, Expr, Name};

/// `4 + 5`
fn adds_two_numbers() -> Expr {
    Expr::binary(BinaryOp::Add, Expr::int(4), Expr::int(5))
}

/// `let x = 10 in x + x`
fn doubling_with_let(x: Name) -> Expr {
    Expr::let_in(
        x,
        Expr::int(10),
        Expr::binary(BinaryOp::Add, Expr::ident(x), Expr::ident(x)),
    )
}

/// `if 0 == x then 0 else 10 / x`
fn guarded_division(x: Name) -> Expr {
    Expr::if_else(
        Expr::int_eq(Expr::int(0), Expr::ident(x)),
        Expr::int(0),
        Expr::binary(BinaryOp::Div, Expr::int(10), Expr::ident(x)),
    )
}
