//! Rill driver.
//!
//! There is no textual syntax, so instead of reading a source file the
//! driver builds a handful of sample expression trees, evaluates each
//! under a small top-level environment, and prints the results.

use rill_eval::{evaluate, Environment, Value};
use rill_ir::{BinaryOp, Expr, SharedInterner};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let samples = [
        ("number", Expr::int(10)),
        (
            "adds two numbers",
            Expr::binary(BinaryOp::Add, Expr::int(4), Expr::int(5)),
        ),
        (
            "doubling with let",
            Expr::let_in(
                x,
                Expr::int(10),
                Expr::binary(BinaryOp::Add, Expr::ident(x), Expr::ident(x)),
            ),
        ),
        (
            "guarded division",
            Expr::if_else(
                Expr::int_eq(Expr::int(0), Expr::ident(x)),
                Expr::int(0),
                Expr::binary(BinaryOp::Div, Expr::int(10), Expr::ident(x)),
            ),
        ),
    ];

    let env = Environment::empty().extend(x, Value::Int(0));
    debug!(depth = env.depth(), "top-level environment built");

    for (label, expr) in &samples {
        match evaluate(expr, &env, &interner) {
            Ok(value) => println!("{label}: {value}"),
            Err(err) => {
                eprintln!("{label}: error: {err}");
                std::process::exit(1);
            }
        }
    }
}
