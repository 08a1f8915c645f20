//! Expression tree.
//!
//! Nodes are built bottom-up through the constructor helpers and never
//! mutated afterwards. Each node exclusively owns its children via `Box`;
//! there is no sharing between subtrees and no way to form a cycle.

use crate::{BinaryOp, Name};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Integer literal: `42`
    Int(i64),

    /// Binary arithmetic: `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Variable reference
    Ident(Name),

    /// Lexical binding: `name` is bound to the evaluated `value` within
    /// `body` only. Non-recursive: `value` is evaluated in the outer
    /// environment, so it cannot see `name`.
    Let {
        name: Name,
        value: Box<Expr>,
        body: Box<Expr>,
    },

    /// Integer equality predicate: `left == right`
    IntEq {
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional. The predicate must evaluate to a boolean; only the
    /// taken branch is ever evaluated.
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

impl Expr {
    /// Integer literal.
    pub const fn int(value: i64) -> Expr {
        Expr::Int(value)
    }

    /// Binary arithmetic node.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Variable reference.
    pub const fn ident(name: Name) -> Expr {
        Expr::Ident(name)
    }

    /// `let name = value in body`.
    pub fn let_in(name: Name, value: Expr, body: Expr) -> Expr {
        Expr::Let {
            name,
            value: Box::new(value),
            body: Box::new(body),
        }
    }

    /// Integer equality predicate.
    pub fn int_eq(left: Expr, right: Expr) -> Expr {
        Expr::IntEq {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Conditional.
    pub fn if_else(cond: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }
}
