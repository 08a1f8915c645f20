//! Rill IR - expression trees and interned names.
//!
//! This crate holds the data the evaluator consumes:
//! - [`Name`]: compact interned identifier
//! - [`StringInterner`] / [`SharedInterner`]: identifier storage
//! - [`Expr`]: the expression tree, built programmatically
//! - [`BinaryOp`]: the closed arithmetic operator set
//!
//! There is no parser; callers compose [`Expr`] constructors directly.

mod expr;
mod interner;
mod name;
mod operators;

pub use expr::Expr;
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use operators::BinaryOp;
