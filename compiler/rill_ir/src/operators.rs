//! Binary operators.

/// Binary arithmetic operators.
///
/// The set is closed: equality is its own expression form
/// ([`Expr::IntEq`](crate::Expr::IntEq)), not an operator, so every
/// operator here takes integer operands and produces an integer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}
