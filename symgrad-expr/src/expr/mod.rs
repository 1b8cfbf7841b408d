//! The expression tree itself.
//!
//! [`Expr`] is an ordinary tagged value: leaves are integer constants, variable references, or
//! Euler's number; interior nodes are the unary and binary operators. Binary nodes always have
//! exactly two children; sums and products are *not* flattened into n-ary lists, because the
//! canonical textual rendering (and the rewrite rules in `symgrad-compute`) are defined over the
//! binary shape.
//!
//! Construction never simplifies. `int(0) + int(0)` really is an addition node with two zero
//! children; collapsing it is the simplifier's job, not the constructor's. The [`std::ops`]
//! implementations below exist purely so that building test and demo expressions reads like the
//! algebra it denotes.

mod iter;

use crate::var::Var;
use iter::ExprIter;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An algebraic expression over the registered variables.
///
/// The derived [`PartialEq`] is structural equality: same node kind, same payload, pairwise equal
/// children. See the [crate-level documentation](crate) for why that is the right notion of
/// equality here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A literal integer constant, such as `2` or `144`.
    Const(i64),

    /// A reference to a registered variable, such as `x` or `y`.
    Var(Var),

    /// Euler's number `e`.
    Euler,

    /// Negation of a subexpression.
    Neg(Box<Expr>),

    /// Square root of a subexpression.
    Sqrt(Box<Expr>),

    /// Natural logarithm of a subexpression.
    Log(Box<Expr>),

    /// Sum of two subexpressions.
    Add(Box<Expr>, Box<Expr>),

    /// Difference of two subexpressions.
    Sub(Box<Expr>, Box<Expr>),

    /// Product of two subexpressions.
    Mul(Box<Expr>, Box<Expr>),

    /// Quotient of two subexpressions.
    Div(Box<Expr>, Box<Expr>),

    /// A base raised to an exponent.
    Exp(Box<Expr>, Box<Expr>),
}

/// Creates a constant expression with the given value.
pub fn int(n: i64) -> Expr {
    Expr::Const(n)
}

impl Expr {
    /// If the expression is a [`Expr::Const`], returns the contained value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Const(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Const`].
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    /// Returns the square root of this expression. No simplification is done.
    pub fn sqrt(self) -> Self {
        Self::Sqrt(Box::new(self))
    }

    /// Returns the natural logarithm of this expression. No simplification is done.
    pub fn log(self) -> Self {
        Self::Log(Box::new(self))
    }

    /// Raises this expression to the given exponent. No simplification is done.
    pub fn pow(self, exponent: Self) -> Self {
        Self::Exp(Box::new(self), Box::new(exponent))
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// The number of nodes in the tree, a rough measure of how complex the expression is.
    pub fn complexity(&self) -> usize {
        self.post_order_iter().count()
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::Const(n)
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Self::Var(var)
    }
}

/// Adds two [`Expr`]s together, producing a plain [`Expr::Add`] node. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Add(Box::new(self), Box::new(rhs))
    }
}

/// Subtracts one [`Expr`] from another, producing a plain [`Expr::Sub`] node. No simplification
/// is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Sub(Box::new(self), Box::new(rhs))
    }
}

/// Multiplies two [`Expr`]s together, producing a plain [`Expr::Mul`] node. No simplification is
/// done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Mul(Box::new(self), Box::new(rhs))
    }
}

/// Divides one [`Expr`] by another, producing a plain [`Expr::Div`] node. No simplification is
/// done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Div(Box::new(self), Box::new(rhs))
    }
}

/// Negates an [`Expr`], producing a plain [`Expr::Neg`] node. No simplification is done, not even
/// for constants.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Neg(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::Var(Var::resolve("x").unwrap())
    }

    #[test]
    fn operators_build_plain_nodes() {
        let expr = int(2) * x() + int(4);
        assert_eq!(expr, Expr::Add(
            Box::new(Expr::Mul(Box::new(int(2)), Box::new(x()))),
            Box::new(int(4)),
        ));
    }

    #[test]
    fn structural_equality_is_syntactic() {
        // `x + x` and `2 * x` denote the same value but are different trees
        assert_ne!(x() + x(), int(2) * x());
        assert_eq!(x() + x(), x() + x());
    }

    #[test]
    fn structural_equality_is_ordered() {
        // unlike a commutativity-aware comparison, operand order matters
        assert_ne!(int(1) + x(), x() + int(1));
    }

    #[test]
    fn complexity_counts_nodes() {
        assert_eq!(int(3).complexity(), 1);
        assert_eq!((int(2) * x() + int(4)).complexity(), 5);
        assert_eq!((-x().sqrt()).complexity(), 3);
    }
}
