//! Canonical textual rendering of expression trees.
//!
//! The grammar is fixed for compatibility and is deliberately dumb: every binary operation is
//! fully parenthesized as `( lhs op rhs )`, unary functions render as `func( child )`, and
//! negation as `( - child )`. No precedence-based parenthesis elision is performed, so the output
//! is an unambiguous, deterministic function of the tree shape.

use crate::expr::Expr;
use std::fmt::{self, Display, Formatter};

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(n) => write!(f, "{}", n),
            Expr::Var(var) => write!(f, "{}", var),
            Expr::Euler => write!(f, "e"),
            Expr::Neg(child) => write!(f, "( - {} )", child),
            Expr::Sqrt(child) => write!(f, "sqrt( {} )", child),
            Expr::Log(child) => write!(f, "log( {} )", child),
            Expr::Add(lhs, rhs) => write!(f, "( {} + {} )", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "( {} - {} )", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "( {} * {} )", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "( {} / {} )", lhs, rhs),
            Expr::Exp(lhs, rhs) => write!(f, "( {} ^ {} )", lhs, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::int;
    use crate::var::Var;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::Var(Var::resolve("x").unwrap())
    }

    fn y() -> Expr {
        Expr::Var(Var::resolve("y").unwrap())
    }

    #[test]
    fn leaves() {
        assert_eq!(int(42).to_string(), "42");
        assert_eq!(int(-5).to_string(), "-5");
        assert_eq!(x().to_string(), "x");
        assert_eq!(Expr::Euler.to_string(), "e");
    }

    #[test]
    fn unregistered_variable() {
        assert_eq!(Expr::Var(Var::new(123)).to_string(), "unknown");
    }

    #[test]
    fn unary_forms() {
        assert_eq!((-x()).to_string(), "( - x )");
        assert_eq!(x().sqrt().to_string(), "sqrt( x )");
        assert_eq!(x().log().to_string(), "log( x )");
    }

    #[test]
    fn binary_forms() {
        assert_eq!((x() + y()).to_string(), "( x + y )");
        assert_eq!((x() - y()).to_string(), "( x - y )");
        assert_eq!((x() * y()).to_string(), "( x * y )");
        assert_eq!((x() / y()).to_string(), "( x / y )");
        assert_eq!(x().pow(y()).to_string(), "( x ^ y )");
    }

    #[test]
    fn nesting_is_fully_parenthesized() {
        let expr = int(2) * x() + int(4) * y();
        assert_eq!(expr.to_string(), "( ( 2 * x ) + ( 4 * y ) )");
    }
}
