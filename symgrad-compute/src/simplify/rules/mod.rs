//! The ordered rewrite-rule table.
//!
//! Each rule in this module tree is a function that takes the expression to simplify as an
//! argument and returns `Some(expr)` with the rewritten expression if the rule applies, or `None`
//! if the rule does not apply.
//!
//! Rules are grouped by the node kind they match (one module per operator), and within each
//! module the `all` function tries them in a fixed order, **most specific pattern first**: a rule
//! on two literal constants is tried before a rule on one constant and an arbitrary
//! subexpression, which is tried before any fully generic rule. Overlapping patterns therefore
//! resolve deterministically: the first match wins.

pub mod add;
pub mod divide;
pub mod logarithm;
pub mod multiply;
pub mod negate;
pub mod power;
pub mod root;
pub mod subtract;

use crate::step_collector::StepCollector;
use symgrad_expr::Expr;
use super::step::Step;

/// If the expression is an addition node, calls the given transformation function with the two
/// operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(
    expr: &Expr,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Add(lhs, rhs) = expr {
        f(&**lhs, &**rhs)
    } else {
        None
    }
}

/// If the expression is a subtraction node, calls the given transformation function with the two
/// operands.
pub(crate) fn do_subtract(
    expr: &Expr,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Sub(lhs, rhs) = expr {
        f(&**lhs, &**rhs)
    } else {
        None
    }
}

/// If the expression is a multiplication node, calls the given transformation function with the
/// two operands.
pub(crate) fn do_multiply(
    expr: &Expr,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Mul(lhs, rhs) = expr {
        f(&**lhs, &**rhs)
    } else {
        None
    }
}

/// If the expression is a division node, calls the given transformation function with the
/// numerator and denominator.
pub(crate) fn do_divide(
    expr: &Expr,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Div(lhs, rhs) = expr {
        f(&**lhs, &**rhs)
    } else {
        None
    }
}

/// If the expression is a power node, calls the given transformation function with the base and
/// exponent.
pub(crate) fn do_power(
    expr: &Expr,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Exp(lhs, rhs) = expr {
        f(&**lhs, &**rhs)
    } else {
        None
    }
}

/// If the expression is a negation node, calls the given transformation function with the child.
pub(crate) fn do_negate(expr: &Expr, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Neg(child) = expr {
        f(&**child)
    } else {
        None
    }
}

/// If the expression is a square-root node, calls the given transformation function with the
/// child.
pub(crate) fn do_sqrt(expr: &Expr, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Sqrt(child) = expr {
        f(&**child)
    } else {
        None
    }
}

/// If the expression is a logarithm node, calls the given transformation function with the
/// child.
pub(crate) fn do_log(expr: &Expr, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Log(child) = expr {
        f(&**child)
    } else {
        None
    }
}

/// Applies all rules.
///
/// Only one operator module can match a given node, so the order of the modules here is
/// immaterial; the specificity ordering lives inside each module's `all`.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| subtract::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| negate::all(expr, step_collector))
        .or_else(|| root::all(expr, step_collector))
        .or_else(|| logarithm::all(expr, step_collector))
}
