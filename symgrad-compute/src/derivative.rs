//! Symbolic differentiation of expression trees.
//!
//! Derivatives are computed by structural recursion over the tree shape, one calculus rule per
//! node kind. The raw rules produce heavily redundant trees (products with a zero factor,
//! additions of zero, exponents like `4 - 1`), so every result is routed through
//! [`simplify`] before it is returned.
//!
//! The `match` in [`derive_raw`] is exhaustive: every node shape has an explicit rule, checked at
//! compile time. [`DerivativeError`] is the contract for shapes *without* a rule. No current
//! shape needs it, but a future [`Expr`] variant the rules here do not cover must surface through
//! this error rather than silently differentiating to zero.

use crate::simplify::simplify;
use symgrad_expr::{int, Expr, Var};
use thiserror::Error;

/// Errors arising from symbolic differentiation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivativeError {
    /// The expression contains a subexpression with no differentiation rule.
    #[error("no differentiation rule applies to `{0}`")]
    Undefined(Expr),
}

/// Computes the derivative of the expression with respect to the given variable, canonicalized
/// by [`simplify`].
pub fn derivative(expr: &Expr, with: Var) -> Result<Expr, DerivativeError> {
    Ok(simplify(&derive_raw(expr, with)?))
}

/// The raw, unsimplified structural derivative.
fn derive_raw(expr: &Expr, with: Var) -> Result<Expr, DerivativeError> {
    match expr {
        Expr::Const(_) | Expr::Euler => Ok(int(0)),
        Expr::Var(var) => Ok(if *var == with { int(1) } else { int(0) }),
        // (-a)' = -(a')
        Expr::Neg(a) => Ok(-derive_raw(a, with)?),
        // sqrt(a)' = a' / (2 * sqrt(a))
        Expr::Sqrt(a) => Ok(derive_raw(a, with)? / (int(2) * (**a).clone().sqrt())),
        // log(a)' = a' / a
        Expr::Log(a) => Ok(derive_raw(a, with)? / (**a).clone()),
        // (a + b)' = a' + b'
        Expr::Add(a, b) => Ok(derive_raw(a, with)? + derive_raw(b, with)?),
        // (a - b)' = a' - b'
        Expr::Sub(a, b) => Ok(derive_raw(a, with)? - derive_raw(b, with)?),
        // (a * b)' = a' * b + a * b'
        Expr::Mul(a, b) => {
            Ok(derive_raw(a, with)? * (**b).clone() + (**a).clone() * derive_raw(b, with)?)
        },
        // (a / b)' = a' / b - (a * b') / b^2
        Expr::Div(a, b) => {
            Ok(derive_raw(a, with)? / (**b).clone()
                - ((**a).clone() * derive_raw(b, with)?) / (**b).clone().pow(int(2)))
        },
        // (a ^ b)' = b * a^(b - 1) * a' + a^b * log(a) * b'
        //
        // When `b` is a literal, `b'` is zero and the simplifier erases the whole second summand,
        // so the `log(a)` never reaches evaluation in that case.
        Expr::Exp(a, b) => {
            Ok((**b).clone() * (**a).clone().pow((**b).clone() - int(1)) * derive_raw(a, with)?
                + (**a).clone().pow((**b).clone()) * (**a).clone().log() * derive_raw(b, with)?)
        },
    }
}
