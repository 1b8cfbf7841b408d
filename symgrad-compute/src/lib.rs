//! Algebraic manipulation of expression trees.
//!
//! # Simplification
//!
//! The primary use case for this crate is reducing expressions to a canonical form with the
//! [`simplify()`] function. Simplification is a term-rewriting process: a table of rules is
//! matched against every node, bottom-up, until no rule produces a change anywhere in the tree
//! (a fixpoint).
//!
//! Each rule is simply a function that accepts an expression and returns `Option<Expr>`: if the
//! rule's pattern matches, the rewritten expression is returned, otherwise `None`. The rules for
//! each operator live in [`simplify::rules`] and are tried in a fixed order, most specific
//! pattern first, so overlapping patterns resolve deterministically. The canonical form this
//! produces pushes folded constants to the left (`x * 3` becomes `3 * x`, `3 + (5 + x)` becomes
//! `8 + x`) and combines like terms and factors (`x + x` becomes `2 * x`, `x * x` becomes
//! `x ^ 2`).
//!
//! ```
//! use symgrad_compute::simplify;
//! use symgrad_expr::{int, Expr, Var};
//!
//! let x = Expr::from(Var::resolve("x").unwrap());
//!
//! // (2x * 2x) + x = 4x^2 + x
//! let expr = (int(2) * x.clone()) * (int(2) * x.clone()) + x.clone();
//! assert_eq!(simplify(&expr).to_string(), "( ( 4 * ( x ^ 2 ) ) + x )");
//! ```
//!
//! Callers interested in *which* rules fired can use [`simplify_with_steps`], or pass their own
//! [`StepCollector`] to [`simplify_with`].
//!
//! A handful of rules are deliberate approximations rather than theorems: `sqrt(E ^ 2)` rewrites
//! to `E` (the principal branch, wrong when `E` is negative) and `log( 0 )` rewrites to `0`.
//! They are kept because the canonical forms they produce are part of this crate's observable
//! behavior; see the rule modules for details.
//!
//! # Differentiation
//!
//! [`derivative()`] computes the symbolic derivative of an expression with respect to one
//! registered variable, by structural recursion over the tree. The raw derivative of even a small
//! expression is noisy (products with zero factors, additions of zero), so the result is always
//! routed through [`simplify()`] before being returned.
//!
//! ```
//! use symgrad_compute::derivative;
//! use symgrad_expr::{int, Expr, Var};
//!
//! let x = Var::resolve("x").unwrap();
//!
//! // d/dx x^3 = 3x^2
//! let expr = Expr::from(x).pow(int(3));
//! assert_eq!(derivative(&expr, x).unwrap().to_string(), "( 3 * ( x ^ 2 ) )");
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, DerivativeError};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
