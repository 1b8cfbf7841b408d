//! Immutable algebraic expression trees.
//!
//! # Expression representation
//!
//! Algebraic expressions are represented as a tree of [`Expr`] nodes: integer constants,
//! references into the process-wide [variable registry](var), Euler's number, and the unary and
//! binary operators of elementary algebra. Every node owns its children; a tree is built once by
//! composing constructors (or the [`std::ops`] implementations on [`Expr`]) and is never mutated
//! afterwards. Transformations that "change" a tree, such as the simplifier and differentiator in
//! `symgrad-compute`, always build and return a fresh tree.
//!
//! ```
//! use symgrad_expr::{int, Expr, Var};
//!
//! let x = Var::resolve("x").unwrap();
//!
//! // 2x + 4
//! let expr = int(2) * Expr::from(x) + int(4);
//! assert_eq!(expr.to_string(), "( ( 2 * x ) + 4 )");
//! ```
//!
//! # Structural equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural** (syntactic) equality: two
//! trees are equal iff they have the same node kind at the root, identical payloads for leaves,
//! and pairwise structurally equal children. Structural equality is not mathematical
//! equivalence: `x + x` and `2 * x` denote the same value but are *not* equal. This is
//! deliberate: structural equality never reports false positives, is cheap to compute, and does
//! not itself depend on simplification, which makes it usable as the fixpoint test *inside* the
//! simplifier.
//!
//! # Evaluation
//!
//! Numerical evaluation lives in the [`Eval`] trait and follows IEEE-754 double-precision
//! semantics throughout: dividing by zero, taking the logarithm of a non-positive number, or the
//! square root of a negative number produce infinities and `NaN`s rather than errors. A [`Ctxt`]
//! supplies a value for every registered variable.

pub mod ctxt;
pub mod eval;
pub mod expr;
mod fmt;
pub mod var;

pub use ctxt::Ctxt;
pub use eval::Eval;
pub use expr::{int, Expr};
pub use var::Var;
