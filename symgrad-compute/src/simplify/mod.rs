//! The rewrite engine that canonicalizes expression trees.
//!
//! The algorithm is bottom-up and change-driven, applied node by node:
//!
//! 1. Recursively simplify every child.
//! 2. If any child changed, rebuild the node from the new children and simplify the rebuilt node
//!    from scratch. This is how changes propagate upward and expose new rule matches at the
//!    parent level.
//! 3. Once the children are at their fixpoint, match the node against the ordered rule table in
//!    [`rules`]. A matching rule's replacement is itself simplified; if no rule matches, the node
//!    is already canonical and is returned as-is.
//!
//! There is no fixed iteration count: the process runs until a whole pass produces no change.
//! Termination therefore depends on the rule set not cycling, which the table's ordering
//! guarantees for the rules shipped here (e.g. `a * n -> n * a` only fires when `a` is not itself
//! a constant). As a backstop against cycles, and against call-stack exhaustion on pathological
//! trees, the recursion is bounded by [`MAX_REWRITE_DEPTH`]; when the bound is hit the current
//! tree is returned unsimplified. Simplification has no failure mode.

pub mod rules;
pub mod step;

use crate::step_collector::StepCollector;
use step::Step;
use symgrad_expr::Expr;

/// The maximum recursion depth of the rewrite engine. Each nested child visit and each applied
/// rewrite consumes one level.
pub const MAX_REWRITE_DEPTH: usize = 1 << 10;

/// Simplifies an expression to its canonical form.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies an expression to its canonical form, reporting every applied rule to the given
/// step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    simplify_bounded(expr, 0, step_collector)
}

/// Simplifies an expression to its canonical form, returning the applied rules alongside the
/// result.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}

fn simplify_bounded(
    expr: &Expr,
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    if depth >= MAX_REWRITE_DEPTH {
        return expr.clone();
    }

    // children reach their fixpoint before the node itself is matched against the rule table
    let rebuilt = simplify_children(expr, depth, step_collector);
    if rebuilt != *expr {
        return simplify_bounded(&rebuilt, depth + 1, step_collector);
    }

    match rules::all(&rebuilt, step_collector) {
        Some(applied) => simplify_bounded(&applied, depth + 1, step_collector),
        None => rebuilt,
    }
}

fn simplify_children(
    expr: &Expr,
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    macro_rules! sub {
        ($child:expr) => {
            Box::new(simplify_bounded($child, depth + 1, step_collector))
        };
    }

    match expr {
        Expr::Const(_) | Expr::Var(_) | Expr::Euler => expr.clone(),
        Expr::Neg(child) => Expr::Neg(sub!(child)),
        Expr::Sqrt(child) => Expr::Sqrt(sub!(child)),
        Expr::Log(child) => Expr::Log(sub!(child)),
        Expr::Add(lhs, rhs) => Expr::Add(sub!(lhs), sub!(rhs)),
        Expr::Sub(lhs, rhs) => Expr::Sub(sub!(lhs), sub!(rhs)),
        Expr::Mul(lhs, rhs) => Expr::Mul(sub!(lhs), sub!(rhs)),
        Expr::Div(lhs, rhs) => Expr::Div(sub!(lhs), sub!(rhs)),
        Expr::Exp(lhs, rhs) => Expr::Exp(sub!(lhs), sub!(rhs)),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use symgrad_expr::{int, Ctxt, Eval, Expr, Var};
    use super::*;

    fn x() -> Expr {
        Expr::Var(Var::resolve("x").unwrap())
    }

    fn y() -> Expr {
        Expr::Var(Var::resolve("y").unwrap())
    }

    /// 2x + 4y, already canonical.
    fn two_x_plus_four_y() -> Expr {
        int(2) * x() + int(4) * y()
    }

    /// (2x * 2x) + x
    fn collapsible_product() -> Expr {
        (int(2) * x()) * (int(2) * x()) + x()
    }

    /// 5x^4 + 2x^3 + 6x^2 + x + (-5)
    fn polynomial() -> Expr {
        int(5) * x().pow(int(4))
            + (int(2) * x().pow(int(3))
                + (int(6) * x().pow(int(2)) + (x() + (-int(5)))))
    }

    #[test]
    fn canonical_input_is_unchanged() {
        let expr = two_x_plus_four_y();
        let simplified = simplify(&expr);
        assert_eq!(simplified, expr);
        assert_eq!(simplified.to_string(), "( ( 2 * x ) + ( 4 * y ) )");

        let mut ctxt = Ctxt::new();
        ctxt.add_var(Var::resolve("x").unwrap(), 1.0);
        ctxt.add_var(Var::resolve("y").unwrap(), 2.0);
        assert_eq!(simplified.eval(&ctxt), 10.0);
    }

    #[test]
    fn combines_products_into_powers() {
        let simplified = simplify(&collapsible_product());
        assert_eq!(simplified.to_string(), "( ( 4 * ( x ^ 2 ) ) + x )");

        let mut ctxt = Ctxt::new();
        ctxt.add_var(Var::resolve("x").unwrap(), 1.0);
        assert_eq!(simplified.eval(&ctxt), 5.0);
    }

    #[test]
    fn polynomial_value_survives() {
        let simplified = simplify(&polynomial());

        let mut ctxt = Ctxt::new();
        ctxt.add_var(Var::resolve("x").unwrap(), 1.0);
        assert_eq!(simplified.eval(&ctxt), 9.0);
    }

    #[test]
    fn idempotence() {
        for expr in [
            two_x_plus_four_y(),
            collapsible_product(),
            polynomial(),
            x() + x() + x(),
            (x() - y()) + (y() - x()),
            int(3) * (int(5) + x()),
            x().pow(int(2)).sqrt(),
            Expr::Euler.log() + int(0).log(),
        ] {
            let once = simplify(&expr);
            let twice = simplify(&once);
            assert_eq!(twice, once, "not a fixpoint for {}", expr);
        }
    }

    #[test]
    fn value_preservation() {
        // expressions that avoid the two unsound rewrites (sqrt(E^2) with negative E, log(0))
        let samples = [
            two_x_plus_four_y(),
            collapsible_product(),
            polynomial(),
            x() * x() * x(),
            (int(2) * x()) * (int(3) * y()),
            int(0) - x() + x(),
            x() / int(1) + int(0) / y(),
            (int(7) + y()) * int(1) + x() * int(0),
        ];

        let mut ctxt = Ctxt::new();
        ctxt.add_var(Var::resolve("x").unwrap(), 1.25);
        ctxt.add_var(Var::resolve("y").unwrap(), -3.0);

        for expr in samples {
            let simplified = simplify(&expr);
            assert_float_absolute_eq!(expr.eval(&ctxt), simplified.eval(&ctxt), 1e-9);
        }
    }

    #[test]
    fn reports_applied_steps() {
        let (simplified, steps) = simplify_with_steps(&(x() + x()));
        assert_eq!(simplified, int(2) * x());
        assert!(steps.contains(&Step::DoubleSelf));
    }

    #[test]
    fn simplification_does_not_grow_the_scenarios() {
        for expr in [two_x_plus_four_y(), collapsible_product(), polynomial()] {
            let simplified = simplify(&expr);
            assert!(simplified.complexity() <= expr.complexity());
        }
    }

    #[test]
    fn deep_negation_chain_collapses() {
        let mut even = x();
        let mut odd = x();
        for _ in 0..40 {
            even = -even;
            odd = -odd;
        }
        odd = -odd;

        assert_eq!(simplify(&even), x());
        assert_eq!(simplify(&odd), -x());
    }
}
