//! Simplification rules for square-root nodes.

use crate::simplify::{rules::do_sqrt, step::Step};
use crate::step_collector::StepCollector;
use symgrad_expr::{int, Expr};

/// `sqrt( 0 ) = 0`, `sqrt( 1 ) = 1`, `sqrt( 4 ) = 2`, `sqrt( 9 ) = 3`, `sqrt( 16 ) = 4`,
/// `sqrt( 25 ) = 5`
///
/// Only these small perfect squares fold; there is no general integer root extraction.
pub fn perfect_square(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sqrt(expr, |child| {
        let root = match child.as_int()? {
            0 => 0,
            1 => 1,
            4 => 2,
            9 => 3,
            16 => 4,
            25 => 5,
            _ => return None,
        };
        Some(int(root))
    })?;

    step_collector.push(Step::PerfectSquare);
    Some(opt)
}

/// `sqrt(a ^ 2) = a`
///
/// Always the principal branch: for negative `a` the result has the wrong sign.
pub fn root_of_square(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sqrt(expr, |child| {
        if let Expr::Exp(base, exponent) = child {
            if exponent.as_int() == Some(2) {
                return Some((**base).clone());
            }
        }
        None
    })?;

    step_collector.push(Step::RootOfSquare);
    Some(opt)
}

/// Applies all square-root rules, most specific first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    perfect_square(expr, step_collector)
        .or_else(|| root_of_square(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::simplify::simplify;
    use pretty_assertions::assert_eq;
    use symgrad_expr::Var;
    use super::*;

    fn x() -> Expr {
        Expr::Var(Var::resolve("x").unwrap())
    }

    #[test]
    fn perfect_squares_fold() {
        for (square, root) in [(0, 0), (1, 1), (4, 2), (9, 3), (16, 4), (25, 5)] {
            assert_eq!(simplify(&int(square).sqrt()), int(root));
        }
    }

    #[test]
    fn other_radicands_stay_symbolic() {
        let expr = int(2).sqrt();
        assert_eq!(simplify(&expr), expr);

        // 36 is a perfect square, but not one in the fold table
        let expr = int(36).sqrt();
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn root_of_square_takes_principal_branch() {
        assert_eq!(simplify(&x().pow(int(2)).sqrt()), x());
    }
}
