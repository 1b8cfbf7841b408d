//! Simplification rules for negation nodes.

use crate::simplify::{rules::do_negate, step::Step};
use crate::step_collector::StepCollector;
use symgrad_expr::{int, Expr};

/// `-n` folds into a single constant.
pub fn fold_constant(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negate(expr, |child| {
        Some(int(child.as_int()?.checked_neg()?))
    })?;

    step_collector.push(Step::FoldNegation);
    Some(opt)
}

/// `-(-a) = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negate(expr, |child| {
        if let Expr::Neg(inner) = child {
            Some((**inner).clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// `-(n * a) = (-n) * a`
pub fn negate_coefficient(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negate(expr, |child| {
        if let Expr::Mul(n, a) = child {
            let negated = n.as_int()?.checked_neg()?;
            return Some(Expr::Mul(Box::new(int(negated)), a.clone()));
        }
        None
    })?;

    step_collector.push(Step::NegateCoefficient);
    Some(opt)
}

/// Applies all negation rules, most specific first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constant(expr, step_collector)
        .or_else(|| double_negation(expr, step_collector))
        .or_else(|| negate_coefficient(expr, step_collector))
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
    fn folds_negated_constants() {
        assert_eq!(simplify(&-int(5)), int(-5));
        assert_eq!(simplify(&-int(-5)), int(5));
    }

    #[test]
    fn double_negation_cancels() {
        assert_eq!(simplify(&-(-x())), x());
    }

    #[test]
    fn negation_moves_into_coefficients() {
        assert_eq!(simplify(&-(int(3) * x())), int(-3) * x());
    }
}
