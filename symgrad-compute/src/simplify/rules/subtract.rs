//! Simplification rules for subtraction nodes.

use crate::simplify::{rules::do_subtract, step::Step};
use crate::step_collector::StepCollector;
use symgrad_expr::{int, Expr};

/// `n - m` folds into a single constant. Differences that overflow `i64` are left unfolded.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        Some(int(lhs.as_int()?.checked_sub(rhs.as_int()?)?))
    })?;

    step_collector.push(Step::FoldSubtraction);
    Some(opt)
}

/// `a - 0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        if rhs.as_int() == Some(0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0 - a = -a`
pub fn subtract_from_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        if lhs.as_int() == Some(0) {
            Some(Expr::Neg(Box::new(rhs.clone())))
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `a - a = 0`
pub fn cancel_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        if lhs == rhs {
            Some(int(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::CancelSelf);
    Some(opt)
}

/// `(-a) - a = -(2 * a)`
pub fn negative_double(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        if let Expr::Neg(inner) = lhs {
            if rhs == &**inner {
                return Some(Expr::Neg(Box::new(int(2) * rhs.clone())));
            }
        }
        None
    })?;

    step_collector.push(Step::NegativeDouble);
    Some(opt)
}

/// Applies all subtraction rules, most specific first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
        .or_else(|| subtract_from_zero(expr, step_collector))
        .or_else(|| cancel_self(expr, step_collector))
        .or_else(|| negative_double(expr, step_collector))
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
    fn folds_constants() {
        assert_eq!(simplify(&(int(3) - int(7))), int(-4));
        assert_eq!(simplify(&(int(0) - int(5))), int(-5));
    }

    #[test]
    fn zero_operands() {
        assert_eq!(simplify(&(x() - int(0))), x());
        assert_eq!(simplify(&(int(0) - x())), -x());
    }

    #[test]
    fn self_difference_cancels() {
        assert_eq!(simplify(&(x() - x())), int(0));
        let compound = int(2) * x() + int(1);
        assert_eq!(simplify(&(compound.clone() - compound)), int(0));
    }

    #[test]
    fn negated_minus_self_doubles() {
        assert_eq!(simplify(&(-x() - x())), -(int(2) * x()));
    }
}
