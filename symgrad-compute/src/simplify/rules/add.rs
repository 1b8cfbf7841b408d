//! Simplification rules for addition nodes, including combining like terms.

use crate::simplify::{rules::do_add, step::Step};
use crate::step_collector::StepCollector;
use symgrad_expr::{int, Expr};

/// `n + m` folds into a single constant. Sums that overflow `i64` are left unfolded.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        Some(int(lhs.as_int()?.checked_add(rhs.as_int()?)?))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FoldAddition);
    Some(opt)
}

/// `a + 0 = a`
/// `0 + a = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if rhs.as_int() == Some(0) {
            Some(lhs.clone())
        } else if lhs.as_int() == Some(0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `(a - b) + (b - a) = 0`
pub fn opposite_difference(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if let (Expr::Sub(a, b), Expr::Sub(c, d)) = (lhs, rhs) {
            if a == d && b == c {
                return Some(int(0));
            }
        }
        None
    })?;

    step_collector.push(Step::OppositeDifference);
    Some(opt)
}

/// `(n * a) + (m * a) = (n + m) * a`
///
/// The non-constant factor must be structurally identical on both sides; this rule never reasons
/// about semantic equivalence.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if let (Expr::Mul(n, a), Expr::Mul(m, b)) = (lhs, rhs) {
            if a == b {
                let coeff = n.as_int()?.checked_add(m.as_int()?)?;
                return Some(Expr::Mul(Box::new(int(coeff)), a.clone()));
            }
        }
        None
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// `a + (-a) = 0`
pub fn cancel_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if let Expr::Neg(inner) = rhs {
            if lhs == &**inner {
                return Some(int(0));
            }
        }
        None
    })?;

    step_collector.push(Step::CancelNegation);
    Some(opt)
}

/// `a + a = 2 * a`
pub fn double_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if lhs == rhs {
            Some(int(2) * lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DoubleSelf);
    Some(opt)
}

/// `a + (-b) = a - b`
pub fn negation_to_subtraction(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if let Expr::Neg(b) = rhs {
            Some(Expr::Sub(Box::new(lhs.clone()), b.clone()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::NegationToSubtraction);
    Some(opt)
}

/// `a + n = n + a`
///
/// Folded constants accumulate on the left, where [`associate_constants`] can reach them. The
/// rule requires `a` to not itself be a constant, otherwise it would swap forever.
pub fn constant_first(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if rhs.is_int() && !lhs.is_int() {
            Some(Expr::Add(Box::new(rhs.clone()), Box::new(lhs.clone())))
        } else {
            None
        }
    })?;

    step_collector.push(Step::ConstantFirstAddition);
    Some(opt)
}

/// `n + (m + a) = (n + m) + a`
pub fn associate_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if let Expr::Add(m, a) = rhs {
            let folded = lhs.as_int()?.checked_add(m.as_int()?)?;
            return Some(Expr::Add(Box::new(int(folded)), a.clone()));
        }
        None
    })?;

    step_collector.push(Step::AssociateAddition);
    Some(opt)
}

/// Applies all addition rules, most specific first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| opposite_difference(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
        .or_else(|| cancel_negation(expr, step_collector))
        .or_else(|| double_self(expr, step_collector))
        .or_else(|| negation_to_subtraction(expr, step_collector))
        .or_else(|| constant_first(expr, step_collector))
        .or_else(|| associate_constants(expr, step_collector))
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

    fn y() -> Expr {
        Expr::Var(Var::resolve("y").unwrap())
    }

    #[test]
    fn folds_constants() {
        assert_eq!(simplify(&(int(3) + int(4))), int(7));
        assert_eq!(simplify(&(int(0) + int(0))), int(0));
    }

    #[test]
    fn drops_zero_terms() {
        assert_eq!(simplify(&(x() + int(0))), x());
        assert_eq!(simplify(&(int(0) + x())), x());
    }

    #[test]
    fn combines_like_terms() {
        // 2x + 3x = 5x
        let expr = int(2) * x() + int(3) * x();
        assert_eq!(simplify(&expr), int(5) * x());

        // same coefficient on both sides
        let expr = int(2) * x() + int(2) * x();
        assert_eq!(simplify(&expr), int(4) * x());

        // different factors stay apart
        let expr = int(2) * x() + int(3) * y();
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn opposite_differences_cancel() {
        let expr = (x() - y()) + (y() - x());
        assert_eq!(simplify(&expr), int(0));
    }

    #[test]
    fn doubling_and_cancelling() {
        assert_eq!(simplify(&(x() + x())), int(2) * x());
        assert_eq!(simplify(&(x() + -x())), int(0));
    }

    #[test]
    fn negated_operand_becomes_subtraction() {
        let expr = x() + -y();
        assert_eq!(simplify(&expr), x() - y());
    }

    #[test]
    fn constants_move_left_and_fold() {
        assert_eq!(simplify(&(x() + int(3))), int(3) + x());
        assert_eq!(simplify(&(int(3) + (int(5) + x()))), int(8) + x());
    }
}
