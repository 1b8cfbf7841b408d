//! Simplification rules for multiplication nodes, including coefficient normalization.
//!
//! The canonical form these rules steer toward is "constants first, folded": a product with a
//! literal factor rewrites until the literal sits on the left, where it can merge with other
//! literals.

use crate::simplify::{rules::do_multiply, step::Step};
use crate::step_collector::StepCollector;
use symgrad_expr::{int, Expr};

/// `n * m` folds into a single constant. Products that overflow `i64` are left unfolded.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        Some(int(lhs.as_int()?.checked_mul(rhs.as_int()?)?))
    })?;

    step_collector.push(Step::FoldMultiplication);
    Some(opt)
}

/// `a * 0 = 0`
/// `0 * a = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.as_int() == Some(0) || rhs.as_int() == Some(0) {
            Some(int(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `a * 1 = a`
/// `1 * a = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if rhs.as_int() == Some(1) {
            Some(lhs.clone())
        } else if lhs.as_int() == Some(1) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `(n * a) * (m * b) = (n * m) * (a * b)`
pub fn combine_coefficients(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if let (Expr::Mul(n, a), Expr::Mul(m, b)) = (lhs, rhs) {
            let coeff = n.as_int()?.checked_mul(m.as_int()?)?;
            return Some(Expr::Mul(
                Box::new(int(coeff)),
                Box::new(Expr::Mul(a.clone(), b.clone())),
            ));
        }
        None
    })?;

    step_collector.push(Step::CombineCoefficients);
    Some(opt)
}

/// `a * a = a ^ 2`
pub fn square_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs == rhs {
            Some(lhs.clone().pow(int(2)))
        } else {
            None
        }
    })?;

    step_collector.push(Step::SquareSelf);
    Some(opt)
}

/// `a * (a ^ n) = a ^ (n + 1)`
/// `(a ^ n) * a = a ^ (n + 1)`
pub fn raise_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if let Expr::Exp(base, exponent) = rhs {
            if lhs == &**base {
                let raised = exponent.as_int()?.checked_add(1)?;
                return Some(Expr::Exp(base.clone(), Box::new(int(raised))));
            }
        }
        if let Expr::Exp(base, exponent) = lhs {
            if rhs == &**base {
                let raised = exponent.as_int()?.checked_add(1)?;
                return Some(Expr::Exp(base.clone(), Box::new(int(raised))));
            }
        }
        None
    })?;

    step_collector.push(Step::RaisePower);
    Some(opt)
}

/// `a * n = n * a`
///
/// The rule requires `a` to not itself be a constant, otherwise it would swap forever.
pub fn constant_first(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if rhs.is_int() && !lhs.is_int() {
            Some(Expr::Mul(Box::new(rhs.clone()), Box::new(lhs.clone())))
        } else {
            None
        }
    })?;

    step_collector.push(Step::ConstantFirstMultiplication);
    Some(opt)
}

/// `n * (m * a) = (n * m) * a`
pub fn associate_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if let Expr::Mul(m, a) = rhs {
            let folded = lhs.as_int()?.checked_mul(m.as_int()?)?;
            return Some(Expr::Mul(Box::new(int(folded)), a.clone()));
        }
        None
    })?;

    step_collector.push(Step::AssociateMultiplication);
    Some(opt)
}

/// `n * (m + a) = (n * m) + (n * a)`
///
/// Distribution only fires when the outer factor is a literal and the inner addition already has
/// a literal on the left; anything broader would fight the combining rules.
pub fn distribute_constant(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if let Expr::Add(m, a) = rhs {
            let n = lhs.as_int()?;
            let folded = n.checked_mul(m.as_int()?)?;
            return Some(Expr::Add(
                Box::new(int(folded)),
                Box::new(Expr::Mul(Box::new(int(n)), a.clone())),
            ));
        }
        None
    })?;

    step_collector.push(Step::DistributeConstant);
    Some(opt)
}

/// Applies all multiplication rules, most specific first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| combine_coefficients(expr, step_collector))
        .or_else(|| square_self(expr, step_collector))
        .or_else(|| raise_power(expr, step_collector))
        .or_else(|| constant_first(expr, step_collector))
        .or_else(|| associate_constants(expr, step_collector))
        .or_else(|| distribute_constant(expr, step_collector))
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
        assert_eq!(simplify(&(int(3) * int(4))), int(12));
        assert_eq!(simplify(&(int(-3) * int(4))), int(-12));
    }

    #[test]
    fn zero_annihilates() {
        assert_eq!(simplify(&(x() * int(0))), int(0));
        assert_eq!(simplify(&(int(0) * x())), int(0));
    }

    #[test]
    fn one_is_identity() {
        assert_eq!(simplify(&(x() * int(1))), x());
        assert_eq!(simplify(&(int(1) * x())), x());
    }

    #[test]
    fn coefficients_merge_across_products() {
        // (2x) * (3y) = 6 * (x * y)
        let expr = (int(2) * x()) * (int(3) * y());
        assert_eq!(simplify(&expr), int(6) * (x() * y()));

        // (2x) * (2x) = 4 * x^2
        let expr = (int(2) * x()) * (int(2) * x());
        assert_eq!(simplify(&expr), int(4) * x().pow(int(2)));
    }

    #[test]
    fn squares_and_power_raising() {
        assert_eq!(simplify(&(x() * x())), x().pow(int(2)));
        assert_eq!(simplify(&(x() * x().pow(int(4)))), x().pow(int(5)));
        assert_eq!(simplify(&(x().pow(int(4)) * x())), x().pow(int(5)));
    }

    #[test]
    fn constants_move_left_and_fold() {
        assert_eq!(simplify(&(x() * int(3))), int(3) * x());
        assert_eq!(simplify(&(int(3) * (int(2) * x()))), int(6) * x());
    }

    #[test]
    fn distributes_over_constant_led_sums() {
        // 3 * (5 + x) = 15 + 3x
        let expr = int(3) * (int(5) + x());
        assert_eq!(simplify(&expr), int(15) + int(3) * x());

        // no literal inside: left alone
        let expr = int(3) * (y() + x());
        assert_eq!(simplify(&expr), expr);
    }
}
