//! Simplification rules for power nodes.

use crate::simplify::{rules::do_power, step::Step};
use crate::step_collector::StepCollector;
use symgrad_expr::{int, Expr};

/// Integer exponentiation by repeated multiplication. Negative exponents and overflowing results
/// are not folded.
fn pow_int(base: i64, exponent: i64) -> Option<i64> {
    if exponent < 0 {
        return None;
    }
    match base {
        0 => Some(if exponent == 0 { 1 } else { 0 }),
        1 => Some(1),
        -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => {
            let mut result = 1i64;
            for _ in 0..exponent {
                result = result.checked_mul(base)?;
            }
            Some(result)
        },
    }
}

/// `n ^ m` folds into a single constant, for non-negative `m`.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        Some(int(pow_int(lhs.as_int()?, rhs.as_int()?)?))
    })?;

    step_collector.push(Step::FoldPower);
    Some(opt)
}

/// `a ^ 0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_lhs, rhs| {
        if rhs.as_int() == Some(0) {
            Some(int(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a ^ 1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if rhs.as_int() == Some(1) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all power rules, most specific first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
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
    fn folds_constant_powers() {
        assert_eq!(simplify(&int(2).pow(int(10))), int(1024));
        assert_eq!(simplify(&int(-3).pow(int(3))), int(-27));
        assert_eq!(simplify(&int(0).pow(int(0))), int(1));
    }

    #[test]
    fn negative_exponents_stay_symbolic() {
        let expr = int(2).pow(int(-1));
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn trivial_exponents() {
        assert_eq!(simplify(&x().pow(int(0))), int(1));
        assert_eq!(simplify(&x().pow(int(1))), x());
    }
}
