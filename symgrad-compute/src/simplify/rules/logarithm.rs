//! Simplification rules for natural-logarithm nodes.

use crate::simplify::{rules::do_log, step::Step};
use crate::step_collector::StepCollector;
use symgrad_expr::{int, Expr};

/// `log( e ) = 1`
pub fn log_of_euler(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_log(expr, |child| {
        if child == &Expr::Euler {
            Some(int(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::LogOfEuler);
    Some(opt)
}

/// `log( 0 ) = 0`
///
/// Not a theorem (the logarithm is undefined at zero). The rewrite is part of this engine's
/// canonical forms regardless, and it takes precedence over evaluation: a `log( 0 )` node only
/// evaluates to `-inf` if it survives to the evaluator unsimplified.
pub fn log_of_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_log(expr, |child| {
        if child.as_int() == Some(0) {
            Some(int(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::LogOfZero);
    Some(opt)
}

/// `log(a ^ n) = n * log( a )`
pub fn log_of_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_log(expr, |child| {
        if let Expr::Exp(base, exponent) = child {
            if exponent.is_int() {
                return Some(Expr::Mul(
                    exponent.clone(),
                    Box::new(Expr::Log(base.clone())),
                ));
            }
        }
        None
    })?;

    step_collector.push(Step::LogOfPower);
    Some(opt)
}

/// Applies all logarithm rules, most specific first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    log_of_euler(expr, step_collector)
        .or_else(|| log_of_zero(expr, step_collector))
        .or_else(|| log_of_power(expr, step_collector))
}
