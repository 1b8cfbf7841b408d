//! Simplification rules for division nodes.
//!
//! There is deliberately no constant folding here: integer division is not closed over the
//! constants this engine supports, so `3 / 2` stays a division node and only takes a value at
//! evaluation time.

use crate::simplify::{rules::do_divide, step::Step};
use crate::step_collector::StepCollector;
use symgrad_expr::{int, Expr};

/// `a / 1 = a`
pub fn divide_by_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, rhs| {
        if rhs.as_int() == Some(1) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideByOne);
    Some(opt)
}

/// `0 / a = 0`
pub fn zero_numerator(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, _rhs| {
        if lhs.as_int() == Some(0) {
            Some(int(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::ZeroNumerator);
    Some(opt)
}

/// Applies all division rules, most specific first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_by_one(expr, step_collector)
        .or_else(|| zero_numerator(expr, step_collector))
}
