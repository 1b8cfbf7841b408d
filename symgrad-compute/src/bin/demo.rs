//! Walks through the engine's surface: build a tree, simplify it, evaluate it, differentiate it.

use symgrad_compute::{derivative, simplify};
use symgrad_expr::{int, var, Ctxt, Eval, Expr, Var};

fn main() {
    var::init(["x", "y", "z"]).expect("registry is initialized exactly once, at startup");

    let x = Var::resolve("x").unwrap();
    let y = Var::resolve("y").unwrap();
    let z = Var::resolve("z").unwrap();

    let mut ctxt = Ctxt::new();
    ctxt.add_var(x, 1.0);
    ctxt.add_var(y, 2.0);
    ctxt.add_var(z, 3.0);

    println!(
        "x = {}, y = {}, z = {}",
        ctxt.get_var(x),
        ctxt.get_var(y),
        ctxt.get_var(z),
    );
    println!("---");

    // an expression that is already canonical: 2x + 4y
    let expr = int(2) * Expr::from(x) + int(4) * Expr::from(y);
    let simplified = simplify(&expr);
    println!("Input:      {}", expr);
    println!("Simplified: {}", simplified);
    println!("Evaluated:  {}", simplified.eval(&ctxt));
    println!("---");

    // a product that collapses: 2x * 2x + x
    let expr = (int(2) * Expr::from(x)) * (int(2) * Expr::from(x)) + Expr::from(x);
    let simplified = simplify(&expr);
    println!("Input:      {}", expr);
    println!("Simplified: {}", simplified);
    println!("Evaluated:  {}", simplified.eval(&ctxt));
    println!("---");

    // a polynomial and its derivative: 5x^4 + 2x^3 + 6x^2 + x - 5
    let expr = int(5) * Expr::from(x).pow(int(4))
        + (int(2) * Expr::from(x).pow(int(3))
            + (int(6) * Expr::from(x).pow(int(2)) + (Expr::from(x) + (-int(5)))));
    let simplified = simplify(&expr);
    let deriv = derivative(&simplified, x).expect("every node shape here has a derivative rule");
    println!("Input:      {}", expr);
    println!("Simplified: {}", simplified);
    println!("Evaluated:  {}", simplified.eval(&ctxt));
    println!("Derivative: {}", deriv);
    println!("Evaluated:  {}", deriv.eval(&ctxt));
    println!("---");
}
