use std::collections::HashMap;

use num::Zero;

use super::*;
use crate::symbolic::ArithmeticError;

fn sym(name: &str) -> Expr {
    Expr::symbol(name)
}

#[test]
fn display_respects_precedence() {
    assert_eq!(((sym("a") + sym("b")) * sym("c")).to_string(), "(a + b)*c");
    assert_eq!((sym("a") / (sym("b") * sym("c"))).to_string(), "a/(b*c)");
    assert_eq!((-(sym("a") - sym("b"))).to_string(), "-(a - b)");
    assert_eq!((sym("a") - (sym("b") - sym("c"))).to_string(), "a - (b - c)");
    assert_eq!((sym("x") / Expr::from(2)).tan().to_string(), "tan(x/2)");
}

#[test]
fn display_renders_rational_constants() {
    assert_eq!(Expr::rational(1, 2).to_string(), "1/2");
    // Ratio normalizes on construction.
    assert_eq!(Expr::rational(2, 4).to_string(), "1/2");
    assert_eq!(Expr::from(-3).to_string(), "-3");
    assert_eq!((Expr::rational(1, 2) * sym("x")).to_string(), "1/2*x");
    assert_eq!((sym("x") * Expr::from(-3)).to_string(), "x*(-3)");
}

#[test]
fn structural_equality_distinguishes_spelling() {
    assert_eq!(sym("a") + sym("b"), sym("a") + sym("b"));
    assert_ne!(sym("a") + sym("b"), sym("b") + sym("a"));
}

#[test]
fn equals_is_algebraic() {
    let lhs = (sym("a") + sym("b")) * (sym("a") - sym("b"));
    let rhs = sym("a") * sym("a") - sym("b") * sym("b");

    assert!(lhs.equals(&rhs).unwrap());
    assert!((sym("a") + sym("b")).equals(&(sym("b") + sym("a"))).unwrap());
    assert!(!sym("a").equals(&sym("b")).unwrap());
}

#[test]
fn is_zero_is_structural_not_algebraic() {
    assert!(Expr::zero().is_zero());
    let vanishing = sym("a") - sym("a");
    assert!(!vanishing.is_zero());
    assert!(vanishing.equals(&Expr::zero()).unwrap());
}

#[test]
fn eval_substitutes_bindings() {
    let expr = (sym("x") + Expr::from(1)) * Expr::from(2);
    let bindings = HashMap::from([("x".to_string(), 3.0)]);

    assert_eq!(expr.eval(&bindings).unwrap(), 8.0);
}

#[test]
fn eval_computes_tangents() {
    let expr = sym("x").tan();
    let bindings = HashMap::from([("x".to_string(), std::f64::consts::FRAC_PI_4)]);

    let value = expr.eval(&bindings).unwrap();
    assert!((value - 1.0).abs() < 1e-12);
}

#[test]
fn eval_reports_unbound_symbols() {
    let expr = sym("x") + sym("y");
    let bindings = HashMap::from([("x".to_string(), 1.0)]);

    assert_eq!(
        expr.eval(&bindings),
        Err(ArithmeticError::UnboundSymbol("y".to_string()))
    );
}

#[test]
fn eval_reports_vanishing_denominators() {
    let expr = sym("x") / (sym("f") - sym("n"));
    let bindings = HashMap::from([
        ("x".to_string(), 1.0),
        ("f".to_string(), 2.0),
        ("n".to_string(), 2.0),
    ]);

    assert_eq!(expr.eval(&bindings), Err(ArithmeticError::DivisionByZero));
}
