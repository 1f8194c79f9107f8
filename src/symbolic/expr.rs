use std::{
    collections::HashMap,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num::{BigRational, One, Signed, ToPrimitive, Zero};

use super::{error::ArithmeticError, normal_form::RatFn};
use crate::scalar::Scalar;

/// An exact scalar expression: rational constants, free symbols, field
/// arithmetic, and the tangent function.
///
/// Expressions are plain trees; nothing is rewritten on construction, so
/// building the same formula twice yields structurally equal values (`==`
/// is structural). Algebraic questions go through [`Expr::equals`], and
/// numeric substitution through [`Expr::eval`].
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// An exact rational constant.
    Rational(BigRational),
    /// A free symbol, identified by name.
    Symbol(String),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Tan(Box<Expr>),
}

impl Expr {
    /// A free symbol with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    /// The exact rational constant `num / den`.
    ///
    /// Panics if `den` is zero; a literal zero denominator is a programming
    /// error, unlike a symbolic denominator that happens to vanish.
    pub fn rational(num: i64, den: i64) -> Self {
        Expr::Rational(BigRational::new(num.into(), den.into()))
    }

    /// Tangent of `self`, with `self` in radians.
    pub fn tan(self) -> Self {
        Expr::Tan(Box::new(self))
    }

    /// Exact algebraic equality.
    ///
    /// Both sides are brought to a rational-function normal form and the
    /// two fractions are compared by cross-multiplication, so equality is
    /// independent of how the expressions are spelled:
    /// `(a*n)/(2*n)` equals `a/2`.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] if either side
    /// divides by an expression that is identically zero.
    pub fn equals(&self, other: &Expr) -> Result<bool, ArithmeticError> {
        let lhs = RatFn::normalize(self)?;
        let rhs = RatFn::normalize(other)?;
        Ok(lhs.equivalent(&rhs))
    }

    /// Substitute a floating-point value for every symbol and evaluate.
    ///
    /// Fails if a symbol has no binding or a denominator evaluates to
    /// exactly zero.
    pub fn eval(&self, bindings: &HashMap<String, f64>) -> Result<f64, ArithmeticError> {
        match self {
            Expr::Rational(value) => Ok(value.to_f64().unwrap_or(f64::NAN)),
            Expr::Symbol(name) => bindings
                .get(name)
                .copied()
                .ok_or_else(|| ArithmeticError::UnboundSymbol(name.clone())),
            Expr::Add(lhs, rhs) => Ok(lhs.eval(bindings)? + rhs.eval(bindings)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.eval(bindings)? - rhs.eval(bindings)?),
            Expr::Mul(lhs, rhs) => Ok(lhs.eval(bindings)? * rhs.eval(bindings)?),
            Expr::Div(lhs, rhs) => {
                let denominator = rhs.eval(bindings)?;
                if denominator == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                Ok(lhs.eval(bindings)? / denominator)
            }
            Expr::Neg(inner) => Ok(-inner.eval(bindings)?),
            Expr::Tan(inner) => Ok(inner.eval(bindings)?.tan()),
        }
    }

    /// Operator precedence for display. Higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Rational(value) => {
                if value.is_negative() {
                    1
                } else if value.is_integer() {
                    3
                } else {
                    2
                }
            }
            Expr::Symbol(_) | Expr::Tan(_) => 3,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Add(..) | Expr::Sub(..) | Expr::Neg(_) => 1,
        }
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "(")?;
            self.fmt_at(f, 0)?;
            return write!(f, ")");
        }
        match self {
            Expr::Rational(value) => write!(f, "{}", value),
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::Add(lhs, rhs) => {
                lhs.fmt_at(f, 1)?;
                write!(f, " + ")?;
                rhs.fmt_at(f, 1)
            }
            Expr::Sub(lhs, rhs) => {
                lhs.fmt_at(f, 1)?;
                write!(f, " - ")?;
                rhs.fmt_at(f, 2)
            }
            Expr::Mul(lhs, rhs) => {
                lhs.fmt_at(f, 2)?;
                write!(f, "*")?;
                rhs.fmt_at(f, 2)
            }
            Expr::Div(lhs, rhs) => {
                lhs.fmt_at(f, 2)?;
                write!(f, "/")?;
                rhs.fmt_at(f, 3)
            }
            Expr::Neg(inner) => {
                write!(f, "-")?;
                inner.fmt_at(f, 2)
            }
            Expr::Tan(inner) => {
                write!(f, "tan(")?;
                inner.fmt_at(f, 0)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Rational(BigRational::from_integer(value.into()))
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

// The assign forms exist so nalgebra can take symbolic matrix products,
// which verification workflows use to compose change-of-orientation
// matrices around a derived projection.

impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Expr) {
        *self = self.clone() + rhs;
    }
}

impl SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Expr) {
        *self = self.clone() - rhs;
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Expr) {
        *self = self.clone() * rhs;
    }
}

impl DivAssign for Expr {
    fn div_assign(&mut self, rhs: Expr) {
        *self = self.clone() / rhs;
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Expr::Rational(BigRational::zero())
    }

    /// Structural: only the literal constant zero is zero. An expression
    /// that merely reduces to zero is not (use [`Expr::equals`] for that).
    fn is_zero(&self) -> bool {
        matches!(self, Expr::Rational(value) if value.is_zero())
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::Rational(BigRational::one())
    }
}

impl Scalar for Expr {
    fn tan(self) -> Self {
        Expr::Tan(Box::new(self))
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
