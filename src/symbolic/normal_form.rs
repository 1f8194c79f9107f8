//! Rational-function normal form backing [`Expr::equals`].
//!
//! An expression tree flattens into a fraction of multivariate polynomials
//! over atoms (free symbols and tangent terms). Two fractions are compared
//! by cross-multiplication, `a*d == c*b`, which sidesteps polynomial gcd
//! computation entirely: the fractions never need to be reduced, only the
//! expanded products compared term by term.

use std::{cmp::Ordering, collections::BTreeMap};

use num::{BigRational, One, Zero};

use super::{error::ArithmeticError, expr::Expr};

/// An indivisible variable of the polynomial ring: a free symbol, or the
/// tangent of a normalized argument.
///
/// Two tangent terms are the same variable exactly when their arguments
/// share a normal form; no trigonometric identities are applied beyond
/// that.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Atom {
    Symbol(String),
    Tan(RatFn),
}

/// A product of atom powers, sorted by atom.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Monomial(Vec<(Atom, u32)>);

impl Monomial {
    /// The empty product, i.e. the constant term's monomial.
    fn unit() -> Self {
        Monomial(Vec::new())
    }

    fn atom(atom: Atom) -> Self {
        Monomial(vec![(atom, 1)])
    }

    fn mul(&self, other: &Monomial) -> Monomial {
        let mut lhs = self.0.as_slice();
        let mut rhs = other.0.as_slice();
        let mut product = Vec::with_capacity(lhs.len() + rhs.len());
        while let (Some((a, ea)), Some((b, eb))) = (lhs.first(), rhs.first()) {
            match a.cmp(b) {
                Ordering::Less => {
                    product.push((a.clone(), *ea));
                    lhs = &lhs[1..];
                }
                Ordering::Greater => {
                    product.push((b.clone(), *eb));
                    rhs = &rhs[1..];
                }
                Ordering::Equal => {
                    product.push((a.clone(), ea + eb));
                    lhs = &lhs[1..];
                    rhs = &rhs[1..];
                }
            }
        }
        product.extend_from_slice(lhs);
        product.extend_from_slice(rhs);
        Monomial(product)
    }
}

/// A multivariate polynomial: monomials sorted ascending, every
/// coefficient nonzero. The empty term list is the zero polynomial.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Poly(Vec<(Monomial, BigRational)>);

impl Poly {
    fn zero() -> Self {
        Poly(Vec::new())
    }

    fn one() -> Self {
        Poly::constant(BigRational::one())
    }

    fn constant(value: BigRational) -> Self {
        if value.is_zero() {
            Poly::zero()
        } else {
            Poly(vec![(Monomial::unit(), value)])
        }
    }

    fn atom(atom: Atom) -> Self {
        Poly(vec![(Monomial::atom(atom), BigRational::one())])
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn add(&self, other: &Poly) -> Poly {
        let mut lhs = self.0.as_slice();
        let mut rhs = other.0.as_slice();
        let mut sum = Vec::with_capacity(lhs.len() + rhs.len());
        while let (Some((ma, ca)), Some((mb, cb))) = (lhs.first(), rhs.first()) {
            match ma.cmp(mb) {
                Ordering::Less => {
                    sum.push((ma.clone(), ca.clone()));
                    lhs = &lhs[1..];
                }
                Ordering::Greater => {
                    sum.push((mb.clone(), cb.clone()));
                    rhs = &rhs[1..];
                }
                Ordering::Equal => {
                    let coefficient = ca + cb;
                    if !coefficient.is_zero() {
                        sum.push((ma.clone(), coefficient));
                    }
                    lhs = &lhs[1..];
                    rhs = &rhs[1..];
                }
            }
        }
        sum.extend_from_slice(lhs);
        sum.extend_from_slice(rhs);
        Poly(sum)
    }

    fn neg(&self) -> Poly {
        Poly(
            self.0
                .iter()
                .map(|(monomial, coefficient)| (monomial.clone(), -coefficient.clone()))
                .collect(),
        )
    }

    fn sub(&self, other: &Poly) -> Poly {
        self.add(&other.neg())
    }

    fn mul(&self, other: &Poly) -> Poly {
        let mut terms: BTreeMap<Monomial, BigRational> = BTreeMap::new();
        for (ma, ca) in &self.0 {
            for (mb, cb) in &other.0 {
                let entry = terms
                    .entry(ma.mul(mb))
                    .or_insert_with(BigRational::zero);
                *entry += ca * cb;
            }
        }
        Poly(
            terms
                .into_iter()
                .filter(|(_, coefficient)| !coefficient.is_zero())
                .collect(),
        )
    }

    fn scale(&self, factor: &BigRational) -> Poly {
        Poly(
            self.0
                .iter()
                .map(|(monomial, coefficient)| (monomial.clone(), coefficient * factor))
                .collect(),
        )
    }
}

/// A fraction of polynomials with a canonically scaled denominator.
///
/// Zero is always `0 / 1`, and a nonzero fraction's denominator has a
/// leading coefficient of one. The representation is canonical up to
/// common polynomial factors, which [`RatFn::equivalent`] never needs
/// cancelled.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RatFn {
    num: Poly,
    den: Poly,
}

impl RatFn {
    fn new(num: Poly, den: Poly) -> Result<RatFn, ArithmeticError> {
        if den.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if num.is_zero() {
            return Ok(RatFn {
                num: Poly::zero(),
                den: Poly::one(),
            });
        }
        let leading = den.0[0].1.clone();
        let scale = BigRational::one() / leading;
        Ok(RatFn {
            num: num.scale(&scale),
            den: den.scale(&scale),
        })
    }

    /// Flatten an expression tree into a single fraction.
    pub(crate) fn normalize(expr: &Expr) -> Result<RatFn, ArithmeticError> {
        match expr {
            Expr::Rational(value) => RatFn::new(Poly::constant(value.clone()), Poly::one()),
            Expr::Symbol(name) => {
                RatFn::new(Poly::atom(Atom::Symbol(name.clone())), Poly::one())
            }
            Expr::Add(lhs, rhs) => {
                let lhs = RatFn::normalize(lhs)?;
                let rhs = RatFn::normalize(rhs)?;
                RatFn::new(
                    lhs.num.mul(&rhs.den).add(&rhs.num.mul(&lhs.den)),
                    lhs.den.mul(&rhs.den),
                )
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = RatFn::normalize(lhs)?;
                let rhs = RatFn::normalize(rhs)?;
                RatFn::new(
                    lhs.num.mul(&rhs.den).sub(&rhs.num.mul(&lhs.den)),
                    lhs.den.mul(&rhs.den),
                )
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = RatFn::normalize(lhs)?;
                let rhs = RatFn::normalize(rhs)?;
                RatFn::new(lhs.num.mul(&rhs.num), lhs.den.mul(&rhs.den))
            }
            Expr::Div(lhs, rhs) => {
                let lhs = RatFn::normalize(lhs)?;
                let rhs = RatFn::normalize(rhs)?;
                RatFn::new(lhs.num.mul(&rhs.den), lhs.den.mul(&rhs.num))
            }
            Expr::Neg(inner) => {
                let inner = RatFn::normalize(inner)?;
                RatFn::new(inner.num.neg(), inner.den)
            }
            Expr::Tan(argument) => {
                let argument = RatFn::normalize(argument)?;
                RatFn::new(Poly::atom(Atom::Tan(argument)), Poly::one())
            }
        }
    }

    /// Fraction equality by cross-multiplication.
    pub(crate) fn equivalent(&self, other: &RatFn) -> bool {
        self.num.mul(&other.den) == other.num.mul(&self.den)
    }
}

#[cfg(test)]
#[path = "normal_form_tests.rs"]
mod tests;
