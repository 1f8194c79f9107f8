//! A minimal exact-algebra engine for verifying projection matrices.
//!
//! The builders only need scalars with `+ - * /` and `tan`; consumers that
//! want to verify a derived matrix against a reference additionally need an
//! exact equality predicate. There is no maintained, permissively-licensed
//! computer-algebra crate to lean on for that, so this module carries the
//! smallest engine that covers the contract: expression trees over exact
//! rationals ([`Expr`]), algebraic equality by rational-function
//! normalization ([`Expr::equals`]), and numeric substitution
//! ([`Expr::eval`]). There is no general simplifier and no trigonometric
//! rewriting; `tan` terms are opaque beyond equality of their arguments.

mod error;
mod expr;
mod normal_form;

use nalgebra::Matrix4;

pub use self::{error::ArithmeticError, expr::Expr};

/// Exact algebraic equality of two symbolic matrices, entry by entry.
///
/// This is the verification predicate: two matrices are equal when every
/// pair of entries is algebraically equal, regardless of how the
/// expressions are written.
pub fn matrices_equal(
    lhs: &Matrix4<Expr>,
    rhs: &Matrix4<Expr>,
) -> Result<bool, ArithmeticError> {
    for (a, b) in lhs.iter().zip(rhs.iter()) {
        if !a.equals(b)? {
            return Ok(false);
        }
    }
    Ok(true)
}
