use std::{
    fmt,
    ops::{Div, Neg, Sub},
};

use num::{One, Zero};

/// The full arithmetic contract between the projection builders and the
/// scalar type they are built over.
///
/// A scalar must support field arithmetic, the additive and multiplicative
/// identities, and the tangent function; it must also be storable in a
/// [`nalgebra::Matrix4`] and printable for diagnostics. Nothing else is
/// required, so the builders work equally over floating-point values and
/// over exact symbolic expressions ([`crate::symbolic::Expr`]).
pub trait Scalar:
    nalgebra::Scalar
    + fmt::Display
    + Zero
    + One
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The constant two, shared by the field-of-view closed forms.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tangent of `self`, with `self` in radians.
    fn tan(self) -> Self;
}

impl Scalar for f32 {
    fn tan(self) -> Self {
        f32::tan(self)
    }
}

impl Scalar for f64 {
    fn tan(self) -> Self {
        f64::tan(self)
    }
}
