//! Closed-form 4x4 projection matrices, derived over exact symbolic scalars.
//!
//! The builders in [`projection`] map a viewing frustum in the canonical
//! left-handed view space onto any normalized-device-coordinate volume the
//! caller describes with [`NdcBounds`] - differing handedness, depth range,
//! or vertical axis direction all fall out of the same closed forms by
//! substitution. Building the matrices over [`Expr`] keeps every entry an
//! exact expression, so reference identities can be checked algebraically
//! instead of within an epsilon.

pub mod bounds;
pub mod logging;
pub mod projection;
pub mod scalar;
pub mod symbolic;

pub use self::{
    bounds::{FrustumBounds, FrustumFovBounds, NdcBounds},
    projection::{orthographic, perspective, perspective_fov},
    scalar::Scalar,
    symbolic::{matrices_equal, ArithmeticError, Expr},
};
