//! The three projection-matrix builders.
//!
//! Every builder works in the same pair of canonical frames. The
//! **canonical view space** is left-handed and orthonormal: the positive
//! x-axis points right, the positive y-axis points up, and the positive
//! z-axis (depth) points into the viewing volume. The **canonical view
//! volume** shares that frame, with extents given by the [`NdcBounds`]
//! argument.
//!
//! The builders are pure: they read their arguments, allocate the result,
//! and touch nothing else, so call sites never need coordination.

use {log::trace, nalgebra::Matrix4};

use crate::{
    bounds::{FrustumBounds, FrustumFovBounds, NdcBounds},
    scalar::Scalar,
};

/// Build the perspective projection matrix for a frustum given by plane
/// placements.
///
/// The result is the unique projective transform that carries the six
/// frustum planes onto the faces of the target view volume under the
/// perspective divide, with depth mapped in inverse-z so that
/// `near -> depth_min` and `far -> depth_max` after the divide. The clip
/// w-component of a transformed point equals its view-space depth; NDC is
/// recovered by dividing the first three rows by the fourth.
///
/// The mappings are:
///
///   - `[-left, right]` -> `[horizontal_min, horizontal_max]`
///   - `[-bottom, top]` -> `[vertical_min, vertical_max]`
///   - `[near, far]` -> `[depth_min, depth_max]`
///
/// Degenerate bounds (`right + left`, `top + bottom`, or `far - near`
/// equal to zero) are not checked; the division by zero surfaces however
/// the scalar type surfaces it.
pub fn perspective<S: Scalar>(
    frustum_bounds: &FrustumBounds<S>,
    ndc_bounds: &NdcBounds<S>,
) -> Matrix4<S> {
    trace!("deriving perspective projection onto {}", ndc_bounds);

    let width = frustum_bounds.right.clone() + frustum_bounds.left.clone();
    let height = frustum_bounds.top.clone() + frustum_bounds.bottom.clone();
    let depth = frustum_bounds.far.clone() - frustum_bounds.near.clone();

    let mh = (ndc_bounds.horizontal_max.clone() - ndc_bounds.horizontal_min.clone())
        * frustum_bounds.near.clone()
        / width.clone();
    let bh = (ndc_bounds.horizontal_min.clone() * frustum_bounds.right.clone()
        + ndc_bounds.horizontal_max.clone() * frustum_bounds.left.clone())
        / width;
    let mv = (ndc_bounds.vertical_max.clone() - ndc_bounds.vertical_min.clone())
        * frustum_bounds.near.clone()
        / height.clone();
    let bv = (ndc_bounds.vertical_min.clone() * frustum_bounds.top.clone()
        + ndc_bounds.vertical_max.clone() * frustum_bounds.bottom.clone())
        / height;
    let mz = (ndc_bounds.depth_max.clone() * frustum_bounds.far.clone()
        - ndc_bounds.depth_min.clone() * frustum_bounds.near.clone())
        / depth.clone();
    let bz = -((ndc_bounds.depth_max.clone() - ndc_bounds.depth_min.clone())
        * frustum_bounds.far.clone()
        * frustum_bounds.near.clone())
        / depth;

    let o = S::zero();
    Matrix4::new(
        mh,
        o.clone(),
        bh,
        o.clone(),
        o.clone(),
        mv,
        bv,
        o.clone(),
        o.clone(),
        o.clone(),
        mz,
        bz,
        o.clone(),
        o.clone(),
        S::one(),
        o,
    )
}

/// Build the perspective projection matrix for a symmetric frustum given
/// by aspect ratio and vertical field of view.
///
/// This is [`perspective`] specialized to
/// `left = right = aspect_ratio * near * tan(vfov / 2)` and
/// `bottom = top = near * tan(vfov / 2)`, with the shared `near` factor
/// cancelled. The simplified closed form is built directly rather than by
/// delegating to [`perspective`], so the entries mention only the symbols
/// the field-of-view parametrization actually has.
///
/// Off-center frustums cannot be expressed here; use [`perspective`].
/// `vfov == 0` makes `tan(vfov / 2)` vanish and is not checked.
pub fn perspective_fov<S: Scalar>(
    frustum_fov_bounds: &FrustumFovBounds<S>,
    ndc_bounds: &NdcBounds<S>,
) -> Matrix4<S> {
    trace!(
        "deriving perspective projection (field-of-view form) onto {}",
        ndc_bounds
    );

    let tan_half_vfov = (frustum_fov_bounds.vfov.clone() / S::two()).tan();
    let depth = frustum_fov_bounds.far.clone() - frustum_fov_bounds.near.clone();

    let mh = (ndc_bounds.horizontal_max.clone() - ndc_bounds.horizontal_min.clone())
        / (S::two() * frustum_fov_bounds.aspect_ratio.clone() * tan_half_vfov.clone());
    let bh = (ndc_bounds.horizontal_max.clone() + ndc_bounds.horizontal_min.clone()) / S::two();
    let mv = (ndc_bounds.vertical_max.clone() - ndc_bounds.vertical_min.clone())
        / (S::two() * tan_half_vfov);
    let bv = (ndc_bounds.vertical_max.clone() + ndc_bounds.vertical_min.clone()) / S::two();
    let mz = (ndc_bounds.depth_max.clone() * frustum_fov_bounds.far.clone()
        - ndc_bounds.depth_min.clone() * frustum_fov_bounds.near.clone())
        / depth.clone();
    let bz = -((ndc_bounds.depth_max.clone() - ndc_bounds.depth_min.clone())
        * frustum_fov_bounds.far.clone()
        * frustum_fov_bounds.near.clone())
        / depth;

    let o = S::zero();
    Matrix4::new(
        mh,
        o.clone(),
        bh,
        o.clone(),
        o.clone(),
        mv,
        bv,
        o.clone(),
        o.clone(),
        o.clone(),
        mz,
        bz,
        o.clone(),
        o.clone(),
        S::one(),
        o,
    )
}

/// Build the orthographic projection matrix for a frustum given by plane
/// placements.
///
/// A parallel projection: the box bounded by the six planes maps linearly
/// onto the target view volume, independent of depth, and the homogeneous
/// w-component stays one.
///
/// The mappings are:
///
///   - `[-left, right]` -> `[horizontal_min, horizontal_max]`
///   - `[-bottom, top]` -> `[vertical_min, vertical_max]`
///   - `[near, far]` -> `[depth_min, depth_max]`
///
/// Degenerate bounds propagate exactly as in [`perspective`].
pub fn orthographic<S: Scalar>(
    frustum_bounds: &FrustumBounds<S>,
    ndc_bounds: &NdcBounds<S>,
) -> Matrix4<S> {
    trace!("deriving orthographic projection onto {}", ndc_bounds);

    let width = frustum_bounds.right.clone() + frustum_bounds.left.clone();
    let height = frustum_bounds.top.clone() + frustum_bounds.bottom.clone();
    let depth = frustum_bounds.far.clone() - frustum_bounds.near.clone();

    let mh = (ndc_bounds.horizontal_max.clone() - ndc_bounds.horizontal_min.clone())
        / width.clone();
    let bh = (ndc_bounds.horizontal_min.clone() * frustum_bounds.right.clone()
        + ndc_bounds.horizontal_max.clone() * frustum_bounds.left.clone())
        / width;
    let mv = (ndc_bounds.vertical_max.clone() - ndc_bounds.vertical_min.clone())
        / height.clone();
    let bv = (ndc_bounds.vertical_min.clone() * frustum_bounds.top.clone()
        + ndc_bounds.vertical_max.clone() * frustum_bounds.bottom.clone())
        / height;
    let mz = (ndc_bounds.depth_max.clone() - ndc_bounds.depth_min.clone()) / depth.clone();
    let bz = (ndc_bounds.depth_min.clone() * frustum_bounds.far.clone()
        - ndc_bounds.depth_max.clone() * frustum_bounds.near.clone())
        / depth;

    let o = S::zero();
    Matrix4::new(
        mh,
        o.clone(),
        o.clone(),
        bh,
        o.clone(),
        mv,
        o.clone(),
        bv,
        o.clone(),
        o.clone(),
        mz,
        bz,
        o.clone(),
        o.clone(),
        o.clone(),
        S::one(),
    )
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
