use std::fmt;

/// The shape of a viewing frustum, given by the placement of its six
/// clipping planes.
///
/// Each field is the distance from the view-space origin to the named
/// plane, measured along the matching axis: `left` along the negative
/// x-axis, `right` along the positive x-axis, `bottom` along the negative
/// y-axis, `top` along the positive y-axis, and `near`/`far` along the
/// positive z-axis (depth points into the viewing volume).
///
/// The builders assume `left`, `right`, `bottom`, `top` are positive and
/// `far > near > 0`. Nothing here checks that: malformed bounds pass
/// through uninterpreted and surface as division-by-zero or a degenerate
/// matrix downstream.
#[derive(Clone, Debug, PartialEq)]
pub struct FrustumBounds<S> {
    pub left: S,
    pub right: S,
    pub bottom: S,
    pub top: S,
    pub near: S,
    pub far: S,
}

impl<S> FrustumBounds<S> {
    pub fn new(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }
}

/// The shape of a symmetric viewing frustum, given by aspect ratio and
/// vertical field of view.
///
/// Describes the same volume as a [`FrustumBounds`] with
/// `left = right = aspect_ratio * near * tan(vfov / 2)` and
/// `bottom = top = near * tan(vfov / 2)`.
///
/// The builders assume `aspect_ratio > 0`, `0 < vfov < pi`, and
/// `far > near > 0`; none of that is validated.
#[derive(Clone, Debug, PartialEq)]
pub struct FrustumFovBounds<S> {
    pub aspect_ratio: S,
    pub vfov: S,
    pub near: S,
    pub far: S,
}

impl<S> FrustumFovBounds<S> {
    pub fn new(aspect_ratio: S, vfov: S, near: S, far: S) -> Self {
        Self {
            aspect_ratio,
            vfov,
            near,
            far,
        }
    }
}

/// The extent of the target canonical view volume along each output axis.
///
/// There is no ordering requirement between a min and its max: putting the
/// larger value first flips the axis, which is how callers encode e.g. the
/// OpenGL `[-1, 1]` vs Vulkan `[0, 1]` depth-range difference or an
/// inverted vertical axis.
#[derive(Clone, Debug, PartialEq)]
pub struct NdcBounds<S> {
    pub horizontal_min: S,
    pub horizontal_max: S,
    pub vertical_min: S,
    pub vertical_max: S,
    pub depth_min: S,
    pub depth_max: S,
}

impl<S> NdcBounds<S> {
    pub fn new(
        horizontal_min: S,
        horizontal_max: S,
        vertical_min: S,
        vertical_max: S,
        depth_min: S,
        depth_max: S,
    ) -> Self {
        Self {
            horizontal_min,
            horizontal_max,
            vertical_min,
            vertical_max,
            depth_min,
            depth_max,
        }
    }
}

impl<S: fmt::Display> fmt::Display for NdcBounds<S> {
    /// Renders the bounds as an interval product for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}] x [{}, {}]",
            self.horizontal_min,
            self.horizontal_max,
            self.vertical_min,
            self.vertical_max,
            self.depth_min,
            self.depth_max,
        )
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
