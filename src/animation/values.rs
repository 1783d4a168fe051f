use std::fmt::Debug;

use glam::{Quat, Vec3, Vec4};

use crate::animation::spline::hermite;

/// A keyframe value type that can be read from a flat accessor and sampled
/// on a cubic Hermite spline.
pub trait TrackValue: Copy + Debug + PartialEq {
    /// Number of `f32` components per element.
    const COMPONENTS: usize;

    /// Builds a value from exactly [`Self::COMPONENTS`] floats.
    fn from_components(components: &[f32]) -> Self;

    fn interpolate_cubic(t: f32, p0: Self, m0: Self, p1: Self, m1: Self) -> Self;

    /// Scales a tangent by the keyframe interval length.
    fn scale_tangent(self, span: f32) -> Self;
}

impl TrackValue for Vec3 {
    const COMPONENTS: usize = 3;

    fn from_components(components: &[f32]) -> Self {
        Vec3::from_slice(components)
    }

    fn interpolate_cubic(t: f32, p0: Self, m0: Self, p1: Self, m1: Self) -> Self {
        hermite(t, p0, m0, p1, m1)
    }

    fn scale_tangent(self, span: f32) -> Self {
        self * span
    }
}

impl TrackValue for Quat {
    const COMPONENTS: usize = 4;

    fn from_components(components: &[f32]) -> Self {
        Quat::from_slice(components)
    }

    /// Component-wise Hermite evaluation, renormalized: interpolated
    /// quaternions are not unit length in general.
    fn interpolate_cubic(t: f32, p0: Self, m0: Self, p1: Self, m1: Self) -> Self {
        let result = hermite(
            t,
            Vec4::from(p0),
            Vec4::from(m0),
            Vec4::from(p1),
            Vec4::from(m1),
        );
        Quat::from_vec4(result).normalize()
    }

    fn scale_tangent(self, span: f32) -> Self {
        Quat::from_vec4(Vec4::from(self) * span)
    }
}
