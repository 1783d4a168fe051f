use std::ops::{Add, Mul};

/// Samples a cubic Hermite spline
///
/// `p(t) = (2t³ - 3t² + 1)·p0 + (t³ - 2t² + t)·m0 + (-2t³ + 3t²)·p1 + (t³ - t²)·m1`
///
/// * `t` - interpolation parameter in `[0, 1]`
/// * `p0` - start point at `t = 0`
/// * `m0` - start tangent, already scaled by the interval length
/// * `p1` - end point at `t = 1`
/// * `m1` - end tangent, already scaled by the interval length
#[inline]
#[must_use]
pub fn hermite<T>(t: f32, p0: T, m0: T, p1: T, m1: T) -> T
where
    T: Copy + Add<T, Output = T> + Mul<f32, Output = T>,
{
    let t2 = t * t;
    let t3 = t2 * t;

    let a = 2.0 * t3 - 3.0 * t2 + 1.0;
    let b = t3 - 2.0 * t2 + t;
    let c = -2.0 * t3 + 3.0 * t2;
    let d = t3 - t2;

    p0 * a + m0 * b + p1 * c + m1 * d
}
