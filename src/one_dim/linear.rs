//! Special case of two-sample interpolation.
//!
//! With only two knots the monotone cubic degenerates to a straight line,
//! so a renderer draws a plain line segment there. This is the formula
//! that reproduces it.

use num_traits::Float;

use super::Sample;

/// Straight-line interpolation between two samples.
///
/// Returns the left value when both samples share a time.
/// Does not clamp; callers handle the boundaries.
#[inline]
pub fn lerp<T: Float>(s0: Sample<T>, s1: Sample<T>, loc: T) -> T {
    let dt = s1.time - s0.time;
    if dt == T::zero() {
        return s0.value;
    }

    let t = (loc - s0.time) / dt;
    s0.value + (s1.value - s0.value) * t
}
