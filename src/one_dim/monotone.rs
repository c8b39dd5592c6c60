//! Fritsch-Carlson monotone cubic Hermite interpolation.
//!
//! Tangents start from the average of neighboring secants, flattened
//! wherever the data changes direction or plateaus, and are then scaled
//! down interval by interval until `alpha^2 + beta^2 <= 9`. That bound is
//! sufficient for each cubic segment to stay within the trend of its two
//! knots, so monotone data produces a monotone curve with no overshoot.
//!
//! A renderer drawing the same curve should take its tangents from
//! [`slopes`] and evaluate segments with [`hermite`]; values returned here
//! then lie exactly on the drawn path.
//!
//! ```rust
//! use scrubspline::one_dim::{interpolate, Sample};
//!
//! let samples = [
//!     Sample::new(0.0_f64, 0.0),
//!     Sample::new(1.0, 1.0),
//!     Sample::new(2.0, 1.0),
//!     Sample::new(3.0, 0.0),
//! ];
//!
//! // Clamped at the ends
//! assert_eq!(interpolate(&samples, -1.0), Some(0.0));
//! assert_eq!(interpolate(&samples, 9.0), Some(0.0));
//!
//! // The plateau stays flat
//! assert_eq!(interpolate(&samples, 1.5), Some(1.0));
//!
//! // No data, no value
//! assert_eq!(interpolate::<f64>(&[], 1.5), None);
//! ```
//!
//! References
//! * Fritsch, F. N. and Carlson, R. E., "Monotone Piecewise Cubic Interpolation",
//!   SIAM J. Numer. Anal. 17(2), 1980
//! * https://en.wikipedia.org/wiki/Monotone_cubic_interpolation
use core::cmp::Ordering;

use num_traits::Float;

use super::{bracket, linear, Extrap, Interp1D, Sample};

/// Evaluate monotone cubic interpolation at one observation time,
/// holding the boundary value outside the sampled range.
///
/// Two samples interpolate linearly. Three or more use the full monotone
/// cubic; tangents are swept left to right only as far as the segment
/// containing `loc`, so no storage is allocated.
///
/// Returns `None` only if `samples` is empty.
#[inline]
pub fn interpolate<T: Float>(samples: &[Sample<T>], loc: T) -> Option<T> {
    if let Some(v) = held(samples, loc)? {
        return Some(v);
    }

    if let [s0, s1] = samples {
        return Some(linear::lerp(*s0, *s1, loc));
    }

    let lo = bracket(samples, loc);
    let mut sweep = Sweep::new(samples);
    let m0 = sweep.nth(lo)?;
    let m1 = sweep.next()?;

    Some(hermite(samples[lo], samples[lo + 1], m0, m1, loc))
}

/// Evaluate at each of `locs`, allocating for both the tangents and the output.
///
/// # Errors
/// * If there are no samples and `locs` is not empty
#[cfg(feature = "std")]
pub fn interpolate_alloc<T: Float>(
    samples: &[Sample<T>],
    locs: &[T],
) -> Result<Vec<T>, &'static str> {
    let mut scratch = vec![T::zero(); samples.len()];
    MonotoneCubic1D::new(samples, &mut scratch)?.eval_alloc(locs)
}

/// Write the final monotone tangent at each sample into `out`.
///
/// One sample gets a zero tangent; two samples both get their secant slope.
///
/// # Errors
/// * If `out` is not the same length as `samples`
pub fn slopes<T: Float>(samples: &[Sample<T>], out: &mut [T]) -> Result<(), &'static str> {
    if out.len() != samples.len() {
        return Err("Length mismatch");
    }

    out.iter_mut().zip(Sweep::new(samples)).for_each(|(m, s)| *m = s);

    Ok(())
}

/// Final monotone tangent at each sample, allocating for the output.
#[cfg(feature = "std")]
pub fn slopes_alloc<T: Float>(samples: &[Sample<T>]) -> Vec<T> {
    Sweep::new(samples).collect()
}

/// Evaluate the cubic Hermite segment from `s0` to `s1`
/// with tangents `m0` and `m1` at its ends.
///
/// Uses the four standard basis polynomials on the normalized coordinate
/// `t = (loc - s0.time) / (s1.time - s0.time)`, so `t = 0` and `t = 1`
/// return the knot values exactly. A zero-width segment returns `s0.value`.
#[inline]
pub fn hermite<T: Float>(s0: Sample<T>, s1: Sample<T>, m0: T, m1: T, loc: T) -> T {
    let h = s1.time - s0.time;
    if h == T::zero() {
        return s0.value;
    }

    // Construct some constants using generic methods
    let one = T::one();
    let two = one + one;
    let three = two + one;

    let t = (loc - s0.time) / h;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = two * t3 - three * t2 + one;
    let h10 = t3 - two * t2 + t;
    let h01 = -two * t3 + three * t2;
    let h11 = t3 - t2;

    h00 * s0.value + h10 * h * m0 + h01 * s1.value + h11 * h * m1
}

/// Monotone cubic interpolator with tangents computed once up front,
/// for evaluating many observation points against the same samples
/// at O(log n) each.
///
/// Results are bit-identical to [`interpolate`].
///
/// ```rust
/// use scrubspline::one_dim::{Interp1D, MonotoneCubic1D, Sample};
///
/// let samples = [Sample::new(0.0_f64, 1.0), Sample::new(1.0, 2.0), Sample::new(3.0, 4.0)];
/// let mut scratch = [0.0; 3];
/// let interpolator = MonotoneCubic1D::new(&samples, &mut scratch).unwrap();
///
/// let mut out = [0.0; 2];
/// interpolator.eval(&[0.5, 2.0], &mut out).unwrap();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonotoneCubic1D<'a, T: Float> {
    samples: &'a [Sample<T>],
    slopes: &'a [T],
}

impl<'a, T: Float> MonotoneCubic1D<'a, T> {
    /// Build a new interpolator, storing tangents in `scratch`.
    ///
    /// # Errors
    /// * If `scratch` is not the same length as `samples`
    pub fn new(samples: &'a [Sample<T>], scratch: &'a mut [T]) -> Result<Self, &'static str> {
        slopes(samples, scratch)?;
        Ok(Self {
            samples,
            slopes: scratch,
        })
    }

    /// Tangent at each sample, as shared with a renderer.
    pub fn slopes(&self) -> &'a [T] {
        self.slopes
    }

    /// Samples the tangents were computed from.
    pub fn samples(&self) -> &'a [Sample<T>] {
        self.samples
    }
}

impl<T: Float> Interp1D<T> for MonotoneCubic1D<'_, T> {
    #[inline]
    fn eval_one(&self, loc: T) -> Option<T> {
        let samples = self.samples;
        if let Some(v) = held(samples, loc)? {
            return Some(v);
        }

        if let [s0, s1] = samples {
            return Some(linear::lerp(*s0, *s1, loc));
        }

        let lo = bracket(samples, loc);
        let (m0, m1) = (self.slopes[lo], self.slopes[lo + 1]);

        Some(hermite(samples[lo], samples[lo + 1], m0, m1, loc))
    }
}

/// Boundary value for observations at or outside the sampled range.
///
/// `None` if there are no samples, `Some(None)` if `loc` is inside.
#[inline]
fn held<T: Float>(samples: &[Sample<T>], loc: T) -> Option<Option<T>> {
    let v = match Extrap::of(samples, loc)? {
        Extrap::OutsideLow => Some(samples[0].value),
        Extrap::OutsideHigh => Some(samples[samples.len() - 1].value),
        Extrap::Inside => None,
    };

    Some(v)
}

/// Slope of the secant between two samples.
/// Zero-width intervals get a zero slope.
#[inline]
fn secant<T: Float>(s0: &Sample<T>, s1: &Sample<T>) -> T {
    let h = s1.time - s0.time;
    if h == T::zero() {
        T::zero()
    } else {
        (s1.value - s0.value) / h
    }
}

/// Initial tangent at an interior sample from the secants on either side.
/// Flat wherever the data turns or plateaus.
#[inline]
fn initial_slope<T: Float>(delta_prev: T, delta_next: T) -> T {
    if delta_prev * delta_next <= T::zero() {
        T::zero()
    } else {
        (delta_prev + delta_next) / (T::one() + T::one())
    }
}

/// Fritsch-Carlson constraint on a single interval with secant `delta`,
/// returning the adjusted `(left, right)` tangents.
#[inline]
fn constrain<T: Float>(delta: T, m0: T, m1: T) -> (T, T) {
    if delta == T::zero() {
        return (T::zero(), T::zero());
    }

    let three = T::one() + T::one() + T::one();
    let nine = three * three;

    let alpha = m0 / delta;
    let beta = m1 / delta;
    let s2 = alpha * alpha + beta * beta;
    if s2 > nine {
        let s = three / s2.sqrt();
        (s * alpha * delta, s * beta * delta)
    } else {
        (m0, m1)
    }
}

/// Left-to-right sweep over the intervals, yielding the final tangent
/// at each sample in order.
///
/// Interval `i` only ever writes tangents `i` and `i + 1`, and the
/// intervals are constrained in increasing order with the later write
/// winning. So tangent `i` is final once interval `i` has been processed,
/// while tangent `i + 1` carries forward into interval `i + 1`.
struct Sweep<'a, T> {
    samples: &'a [Sample<T>],
    /// Index of the next tangent to yield
    i: usize,
    /// Secant of interval `i`
    delta: T,
    /// Tangent at sample `i` as left by interval `i - 1`
    m: T,
}

impl<'a, T: Float> Sweep<'a, T> {
    fn new(samples: &'a [Sample<T>]) -> Self {
        let delta = match samples {
            [s0, s1, ..] => secant(s0, s1),
            _ => T::zero(),
        };

        Self {
            samples,
            i: 0,
            delta,
            m: delta,
        }
    }
}

impl<T: Float> Iterator for Sweep<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let n = self.samples.len();
        match (self.i + 1).cmp(&n) {
            Ordering::Greater => None,
            // Last sample; nothing further to its right
            Ordering::Equal => {
                self.i += 1;
                Some(self.m)
            }
            Ordering::Less => {
                let i = self.i;
                let delta_next = (i + 2 < n)
                    .then(|| secant(&self.samples[i + 1], &self.samples[i + 2]));
                let m_next = match delta_next {
                    Some(d) => initial_slope(self.delta, d),
                    None => self.delta,
                };

                let (m, m_next) = constrain(self.delta, self.m, m_next);

                self.m = m_next;
                if let Some(d) = delta_next {
                    self.delta = d;
                }
                self.i += 1;

                Some(m)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.len().saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}
