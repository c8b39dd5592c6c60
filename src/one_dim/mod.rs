//! One-dimensional interpolation over time-ordered samples.
//!
//! Samples are `(time, value)` knots sorted by non-decreasing time.
//! Sort order is assumed, not checked, on every evaluation path;
//! [`first_unsorted`] is available for callers who want to validate once up front.
//!
//! Queries at or beyond either end of the samples hold the boundary value
//! rather than extrapolating.

pub mod linear;
pub mod monotone;

pub use monotone::{interpolate, slopes, MonotoneCubic1D};

use core::cmp::Ordering;

use num_traits::Float;

/// A single knot: an observed `value` at `time`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<T> {
    pub time: T,
    pub value: T,
}

impl<T> Sample<T> {
    pub const fn new(time: T, value: T) -> Self {
        Self { time, value }
    }
}

impl<T> From<(T, T)> for Sample<T> {
    fn from((time, value): (T, T)) -> Self {
        Self { time, value }
    }
}

/// Extrapolation flag.
///
/// Boundary times themselves count as outside, since they
/// resolve to the boundary value either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

impl Extrap {
    /// Classify an observation time against the sampled range.
    ///
    /// Returns `None` if there are no samples.
    #[inline]
    pub fn of<T: Float>(samples: &[Sample<T>], loc: T) -> Option<Self> {
        let (first, last) = (samples.first()?, samples.last()?);

        let extrap = match loc {
            x if x <= first.time => Extrap::OutsideLow,
            x if x >= last.time => Extrap::OutsideHigh,
            _ => Extrap::Inside,
        };

        Some(extrap)
    }
}

/// Bisection search for the lower index of the interval containing `loc`,
/// such that `samples[lo].time <= loc < samples[lo + 1].time`.
///
/// Only meaningful for sorted samples and `loc` strictly inside their range
/// (see [`Extrap::of`]); other inputs return some index in `0..n - 1`
/// (or zero for fewer than two samples) without panicking.
#[inline]
pub fn bracket<T: Float>(samples: &[Sample<T>], loc: T) -> usize {
    let mut lo = 0;
    let mut hi = samples.len().saturating_sub(1);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if samples[mid].time <= loc {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Index of the first sample whose time is lower than its predecessor's,
/// or not comparable with it (NaN). `None` if the samples are sorted.
///
/// This is O(n) and is left to the caller; evaluation never checks it.
pub fn first_unsorted<T: Float>(samples: &[Sample<T>]) -> Option<usize> {
    samples
        .windows(2)
        .position(|w| {
            !matches!(
                w[0].time.partial_cmp(&w[1].time),
                Some(Ordering::Less | Ordering::Equal)
            )
        })
        .map(|i| i + 1)
}

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    /// Returns `None` when there is no data to interpolate.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, loc: T) -> Option<T>;

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// # Errors
    /// * If `locs` and `out` have different lengths
    /// * If there are no samples and `locs` is not empty
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), &'static str> {
        if locs.len() != out.len() {
            return Err("Length mismatch");
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i]).ok_or("No samples")?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, &'static str> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::{bracket, first_unsorted, Extrap, Sample};

    fn samples(times: &[f64]) -> Vec<Sample<f64>> {
        times.iter().map(|&t| Sample::new(t, 0.0)).collect()
    }

    #[test]
    fn test_extrap() {
        let s = samples(&[0.0, 1.0, 2.0]);
        assert_eq!(Extrap::of(&s, -1.0), Some(Extrap::OutsideLow));
        assert_eq!(Extrap::of(&s, 0.0), Some(Extrap::OutsideLow));
        assert_eq!(Extrap::of(&s, 0.5), Some(Extrap::Inside));
        assert_eq!(Extrap::of(&s, 2.0), Some(Extrap::OutsideHigh));
        assert_eq!(Extrap::of(&s, 3.0), Some(Extrap::OutsideHigh));
        assert_eq!(Extrap::of::<f64>(&[], 0.0), None);

        // A single sample is both ends at once; low wins
        let one = samples(&[5.0]);
        assert_eq!(Extrap::of(&one, 5.0), Some(Extrap::OutsideLow));
        assert_eq!(Extrap::of(&one, 6.0), Some(Extrap::OutsideHigh));
    }

    /// Every interior point must land in the cell whose left edge is at or below it
    #[test]
    fn test_bracket() {
        let s = samples(&[0.0, 0.5, 2.0, 2.1, 7.0, 10.0]);
        for lo in 0..s.len() - 1 {
            let (t0, t1) = (s[lo].time, s[lo + 1].time);
            for k in 0..10 {
                let loc = t0 + (t1 - t0) * (k as f64) / 10.0;
                assert_eq!(bracket(&s, loc), lo);
            }
        }
    }

    #[test]
    fn test_bracket_degenerate() {
        assert_eq!(bracket::<f64>(&[], 1.0), 0);
        assert_eq!(bracket(&samples(&[1.0]), 1.0), 0);
        assert_eq!(bracket(&samples(&[1.0, 2.0]), 1.5), 0);
        // Repeated times resolve to the nonzero-width interval
        assert_eq!(bracket(&samples(&[0.0, 1.0, 1.0, 2.0]), 1.5), 2);
    }

    #[test]
    fn test_first_unsorted() {
        assert_eq!(first_unsorted::<f64>(&[]), None);
        assert_eq!(first_unsorted(&samples(&[0.0])), None);
        assert_eq!(first_unsorted(&samples(&[0.0, 1.0, 1.0, 3.0])), None);
        assert_eq!(first_unsorted(&samples(&[0.0, 2.0, 1.0, 3.0])), Some(2));
        assert_eq!(first_unsorted(&samples(&[0.0, f64::NAN, 3.0])), Some(1));
    }

    #[test]
    fn test_sample_from_tuple() {
        let s: Sample<f32> = (1.0, 2.0).into();
        assert_eq!(s, Sample::new(1.0, 2.0));
    }
}
