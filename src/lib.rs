//! Monotone cubic interpolation of time series, no-std and no-alloc compatible.
//!
//! Given samples `(time, value)` sorted by time, [`one_dim::interpolate`] returns
//! the value at any query time of the Fritsch-Carlson monotone cubic spline through
//! them, as used to draw a smooth curve that never overshoots its data. It is meant
//! for "scrubbing": reading the curve under a cursor so that the reported value sits
//! exactly on the rendered line.
//!
//! * Queries at or beyond either end of the samples hold the boundary value
//! * Two samples interpolate linearly
//! * No samples give `None`
//!
//! # Performance Scalings
//!
//! | Method                          | RAM    | Cost per observation |
//! |---------------------------------|--------|----------------------|
//! | one_dim::interpolate            | O(1)   | O(n)                 |
//! | one_dim::MonotoneCubic1D        | O(n)   | O(log2(n))           |
//!
//! The stateless method sweeps tangents only as far as the containing segment.
//! The struct computes them once into caller-provided storage; prefer it when
//! evaluating many points against the same samples, e.g. once per animation frame.
//!
//! # Example
//! ```rust
//! use scrubspline::one_dim::{interpolate, Interp1D, MonotoneCubic1D, Sample};
//!
//! let samples = [
//!     Sample::new(0.0_f64, 0.0),
//!     Sample::new(10.0, 100.0),
//!     Sample::new(20.0, 120.0),
//!     Sample::new(30.0, 90.0),
//! ];
//!
//! // One observation
//! let v = interpolate(&samples, 12.5).unwrap();
//!
//! // Many observations, same result
//! let mut scratch = [0.0; 4];
//! let interpolator = MonotoneCubic1D::new(&samples, &mut scratch).unwrap();
//! assert_eq!(interpolator.eval_one(12.5), Some(v));
//!
//! let obs = [-5.0, 5.0, 15.0, 25.0, 35.0];
//! let mut out = [0.0; 5];
//! interpolator.eval(&obs, &mut out).unwrap();
//! assert_eq!(out[0], 0.0);
//! assert_eq!(out[4], 90.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod one_dim;

pub use one_dim::{interpolate, Interp1D, MonotoneCubic1D, Sample};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
