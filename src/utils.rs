//! Convenience methods for building observation grids, e.g. one
//! scrub position per pixel column across the sampled time range.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// Returns an empty grid for `n == 0` and just `start` for `n == 1`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let dx: T = (stop - start) / T::from(n - 1).unwrap_or_else(T::nan);
            (0..n)
                .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
                .collect()
        }
    }
}
