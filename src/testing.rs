use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

use crate::one_dim::Sample;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate `n` samples with non-decreasing times, including some repeated times.
///
/// With `trend` of `Some(1.0)` or `Some(-1.0)` the values are monotone in that
/// direction, with flat stretches; with `None` they are unstructured.
/// `stream` selects one of several repeatable sequences.
pub fn random_samples(n: usize, trend: Option<f64>, stream: usize) -> Vec<Sample<f64>> {
    let mut rng = rng_fixed_seed();
    // Skip ahead so each stream draws from its own stretch of the fixed sequence
    let _ = randn::<f64>(&mut rng, stream * n);
    let dt = randn::<f64>(&mut rng, n);
    let dv = randn::<f64>(&mut rng, n);

    let (mut t, mut v) = (0.0, 0.0);
    (0..n)
        .map(|i| {
            t += if dt[i] < 0.1 { 0.0 } else { dt[i] * 3.0 };
            v = match trend {
                Some(sign) => v + sign * (if dv[i] < 0.2 { 0.0 } else { dv[i] * dv[i] * 50.0 }),
                None => (dv[i] - 0.5) * 20.0,
            };
            Sample::new(t, v)
        })
        .collect()
}
