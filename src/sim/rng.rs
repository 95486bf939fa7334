//! Seeded randomness and Gaussian sampling
//!
//! The only random quantity in the whole game is the opponent's hit
//! offset, drawn from a normal distribution so its aim errs believably.
//! Sampling is Box-Muller over a seeded PCG stream for reproducible runs.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::SimError;

/// Build the deterministic RNG for a run from its seed
pub fn rng_from_seed(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// One sample from `N(mean, deviation^2)` via the Box-Muller transform
///
/// `u` is taken as `1 - random()`, mapping the generator's `[0, 1)` onto
/// `(0, 1]` so the logarithm stays finite.
pub fn gaussian(rng: &mut impl Rng, mean: f32, deviation: f32) -> f32 {
    let u = 1.0 - rng.random::<f32>();
    let v = rng.random::<f32>();
    let z = (-2.0 * u.ln()).sqrt() * (TAU * v).cos();
    z * deviation + mean
}

/// Checked Box-Muller for externally supplied uniforms
///
/// For callers bringing their own uniform source: `u` must lie in
/// `(0, 1]` and `v` in `[0, 1)`, otherwise the draw is rejected instead
/// of producing an infinite or NaN sample.
pub fn gaussian_from_uniforms(u: f32, v: f32, mean: f32, deviation: f32) -> Result<f32, SimError> {
    if !(u > 0.0 && u <= 1.0) {
        return Err(SimError::Domain(u));
    }
    if !(0.0..1.0).contains(&v) {
        return Err(SimError::Domain(v));
    }
    let z = (-2.0 * u.ln()).sqrt() * (TAU * v).cos();
    Ok(z * deviation + mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_uniform() {
        assert_eq!(
            gaussian_from_uniforms(0.0, 0.5, 0.0, 1.0),
            Err(SimError::Domain(0.0))
        );
        assert_eq!(
            gaussian_from_uniforms(-0.1, 0.5, 0.0, 1.0),
            Err(SimError::Domain(-0.1))
        );
        assert_eq!(
            gaussian_from_uniforms(0.5, 1.0, 0.0, 1.0),
            Err(SimError::Domain(1.0))
        );
    }

    #[test]
    fn test_accepts_full_uniform_for_u() {
        // u = 1 gives ln(1) = 0, a perfectly valid (zero-radius) draw
        let sample = gaussian_from_uniforms(1.0, 0.25, 3.0, 2.0).unwrap();
        assert!((sample - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_deviation_collapses_to_mean() {
        let mut rng = rng_from_seed(7);
        for _ in 0..100 {
            assert_eq!(gaussian(&mut rng, 5.0, 0.0), 5.0);
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let mut a = rng_from_seed(12345);
        let mut b = rng_from_seed(12345);
        for _ in 0..50 {
            assert_eq!(gaussian(&mut a, 0.0, 1.0), gaussian(&mut b, 0.0, 1.0));
        }
    }

    #[test]
    fn test_samples_center_on_mean() {
        let mut rng = rng_from_seed(42);
        let n = 10_000;
        let sum: f32 = (0..n).map(|_| gaussian(&mut rng, 10.0, 2.0)).sum();
        let average = sum / n as f32;
        // Standard error of the mean is 2 / sqrt(10000) = 0.02
        assert!(
            (average - 10.0).abs() < 0.2,
            "sample mean {average} too far from 10.0"
        );
    }

    #[test]
    fn test_samples_are_always_finite() {
        let mut rng = rng_from_seed(99);
        for _ in 0..10_000 {
            assert!(gaussian(&mut rng, 0.0, 9.0).is_finite());
        }
    }
}
