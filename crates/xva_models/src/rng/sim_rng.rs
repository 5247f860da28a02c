//! Seeded PRNG wrapper for simulation draws.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo random number generator.
///
/// Wraps a seeded `StdRng` and exposes the standard normal surface used
/// by the path simulator. The same seed always produces the same sequence
/// of variates, which is what makes simulated exposures reproducible.
///
/// # Examples
///
/// ```
/// use xva_models::rng::SimRng;
///
/// let mut rng1 = SimRng::from_seed(3141);
/// let mut rng2 = SimRng::from_seed(3141);
/// assert_eq!(rng1.next_normal(), rng2.next_normal());
/// ```
pub struct SimRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (retained for logging).
    seed: u64,
}

impl SimRng {
    /// Creates a new generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate.
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn next_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller and
    /// reused between time steps.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimRng::from_seed(42);
        let mut b = SimRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_normal(), b.next_normal());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SimRng::from_seed(1);
        let mut b = SimRng::from_seed(2);
        let draws_a: Vec<f64> = (0..10).map(|_| a.next_normal()).collect();
        let draws_b: Vec<f64> = (0..10).map(|_| b.next_normal()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_fill_matches_single_draws() {
        let mut a = SimRng::from_seed(7);
        let mut b = SimRng::from_seed(7);
        let mut buffer = vec![0.0; 50];
        a.fill_normal(&mut buffer);
        for &v in &buffer {
            assert_eq!(v, b.next_normal());
        }
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(SimRng::from_seed(123).seed(), 123);
    }

    #[test]
    fn test_sample_moments_are_plausible() {
        let mut rng = SimRng::from_seed(2024);
        let n = 100_000;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n {
            let z = rng.next_normal();
            sum += z;
            sum_sq += z * z;
        }
        let mean = sum / n as f64;
        let var = sum_sq / n as f64 - mean * mean;
        // 5 standard errors of slack
        assert!(mean.abs() < 5.0 / (n as f64).sqrt());
        assert!((var - 1.0).abs() < 0.05);
    }
}
