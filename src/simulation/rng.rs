//! Seeded random stream for scenario simulation.
//!
//! Every simulation call draws from its own [`ScenarioRng`] passed in by the
//! caller.  There is no process-wide generator, so concurrent simulations
//! never observe each other's draws and the same seed always replays the
//! same shocks.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;

/// Documented seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Reproducible random stream for drawing price shocks.
///
/// # Examples
///
/// ```rust
/// use hedge_lib::simulation::ScenarioRng;
/// use rand_distr::StandardNormal;
///
/// let mut a = ScenarioRng::from_seed(7);
/// let mut b = ScenarioRng::from_seed(7);
/// assert_eq!(a.sample(&StandardNormal), b.sample(&StandardNormal));
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRng {
    inner: StdRng,
    seed: u64,
}

impl ScenarioRng {
    /// Stream initialised from `seed`; identical seeds yield identical draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the stream was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<D: Distribution<f64>>(&mut self, dist: &D) -> f64 {
        dist.sample(&mut self.inner)
    }

    /// Append `n` draws from `dist` to `out`.
    pub fn extend_from<D: Distribution<f64>>(&mut self, dist: &D, n: usize, out: &mut Vec<f64>) {
        out.extend(dist.sample_iter(&mut self.inner).take(n));
    }
}

impl Default for ScenarioRng {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_distr::StandardNormal;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = ScenarioRng::from_seed(12345);
        let mut b = ScenarioRng::from_seed(12345);
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        a.extend_from(&StandardNormal, 100, &mut xs);
        b.extend_from(&StandardNormal, 100, &mut ys);
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = ScenarioRng::from_seed(1);
        let mut b = ScenarioRng::from_seed(2);
        assert_ne!(a.sample(&StandardNormal), b.sample(&StandardNormal));
    }

    #[test]
    fn test_default_uses_documented_seed() {
        assert_eq!(ScenarioRng::default().seed(), DEFAULT_SEED);
    }
}
