use num_traits::Float;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithm::Messages;
use crate::clustering::Clustering;
use crate::preference::Preference;
use crate::similarity;

/// Immutable configuration for one clustering run. Built up front, read once,
/// never mutated while the run is in flight.
///
/// `damping` is expected in `[0, 1)`; values outside that range are accepted
/// without validation and left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApConfig<F>
where
    F: Float,
{
    /// Total update rounds executed. There is no convergence test; every run
    /// performs exactly this many rounds.
    pub max_iterations: usize,
    /// Blend weight between a matrix's previous value and its fresh update.
    pub damping: F,
    /// Diagonal self-similarity policy.
    pub preference: Preference<F>,
    /// Perturb each similarity entry to break exact ties.
    pub random_noise: bool,
    /// Upper bound of the per-entry noise draw.
    pub noise_scale: F,
    /// Noise seed: `>= 0` is deterministic, negative draws from entropy.
    pub random_seed: i64,
}

impl<F> Default for ApConfig<F>
where
    F: Float,
{
    fn default() -> Self {
        Self {
            max_iterations: 100,
            damping: F::from(0.9).unwrap(),
            preference: Preference::Median,
            random_noise: false,
            noise_scale: F::from(1e-8).unwrap(),
            random_seed: -1,
        }
    }
}

impl<F> ApConfig<F>
where
    F: Float,
{
    pub(crate) fn rng(&self) -> Option<StdRng> {
        if !self.random_noise {
            return None;
        }
        if self.random_seed >= 0 {
            Some(StdRng::seed_from_u64(self.random_seed as u64))
        } else {
            Some(StdRng::from_entropy())
        }
    }
}

/// Affinity propagation: selects exemplars from among the items themselves by
/// exchanging responsibility/availability messages over a similarity matrix,
/// then assigns every item to its best exemplar.
///
///     use apclust::{AffinityPropagation, Clustering};
///
///     let ap = AffinityPropagation::<f64>::default();
///     let labels = ap.cluster_with(3, |i, j| (i as f64 - j as f64).abs());
///     assert_eq!(3, labels.len());
#[derive(Debug, Clone, Default)]
pub struct AffinityPropagation<F>
where
    F: Float,
{
    config: ApConfig<F>,
}

impl<F> AffinityPropagation<F>
where
    F: Float,
{
    pub fn new(config: ApConfig<F>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApConfig<F> {
        &self.config
    }
}

impl<F> Clustering<F> for AffinityPropagation<F>
where
    F: Float,
{
    fn cluster_with<D>(&self, n: usize, distance: D) -> Vec<usize>
    where
        D: Fn(usize, usize) -> F,
    {
        if n == 0 {
            return Vec::new();
        }
        let similarity = similarity::build(n, &distance, &self.config);
        let mut messages = Messages::new(similarity, self.config.damping);
        for _ in 0..self.config.max_iterations {
            messages.update();
        }
        messages.labels()
    }
}

#[cfg(test)]
mod test {
    use crate::affinity_propagation::{AffinityPropagation, ApConfig};
    use crate::clustering::Clustering;
    use crate::preference::Preference;

    #[test]
    fn default_config_matches_documented_values() {
        let config = ApConfig::<f64>::default();
        assert_eq!(100, config.max_iterations);
        assert_eq!(0.9, config.damping);
        assert_eq!(Preference::Median, config.preference);
        assert!(!config.random_noise);
        assert_eq!(1e-8, config.noise_scale);
        assert_eq!(-1, config.random_seed);
    }

    #[test]
    fn zero_items_yields_empty_labels() {
        let ap = AffinityPropagation::<f64>::default();
        let labels = ap.cluster_with(0, |_, _| 0.);
        assert!(labels.is_empty());
    }
}
