// gradlet-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A sampler that randomly samples indices from a dataset.
///
/// Without replacement it yields a random permutation (truncated to
/// `num_samples`); with replacement it draws `num_samples` independent
/// indices. A seeded sampler replays the same order on every `iter` call.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
        }
    }

    /// Draws from a `StdRng` seeded with `seed` instead of the thread RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn sample_indices<R: Rng + ?Sized>(&self, dataset_len: usize, rng: &mut R) -> Vec<usize> {
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);
        if self.replacement {
            (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect()
        } else {
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(rng);
            indices.truncate(actual_num_samples);
            indices
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if self.len(dataset_len) == 0 {
            if !self.replacement && self.num_samples.map_or(false, |n| n > dataset_len) {
                log::warn!(
                    "RandomSampler: num_samples ({:?}) > dataset_len ({}) without replacement. Returning empty iterator.",
                    self.num_samples,
                    dataset_len
                );
            }
            return Box::new(std::iter::empty());
        }

        let indices = match self.seed {
            Some(seed) => self.sample_indices(dataset_len, &mut StdRng::seed_from_u64(seed)),
            None => self.sample_indices(dataset_len, &mut rand::thread_rng()),
        };
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        let requested = self.num_samples.unwrap_or(dataset_len);
        if dataset_len == 0 || (!self.replacement && requested > dataset_len) {
            0
        } else {
            requested
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
