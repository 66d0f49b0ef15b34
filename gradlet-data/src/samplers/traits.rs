// gradlet-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over indices into a dataset of `dataset_len` samples.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices [`Sampler::iter`] yields for `dataset_len`.
    fn len(&self, dataset_len: usize) -> usize;
}
