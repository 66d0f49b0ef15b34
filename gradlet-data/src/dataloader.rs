// dataloader.rs
//! # DataLoader
//!
//! Groups dataset samples into batches in the order chosen by a [`Sampler`].
//!
//! ```rust
//! use gradlet_data::dataloader::DataLoader;
//! use gradlet_data::datasets::VecDataset;
//! use gradlet_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None);
//! let batches: Vec<Vec<i32>> = loader.map(|b| b.unwrap()).collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use gradlet_core::GradletError;

/// Custom collation applied to every batch before it is yielded.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, GradletError>
        + Send
        + Sync,
>;

/// Batching iterator over a dataset.
///
/// Each call to `next` pulls up to `batch_size` indices from the sampler and
/// fetches the corresponding items. The final batch may be short unless
/// `drop_last` is set. Once exhausted, call [`DataLoader::reset`] to start a
/// new epoch.
pub struct DataLoader<D: Dataset, S: Sampler> {
    pub dataset: D,
    pub batch_size: usize,
    pub sampler: S,
    /// Skip the final batch when it is smaller than `batch_size`.
    pub drop_last: bool,
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader. A `batch_size` of zero yields no batches;
    /// use [`DataLoader::try_new`] to reject it instead.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }

    /// # Errors
    /// `InvalidArgument` if `batch_size` is zero.
    pub fn try_new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Result<Self, GradletError> {
        if batch_size == 0 {
            return Err(GradletError::InvalidArgument(
                "DataLoader batch_size must be at least 1".to_string(),
            ));
        }
        Ok(Self::new(dataset, batch_size, sampler, drop_last, collate_fn))
    }

    /// Creates a DataLoader whose batches are the plain `Vec` of items.
    pub fn with_default_collate(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Self {
        Self::new(dataset, batch_size, sampler, drop_last, None)
    }

    /// Restarts iteration with fresh indices from the sampler.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    /// Number of batches a full epoch yields.
    pub fn num_batches(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            (samples + self.batch_size - 1) / self.batch_size
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, GradletError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            if let Some(idx) = self.indices_iter.next() {
                match self.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                }
            } else {
                break;
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        log::trace!("DataLoader: yielding batch of {} items", batch.len());
        if let Some(ref collate_fn) = self.collate_fn {
            Some(collate_fn(batch))
        } else {
            Some(Ok(batch))
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
