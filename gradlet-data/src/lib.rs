//! Datasets, samplers and a batching data loader for training `gradlet` models.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, SupervisedDataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
