pub mod supervised_dataset;
pub mod traits;
pub mod vec_dataset;

pub use supervised_dataset::SupervisedDataset;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
