// gradlet-core/src/optim/mod.rs

//! Optimizers for training networks built from `Value`s.
//!
//! An optimizer owns shared handles to parameter leaves and rewrites their
//! `value` from the gradients left by the last backward pass.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
