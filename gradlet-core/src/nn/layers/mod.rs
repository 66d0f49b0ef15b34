// src/nn/layers/mod.rs
// Fully connected building blocks: a single neuron and a layer of neurons.

pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use neuron::Neuron;
