use crate::error::GradletError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// A single tanh unit: `tanh(b + Σ wᵢ·xᵢ)`.
///
/// Weights are labeled `w0, w1, ...` and the bias `b`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights, all parameters drawn from
    /// `Uniform(-1, 1)` using the thread-local RNG.
    pub fn new(n_inputs: usize) -> Self {
        Self::with_rng(n_inputs, &mut rand::thread_rng())
    }

    /// Like [`Neuron::new`] with an explicit RNG, for reproducible networks.
    pub fn with_rng<R: Rng + ?Sized>(n_inputs: usize, rng: &mut R) -> Self {
        let dist = Uniform::new_inclusive(-1.0, 1.0);
        let weights = (0..n_inputs)
            .map(|i| Parameter::new(dist.sample(rng), format!("w{}", i)))
            .collect();
        let bias = Parameter::new(dist.sample(rng), "b");
        Neuron { weights, bias }
    }

    /// Creates a neuron with fixed parameters.
    pub fn from_values(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Parameter::new(w, format!("w{}", i)))
                .collect(),
            bias: Parameter::new(bias, "b"),
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Builds `tanh(b + w0·x0 + w1·x1 + ...)` in the graph and returns the output node.
    ///
    /// # Errors
    /// `ArityMismatch` if `inputs.len() != self.n_inputs()`.
    pub fn call(&self, inputs: &[Value]) -> Result<Value, GradletError> {
        if inputs.len() != self.weights.len() {
            return Err(GradletError::ArityMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::call".to_string(),
            });
        }
        let activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.as_value().clone(), |acc, (w, x)| {
                &acc + &(w.as_value() * x)
            });
        Ok(activation.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
        Ok(vec![self.call(input)?])
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights
            .iter()
            .chain(std::iter::once(&self.bias))
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or_default().to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
