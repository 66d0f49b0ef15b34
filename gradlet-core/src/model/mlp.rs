use crate::error::GradletError;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: fully connected tanh layers applied in sequence.
///
/// Built from a size list `[n_in, h1, ..., n_out]`; layer `i` maps `sizes[i]`
/// inputs to `sizes[i + 1]` outputs and is named `dense{i+1}`.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// # Errors
    /// `InvalidArchitecture` when fewer than two sizes are given or a size is zero.
    pub fn new(sizes: &[usize]) -> Result<Self, GradletError> {
        Self::with_rng(sizes, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Self, GradletError> {
        if sizes.len() < 2 {
            return Err(GradletError::InvalidArchitecture(format!(
                "an MLP needs an input size and at least one layer size, got {:?}",
                sizes
            )));
        }
        if sizes.contains(&0) {
            return Err(GradletError::InvalidArchitecture(format!(
                "layer sizes must be positive, got {:?}",
                sizes
            )));
        }
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::with_rng(pair[0], pair[1], rng))
            .collect();
        Self::from_layers(layers)
    }

    /// Chains existing layers. Layers still carrying the default `"dense"`
    /// name are renamed `dense{i+1}` after their position.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `layers` is empty or a layer's input count does
    /// not match the previous layer's output count.
    pub fn from_layers(mut layers: Vec<Layer>) -> Result<Self, GradletError> {
        if layers.is_empty() {
            return Err(GradletError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].n_outputs() != pair[1].n_inputs() {
                return Err(GradletError::InvalidArchitecture(format!(
                    "layer {} outputs {} values but layer {} takes {}",
                    i,
                    pair[0].n_outputs(),
                    i + 1,
                    pair[1].n_inputs()
                )));
            }
        }
        for (i, layer) in layers.iter_mut().enumerate() {
            if layer.name() == "dense" {
                layer.set_name(format!("dense{}", i + 1));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_inputs)
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }

    /// `[n_in, h1, ..., n_out]`, the list the network was built from.
    pub fn sizes(&self) -> Vec<usize> {
        std::iter::once(self.n_inputs())
            .chain(self.layers.iter().map(Layer::n_outputs))
            .collect()
    }

    /// Folds `inputs` through every layer.
    ///
    /// # Errors
    /// `ArityMismatch` if `inputs.len() != self.n_inputs()`.
    pub fn call(&self, inputs: &[Value]) -> Result<Vec<Value>, GradletError> {
        if inputs.len() != self.n_inputs() {
            return Err(GradletError::ArityMismatch {
                expected: self.n_inputs(),
                actual: inputs.len(),
                operation: "Mlp::call".to_string(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.call(&current)?;
        }
        Ok(current)
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
        self.call(input)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for layer in &self.layers {
            for (param_name, param) in layer.named_parameters() {
                params.push((format!("{}.{}", layer.name(), param_name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
