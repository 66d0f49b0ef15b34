use crate::error::GradletError;
use crate::nn::layers::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `n_outputs` independent neurons sharing one input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
    name: String,
}

impl Layer {
    /// Creates a layer of `n_outputs` randomly initialized neurons, each taking
    /// `n_inputs` inputs. The layer is named `"dense"`.
    pub fn new(n_inputs: usize, n_outputs: usize) -> Self {
        Self::with_rng(n_inputs, n_outputs, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(n_inputs: usize, n_outputs: usize, rng: &mut R) -> Self {
        Layer {
            neurons: (0..n_outputs)
                .map(|_| Neuron::with_rng(n_inputs, rng))
                .collect(),
            n_inputs,
            name: "dense".to_string(),
        }
    }

    /// Assembles a layer from existing neurons.
    ///
    /// # Errors
    /// `InvalidArchitecture` when `neurons` is empty or the neurons disagree on
    /// their input count.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, GradletError> {
        let n_inputs = match neurons.first() {
            Some(n) => n.n_inputs(),
            None => {
                return Err(GradletError::InvalidArchitecture(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some((i, n)) = neurons
            .iter()
            .enumerate()
            .find(|(_, n)| n.n_inputs() != n_inputs)
        {
            return Err(GradletError::InvalidArchitecture(format!(
                "neuron {} takes {} inputs, expected {}",
                i,
                n.n_inputs(),
                n_inputs
            )));
        }
        Ok(Layer {
            neurons,
            n_inputs,
            name: "dense".to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Applies every neuron to `inputs`, in order.
    pub fn call(&self, inputs: &[Value]) -> Result<Vec<Value>, GradletError> {
        if inputs.len() != self.n_inputs {
            return Err(GradletError::ArityMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
                operation: format!("Layer({})::call", self.name),
            });
        }
        self.neurons.iter().map(|n| n.call(inputs)).collect()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
        self.call(input)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(pname, p)| (format!("neuron{}.{}", i, pname), p))
            })
            .collect()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
