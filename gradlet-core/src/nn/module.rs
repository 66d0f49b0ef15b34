use crate::error::GradletError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Modules only ever combine their parameters with the input through the
/// public `Value` operators, so the output of `forward` is an ordinary graph
/// node that can be fed into a loss and differentiated with `backward`.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `GradletError::ArityMismatch` if `input` does not have the length
    /// the module was built for. Inputs are never truncated or padded.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError>;

    /// Returns every learnable leaf owned by the module, sub-modules included.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns the parameters together with hierarchical names
    /// (e.g. `"dense1.neuron0.w2"`).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Returns the direct child modules. Leaf modules have none.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Number of learnable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
