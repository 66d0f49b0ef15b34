use crate::error::GradletError;
use crate::nn::Parameter;

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients currently
    /// accumulated on the managed parameters.
    ///
    /// Gradients are left untouched; call [`Optimizer::zero_grad`] before the
    /// next backward pass unless accumulation is wanted.
    fn step(&mut self) -> Result<(), GradletError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64);

    /// The parameters this optimizer updates.
    fn parameters(&self) -> &[Parameter];
}
