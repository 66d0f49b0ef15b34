use std::collections::HashMap;

use crate::error::GradletError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::NodeId;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Each step computes `d = grad + weight_decay * value`, folds it into a
/// momentum buffer when momentum is non-zero (`buf = momentum * buf + d`,
/// optionally Nesterov `d + momentum * buf`), then applies
/// `value -= lr * d`. With the defaults this is exactly `value -= lr * grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    nesterov: bool,
    momentum_buffers: HashMap<NodeId, f64>,
}

impl SgdOptimizer {
    /// Creates a plain SGD optimizer over `params`.
    ///
    /// Parameters are shared handles: pass `module.parameters().into_iter().cloned()`.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            nesterov: false,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    /// L2 penalty factor added to each gradient.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    /// Enables Nesterov momentum. Has no effect while momentum is zero.
    pub fn with_nesterov(mut self, nesterov: bool) -> Self {
        self.nesterov = nesterov;
        self
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }

    /// Current momentum buffer for `param`, if a step has created one.
    pub fn momentum_buffer(&self, param: &Parameter) -> Option<f64> {
        self.momentum_buffers.get(&param.id()).copied()
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), GradletError> {
        if !self.lr.is_finite() {
            return Err(GradletError::InvalidArgument(format!(
                "learning rate must be finite, got {}",
                self.lr
            )));
        }
        log::debug!(
            "SGD step over {} parameters (lr={}, momentum={}, weight_decay={})",
            self.params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );

        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!(
                    "Non-finite gradient {} on parameter {:?}; applying it anyway",
                    grad,
                    param.name()
                );
            }

            let mut d_p = grad;
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * param.value();
            }

            if self.momentum != 0.0 {
                let buffer = self.momentum_buffers.entry(param.id()).or_insert(0.0);
                *buffer = self.momentum * *buffer + d_p;
                d_p = if self.nesterov {
                    d_p + self.momentum * *buffer
                } else {
                    *buffer
                };
            }

            param.set_value(param.value() - self.lr * d_p)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        log::debug!("SGD zero_grad over {} parameters", self.params.len());
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }

    fn parameters(&self) -> &[Parameter] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
