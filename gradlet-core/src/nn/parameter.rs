use crate::error::GradletError;
use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A learnable leaf owned by a module.
///
/// Derefs to the underlying [`Value`], so a parameter can be used directly in
/// expressions and its `grad` read after a backward pass. Cloning shares the
/// same node.
#[derive(Clone)]
pub struct Parameter {
    value: Value,
    name: Option<String>,
}

impl Parameter {
    /// Creates a named parameter holding a fresh leaf. The leaf's label is the name.
    pub fn new(init: f64, name: impl Into<String>) -> Self {
        let name = name.into();
        Parameter {
            value: Value::with_label(init, name.clone()),
            name: Some(name),
        }
    }

    /// Wraps an existing node.
    ///
    /// # Errors
    /// Returns `GradletError::InvalidArgument` for non-leaf nodes, whose value
    /// an optimizer could not update.
    pub fn from_value(value: Value, name: Option<String>) -> Result<Self, GradletError> {
        if !value.is_leaf() {
            return Err(GradletError::InvalidArgument(format!(
                "parameter must be a leaf, got a node produced by {:?}",
                value.op()
            )));
        }
        Ok(Parameter { value, name })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Borrow the underlying graph node.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consumes the parameter and returns the underlying node.
    pub fn into_inner(self) -> Value {
        self.value
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter(name={:?}, {:?})", self.name, self.value)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
