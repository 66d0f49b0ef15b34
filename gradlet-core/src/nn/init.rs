use crate::error::GradletError;
use crate::nn::Parameter;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Fills the parameter with a sample from `Uniform(low, high)` (both ends inclusive).
///
/// # Errors
/// `InvalidArgument` if `low > high` or either bound is not finite.
pub fn uniform_<R: Rng + ?Sized>(
    param: &Parameter,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), GradletError> {
    if !(low.is_finite() && high.is_finite()) || low > high {
        return Err(GradletError::InvalidArgument(format!(
            "uniform_ requires finite low <= high, got [{}, {}]",
            low, high
        )));
    }
    let dist = Uniform::new_inclusive(low, high);
    param.set_value(dist.sample(rng))
}

/// Fills the parameter with a sample from `Normal(mean, std)`.
///
/// # Errors
/// `InvalidArgument` if `std` is negative or not finite.
pub fn normal_<R: Rng + ?Sized>(
    param: &Parameter,
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<(), GradletError> {
    if !(std >= 0.0 && std.is_finite()) {
        return Err(GradletError::InvalidArgument(format!(
            "normal_ requires a finite std >= 0, got {}",
            std
        )));
    }
    let dist = Normal::new(mean, std).map_err(|e| {
        GradletError::InvalidArgument(format!("normal_(mean={}, std={}): {}", mean, std, e))
    })?;
    param.set_value(dist.sample(rng))
}

/// Fills the parameter with 0.
pub fn zeros_(param: &Parameter) -> Result<(), GradletError> {
    param.set_value(0.0)
}

/// Fills the parameter with 1.
pub fn ones_(param: &Parameter) -> Result<(), GradletError> {
    param.set_value(1.0)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
