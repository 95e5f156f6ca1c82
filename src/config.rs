//! Configuration types for the link solver.

use crate::error::MechanismError;
use crate::float::Float;

/// How a link distributes its length error and how many passes a step runs.
///
/// The default is the split policy: each free endpoint takes half of the
/// error, nothing is rounded, one pass per step. `fraction = 1.0` with
/// stabilization on gives the full-correction policy, where every moved
/// endpoint absorbs the whole error and is rounded to one decimal.
///
/// # Builder Pattern
/// ```
/// use linkwork::config::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::new()
///     .with_fraction(1.0)
///     .with_stabilize(true)
///     .with_iterations(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Share of the length error applied to each free endpoint. Default: 0.5.
    pub fraction: F,
    /// Round corrected positions to `stabilize_digits` decimals. Default: off.
    pub stabilize: bool,
    /// Decimal digits kept when stabilizing. Default: 1.
    pub stabilize_digits: i32,
    /// Link-then-hinge passes per step. Default: 1.
    pub iterations: usize,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            fraction: F::half(),
            stabilize: false,
            stabilize_digits: 1,
            iterations: 1,
        }
    }

    /// The full-correction policy with one-decimal rounding.
    pub fn full() -> Self {
        Self::new().with_fraction(F::one()).with_stabilize(true)
    }

    /// Set the per-endpoint correction fraction.
    pub fn with_fraction(mut self, fraction: F) -> Self {
        self.fraction = fraction;
        self
    }

    /// Enable or disable rounding of corrected positions.
    pub fn with_stabilize(mut self, stabilize: bool) -> Self {
        self.stabilize = stabilize;
        self
    }

    /// Set the number of decimals kept when stabilizing.
    pub fn with_stabilize_digits(mut self, digits: i32) -> Self {
        self.stabilize_digits = digits;
        self
    }

    /// Set the number of passes per step.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Check that the fraction and pass count are usable.
    pub fn validate(&self) -> Result<(), MechanismError> {
        if !self.fraction.is_finite() || self.fraction <= F::zero() || self.fraction > F::one() {
            return Err(MechanismError::InvalidFraction);
        }
        if self.iterations == 0 {
            return Err(MechanismError::InvalidIterations);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
