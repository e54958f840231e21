use nalgebra::RealField;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Method;

/// Precision used when none is given.
pub const DEFAULT_PRECISION: f64 = 0.05;

/// Pass limit used when none is given.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Controls a call to [`crate::solve`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveOptions<T> {
    pub method: Method,
    /// The solve converges once the convergence metric drops to this value.
    pub precision: T,
    /// Maximum number of passes. Zero is treated as one.
    pub max_iterations: usize,
}

impl<T: RealField> SolveOptions<T> {
    pub fn new(method: Method) -> Self {
        SolveOptions {
            method,
            precision: nalgebra::convert(DEFAULT_PRECISION),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_precision(mut self, precision: T) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl<T: RealField> Default for SolveOptions<T> {
    fn default() -> Self {
        Self::new(Method::default())
    }
}
