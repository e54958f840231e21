use std::fmt;

use nalgebra::{allocator::Allocator, DefaultAllocator, Dim, OVector, RealField, Scalar};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// How a solve terminated. Both variants are successful terminations.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveStatus<T> {
    /// The convergence metric dropped to `precision` after `iterations` passes.
    PrecisionAchieved { precision: T, iterations: usize },
    /// `iterations` passes were performed without reaching the requested precision.
    IterationLimitReached { iterations: usize },
}

impl<T> SolveStatus<T>
where
    T: RealField + Copy,
{
    /// Termination rule applied after every pass. Precision is tested before the iteration limit,
    /// so a pass that both converges and exhausts the limit reports convergence.
    ///
    /// A `max_iterations` of zero behaves like one: at least one pass is always performed.
    pub(crate) fn check(
        metric: T,
        precision: T,
        iteration: usize,
        max_iterations: usize,
    ) -> Option<Self> {
        if metric <= precision {
            Some(Self::PrecisionAchieved {
                precision,
                iterations: iteration,
            })
        } else if iteration >= max_iterations {
            Some(Self::IterationLimitReached {
                iterations: iteration,
            })
        } else {
            None
        }
    }
}

impl<T> SolveStatus<T> {
    /// Number of passes performed.
    pub fn iterations(&self) -> usize {
        match self {
            Self::PrecisionAchieved { iterations, .. } => *iterations,
            Self::IterationLimitReached { iterations } => *iterations,
        }
    }

    pub fn converged(&self) -> bool {
        matches!(self, Self::PrecisionAchieved { .. })
    }
}

impl<T: fmt::Display> fmt::Display for SolveStatus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrecisionAchieved {
                precision,
                iterations,
            } => write!(
                f,
                "Achieved precision: {precision}, Iterations performed: {iterations}"
            ),
            Self::IterationLimitReached { .. } => write!(f, "Iteration limit reached"),
        }
    }
}

/// The final approximation of a solve, paired with how the solve terminated.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveOutcome<T, D>
where
    T: Scalar,
    D: Dim,
    DefaultAllocator: Allocator<T, D>,
{
    pub x: OVector<T, D>,
    pub status: SolveStatus<T>,
}

impl<T, D> SolveOutcome<T, D>
where
    T: Scalar + fmt::Display,
    D: Dim,
    DefaultAllocator: Allocator<T, D>,
{
    /// Splits the outcome into the approximation and the status text.
    pub fn into_parts(self) -> (OVector<T, D>, String) {
        let status = self.status.to_string();
        (self.x, status)
    }
}
