//! Example problems for testing, benchmarks and demonstration

mod borderline;
mod dominant;

pub use borderline::Borderline;
pub use dominant::{random_dominant, Dominant};

use nalgebra::{Matrix3, Vector3};

/// A 3x3 system `Ax = b` together with its exact solution.
pub trait System {
    fn mat_a(&self) -> Matrix3<f64>;

    fn b(&self) -> Vector3<f64>;

    fn solution(&self) -> Vector3<f64>;
}
