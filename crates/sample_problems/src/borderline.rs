use nalgebra::{matrix, vector, Matrix3, Vector3};

use crate::System;

/// A system that is not diagonally dominant:
///
/// ```math
///  2x -  y +  z = -1
///  2x + 2y + 2z =  4
/// -x  -  y + 2z = -5
/// ```
///
/// with solution `(1, 2, -1)`. Gauss-Seidel converges on it. Gauss-Jacobi oscillates, which is
/// enough to trip the growth-based convergence test after a few passes.
#[derive(Clone, Copy, Debug)]
pub struct Borderline {}

impl System for Borderline {
    fn mat_a(&self) -> Matrix3<f64> {
        matrix![
            2.0, -1.0, 1.0;
            2.0, 2.0, 2.0;
            -1.0, -1.0, 2.0;
        ]
    }

    fn b(&self) -> Vector3<f64> {
        vector![-1.0, 4.0, -5.0]
    }

    fn solution(&self) -> Vector3<f64> {
        vector![1.0, 2.0, -1.0]
    }
}
