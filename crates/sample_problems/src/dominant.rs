use nalgebra::{matrix, vector, DMatrix, DVector, Matrix3, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::System;

/// A strictly diagonally dominant system:
///
/// ```math
/// 3x -  y +  z = 1
/// 3x + 6y + 2z = 0
/// 3x + 3y + 7z = 4
/// ```
///
/// with solution `(2/57, -9/38, 25/38)`. Both methods converge, Gauss-Seidel in fewer passes.
#[derive(Clone, Copy, Debug)]
pub struct Dominant {}

impl System for Dominant {
    fn mat_a(&self) -> Matrix3<f64> {
        matrix![
            3.0, -1.0, 1.0;
            3.0, 6.0, 2.0;
            3.0, 3.0, 7.0;
        ]
    }

    fn b(&self) -> Vector3<f64> {
        vector![1.0, 0.0, 4.0]
    }

    fn solution(&self) -> Vector3<f64> {
        vector![2.0 / 57.0, -9.0 / 38.0, 25.0 / 38.0]
    }
}

/// Generates a random `n`x`n` strictly diagonally dominant system and its right-hand side.
///
/// Off-diagonal entries are uniform in `[-1, 1]`, each diagonal entry exceeds the absolute sum of
/// the rest of its row by at least one, and `b` is uniform in `[-1, 1]`.
pub fn random_dominant(n: usize, seed: u64) -> (DMatrix<f64>, DVector<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut mat_a: DMatrix<f64> = DMatrix::from_fn(n, n, |_, _| rng.gen_range(-1.0..=1.0));
    for i in 0..n {
        let off_diag: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| mat_a[(i, j)].abs())
            .sum();
        mat_a[(i, i)] = off_diag + rng.gen_range(1.0..=2.0);
    }
    let b: DVector<f64> = DVector::from_fn(n, |_, _| rng.gen_range(-1.0..=1.0));

    (mat_a, b)
}
