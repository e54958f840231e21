//! Gauss-Jacobi relaxation.
//!
//! Every component of the new iterate is computed from the previous pass's iterate only:
//!
//! ```math
//! x[i] = (b[i] - sum_{j != i} A[i][j] * prev[j]) / A[i][i]
//! ```
//!
//! The row updates within a pass are therefore independent of each other.

use log::{debug, trace};
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, RealField, Storage, StorageMut, U1,
};

use crate::{system_size, Error, IterStats, LSolver, RelativeGrowth, SolveStatus};

#[derive(Clone, Debug)]
pub struct Jacobi<T> {
    /// number of passes performed in the last solve
    niters: usize,
    /// convergence metric of the last pass in the last solve
    metric: Option<T>,
    /// convergence metric of each pass in the last solve, only kept when requested
    history: Option<Vec<T>>,
}

impl<T> Jacobi<T> {
    /// Creates a new Gauss-Jacobi solver.
    pub fn new() -> Self {
        Jacobi {
            niters: 0,
            metric: None,
            history: None,
        }
    }

    /// Also record the convergence metric of every pass, see [`IterStats::history`].
    pub fn keep_history(mut self) -> Self {
        self.history = Some(Vec::new());
        self
    }
}

impl<T> Default for Jacobi<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> LSolver<T, D> for Jacobi<T>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D>,
{
    fn solve<SA, SB, SC>(
        &mut self,
        mat_a: &Matrix<T, D, D, SA>,
        b: &Matrix<T, D, U1, SB>,
        x: &mut Matrix<T, D, U1, SC>,
        precision: T,
        max_iterations: usize,
    ) -> Result<SolveStatus<T>, Error>
    where
        SA: Storage<T, D, D>,
        SB: Storage<T, D>,
        SC: StorageMut<T, D>,
    {
        let n = system_size(mat_a, b, &*x)?;

        self.niters = 0;
        self.metric = None;
        if let Some(history) = self.history.as_mut() {
            history.clear();
        }

        let mut prev = x.clone_owned();
        let mut iteration = 1;

        loop {
            jacobi_pass(mat_a, b, &prev, x, n)?;
            self.niters = iteration;

            let metric = x
                .relative_growth(&prev)
                .ok_or(Error::ZeroIterate { iteration })?;
            self.metric = Some(metric);
            if let Some(history) = self.history.as_mut() {
                history.push(metric);
            }
            trace!("jacobi pass={} metric={}", iteration, metric);

            if let Some(status) = SolveStatus::check(metric, precision, iteration, max_iterations) {
                debug!("jacobi finished: {}", status);
                return Ok(status);
            }

            prev.copy_from(&*x);
            iteration += 1;
        }
    }
}

impl<T: RealField + Copy> IterStats<T> for Jacobi<T> {
    fn num_iters(&self) -> usize {
        self.niters
    }

    fn metric(&self) -> T {
        self.metric.unwrap_or_else(T::zero)
    }

    fn history(&self) -> &[T] {
        self.history.as_deref().unwrap_or(&[])
    }
}

/// One Jacobi pass: writes the new iterate into `x`, reading only `prev`.
fn jacobi_pass<T, D, SA, SB, SC, SD>(
    mat_a: &Matrix<T, D, D, SA>,
    b: &Matrix<T, D, U1, SB>,
    prev: &Matrix<T, D, U1, SC>,
    x: &mut Matrix<T, D, U1, SD>,
    n: usize,
) -> Result<(), Error>
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D>,
    SC: Storage<T, D>,
    SD: StorageMut<T, D>,
{
    for i in 0..n {
        let mut sum = T::zero();
        for j in (0..n).filter(|&j| j != i) {
            sum += mat_a[(i, j)] * prev[j];
        }

        let a_ii = mat_a[(i, i)];
        if a_ii == T::zero() {
            return Err(Error::ZeroDiagonal { row: i });
        }
        x[i] = (b[i] - sum) / a_ii;
    }
    Ok(())
}
