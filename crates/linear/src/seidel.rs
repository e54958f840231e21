//! Gauss-Seidel relaxation.
//!
//! Rows are swept in ascending order and each component is overwritten as soon as it is computed,
//! so row `i` reads this pass's values for `j < i` and the previous pass's values for `j > i`:
//!
//! ```math
//! x[i] = (b[i] - sum_{j < i} A[i][j] * x[j] - sum_{j > i} A[i][j] * x[j]) / A[i][i]
//! ```
//!
//! The row order is significant and a pass cannot be split across rows.

use log::{debug, trace};
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, RealField, Storage, StorageMut, U1,
};

use crate::{system_size, Error, IterStats, LSolver, RelativeGrowth, SolveStatus};

#[derive(Clone, Debug)]
pub struct Seidel<T> {
    /// number of passes performed in the last solve
    niters: usize,
    /// convergence metric of the last pass in the last solve
    metric: Option<T>,
    /// convergence metric of each pass in the last solve, only kept when requested
    history: Option<Vec<T>>,
}

impl<T> Seidel<T> {
    /// Creates a new Gauss-Seidel solver.
    pub fn new() -> Self {
        Seidel {
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

impl<T> Default for Seidel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> LSolver<T, D> for Seidel<T>
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

        // snapshot of the previous pass, only read by the convergence test
        let mut prev = x.clone_owned();
        let mut iteration = 1;

        loop {
            seidel_pass(mat_a, b, x, n)?;
            self.niters = iteration;

            let metric = x
                .relative_growth(&prev)
                .ok_or(Error::ZeroIterate { iteration })?;
            self.metric = Some(metric);
            if let Some(history) = self.history.as_mut() {
                history.push(metric);
            }
            trace!("seidel pass={} metric={}", iteration, metric);

            if let Some(status) = SolveStatus::check(metric, precision, iteration, max_iterations) {
                debug!("seidel finished: {}", status);
                return Ok(status);
            }

            prev.copy_from(&*x);
            iteration += 1;
        }
    }
}

impl<T: RealField + Copy> IterStats<T> for Seidel<T> {
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

/// One Seidel pass, updating `x` in place in ascending row order.
fn seidel_pass<T, D, SA, SB, SC>(
    mat_a: &Matrix<T, D, D, SA>,
    b: &Matrix<T, D, U1, SB>,
    x: &mut Matrix<T, D, U1, SC>,
    n: usize,
) -> Result<(), Error>
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D>,
    SC: StorageMut<T, D>,
{
    for i in 0..n {
        let mut sum = T::zero();
        for j in (0..n).filter(|&j| j != i) {
            sum += mat_a[(i, j)] * x[j];
        }

        let a_ii = mat_a[(i, i)];
        if a_ii == T::zero() {
            return Err(Error::ZeroDiagonal { row: i });
        }
        x[i] = (b[i] - sum) / a_ii;
    }
    Ok(())
}
