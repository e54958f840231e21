use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, RealField, Storage, StorageMut, U1,
};

use crate::{Error, SolveStatus};

pub trait LSolver<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D>,
{
    /// Solves the linear system `Ax = b` by repeated relaxation passes.
    ///
    /// ## Arguments
    /// * `mat_a` the square coefficient matrix A. Every diagonal entry is divided by on each pass.
    /// * `b` the linear system right-hand side.
    /// * `x` the initial guess on input, taken as the previous iterate of the first pass, and the
    ///     last computed iterate on return.
    /// * `precision` the convergence metric must drop to this value for the solve to converge.
    /// * `max_iterations` the maximum number of passes.
    ///
    /// ## Errors
    /// * `Error::DimensionMismatch` if `mat_a` is not square or disagrees with `b` or `x`.
    /// * `Error::ZeroDiagonal` if a pass divides by a zero diagonal entry.
    /// * `Error::ZeroIterate` if a pass produces the zero vector.
    ///
    /// No partial result is meaningful in `x` after an error.
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
        SC: StorageMut<T, D>;
}

/// Statistics recorded by a solver during its last `solve` call.
pub trait IterStats<T> {
    /// should return the number of passes performed in the last `solve` call.
    fn num_iters(&self) -> usize;

    /// should return the final convergence metric from the last `solve` call.
    fn metric(&self) -> T;

    /// the convergence metric of every pass of the last `solve` call, in order. Empty unless the
    /// solver was asked to keep a history.
    fn history(&self) -> &[T];
}
