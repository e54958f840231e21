//! Relaxation solvers for dense linear systems `Ax = b`.
//!
//! Both solvers sweep the rows of `A` once per pass, updating each component of the approximation
//! from the remaining ones, until the convergence metric (see [`RelativeGrowth`]) drops to the
//! requested precision or the iteration limit is hit.
//!
//! * [`Jacobi`] reads only the previous pass's iterate.
//! * [`Seidel`] updates in place, so rows later in a pass see values already updated earlier in the
//!     same pass.

mod jacobi;
mod metric;
mod seidel;
mod status;
mod traits;

pub use jacobi::Jacobi;
pub use metric::RelativeGrowth;
pub use seidel::Seidel;
pub use status::{SolveOutcome, SolveStatus};
pub use traits::{IterStats, LSolver};

use nalgebra::{Dim, Matrix, Storage, U1};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("A zero diagonal entry was encountered while updating row {row}")]
    ZeroDiagonal { row: usize },

    #[error("The iterate after pass {iteration} is the zero vector, the convergence metric is undefined")]
    ZeroIterate { iteration: usize },

    #[error("A {rows}x{cols} matrix is incompatible with a vector of length {len}")]
    DimensionMismatch { rows: usize, cols: usize, len: usize },
}

/// Checks that `A` is square and agrees with both `b` and `x`, returning the system size.
pub(crate) fn system_size<T, D, SA, SB, SC>(
    mat_a: &Matrix<T, D, D, SA>,
    b: &Matrix<T, D, U1, SB>,
    x: &Matrix<T, D, U1, SC>,
) -> Result<usize, Error>
where
    D: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D>,
    SC: Storage<T, D>,
{
    let (rows, cols) = mat_a.shape();
    if rows != cols || b.nrows() != rows {
        return Err(Error::DimensionMismatch {
            rows,
            cols,
            len: b.nrows(),
        });
    }
    if x.nrows() != rows {
        return Err(Error::DimensionMismatch {
            rows,
            cols,
            len: x.nrows(),
        });
    }
    Ok(rows)
}
