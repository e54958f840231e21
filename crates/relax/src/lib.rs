//! Approximate solutions of square linear systems `Ax = b` by Gauss-Jacobi or Gauss-Seidel
//! relaxation, starting from the zero vector.
//!
//! ```rust
//! use relax::{solve, Method, SolveOptions};
//! use nalgebra::{matrix, vector};
//!
//! let mat_a = matrix![
//!     3.0, -1.0, 1.0;
//!     3.0, 6.0, 2.0;
//!     3.0, 3.0, 7.0;
//! ];
//! let b = vector![1.0, 0.0, 4.0];
//!
//! let options = SolveOptions::new(Method::Seidel).with_precision(0.01);
//! let outcome = solve(&mat_a, &b, &options).unwrap();
//! assert_eq!(outcome.status.to_string(), "Achieved precision: 0.01, Iterations performed: 5");
//! ```
//!
//! The convergence test is the relative growth in component magnitude between two passes (see
//! [`linear::RelativeGrowth`]), not a norm of the correction. It can report convergence while an
//! oscillating iterate is still far from the solution.

use log::debug;
use nalgebra::{
    allocator::Allocator, DMatrix, DVector, DefaultAllocator, Dim, Dyn, Matrix, OVector,
    RealField, Storage, U1,
};
use num_traits::ToPrimitive;

pub use linear;
pub use linear::{IterStats, Jacobi, LSolver, Seidel, SolveOutcome, SolveStatus};

mod error;
mod method;
mod options;

pub use error::Error;
pub use method::Method;
pub use options::{SolveOptions, DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION};

/// Solves `Ax = b` with the method, precision and pass limit in `options`, starting from the zero
/// vector.
///
/// Both the current and the previous iterate are allocated fresh for every call.
///
/// # Errors
///
/// Any [`linear::Error`] raised by the solver, wrapped in [`Error::Linear`].
pub fn solve<T, D, SA, SB>(
    mat_a: &Matrix<T, D, D, SA>,
    b: &Matrix<T, D, U1, SB>,
    options: &SolveOptions<T>,
) -> Result<SolveOutcome<T, D>, Error>
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D>,
    DefaultAllocator: Allocator<T, D>,
{
    let (nrows, _) = b.shape_generic();
    let mut x = OVector::<T, D>::zeros_generic(nrows, U1);

    debug!(
        "solve: n={} method={} precision={} max_iterations={}",
        b.nrows(),
        options.method,
        options.precision,
        options.max_iterations
    );

    let status = match options.method {
        Method::Jacobi => Jacobi::new().solve(
            mat_a,
            b,
            &mut x,
            options.precision,
            options.max_iterations,
        )?,
        Method::Seidel => Seidel::new().solve(
            mat_a,
            b,
            &mut x,
            options.precision,
            options.max_iterations,
        )?,
    };

    Ok(SolveOutcome { x, status })
}

/// Like [`solve`], for a system given as rows of any primitive numeric type. Entries are converted
/// to `f64` first.
///
/// The number of unknowns is the length of `rhs`. Every row must have the same length, and the
/// usual dimension checks of the solver apply after conversion.
pub fn solve_rows<R, N>(
    rows: &[R],
    rhs: &[N],
    options: &SolveOptions<f64>,
) -> Result<SolveOutcome<f64, Dyn>, Error>
where
    R: AsRef<[N]>,
    N: ToPrimitive,
{
    let ncols = rows.first().map_or(rhs.len(), |row| row.as_ref().len());

    let mut entries = Vec::with_capacity(rows.len() * ncols);
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != ncols {
            return Err(Error::RaggedRows {
                row: i,
                len: row.len(),
                expected: ncols,
            });
        }
        for (j, entry) in row.iter().enumerate() {
            entries.push(entry.to_f64().ok_or(Error::MatrixEntry { row: i, col: j })?);
        }
    }

    let b = rhs
        .iter()
        .enumerate()
        .map(|(index, entry)| entry.to_f64().ok_or(Error::RhsEntry { index }))
        .collect::<Result<Vec<_>, _>>()?;

    let mat_a = DMatrix::from_row_slice(rows.len(), ncols, &entries);
    let b = DVector::from_vec(b);

    solve(&mat_a, &b, options)
}
