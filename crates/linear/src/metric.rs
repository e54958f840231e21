use nalgebra::{Dim, Matrix, RealField, Storage, U1};
use num_traits::Zero;

/// Convergence metric used by the relaxation solvers.
///
/// ```math
/// metric = max_i(|x[i]| - |prev[i]|) / max_i |x[i]|
/// ```
///
/// This is the largest growth in component *magnitude* between two passes, relative to the
/// largest component of the new iterate. It is not the infinity norm of `x - prev`: components
/// that shrink contribute negative growth, so the metric can be negative.
pub trait RelativeGrowth<T, D: Dim> {
    /// Returns `None` when the denominator `max_i |x[i]|` is zero (or the vectors are empty).
    fn relative_growth<SB>(&self, prev: &Matrix<T, D, U1, SB>) -> Option<T>
    where
        SB: Storage<T, D>;
}

impl<T, D, SA> RelativeGrowth<T, D> for Matrix<T, D, U1, SA>
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D>,
{
    fn relative_growth<SB>(&self, prev: &Matrix<T, D, U1, SB>) -> Option<T>
    where
        SB: Storage<T, D>,
    {
        let growth = self
            .iter()
            .zip(prev.iter())
            .map(|(x, p)| x.abs() - p.abs())
            .reduce(|acc, g| acc.max(g))?;

        let scale = self.iter().fold(T::zero(), |acc, x| acc.max(x.abs()));
        if scale.is_zero() {
            return None;
        }

        Some(growth / scale)
    }
}
