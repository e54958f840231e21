use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The rows of a caller-supplied grid do not all have the same length.
    #[error("Row {row} has {len} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Matrix entry ({row}, {col}) cannot be represented as a floating point number")]
    MatrixEntry { row: usize, col: usize },

    #[error("Right-hand side entry {index} cannot be represented as a floating point number")]
    RhsEntry { index: usize },

    #[error(transparent)]
    Linear(#[from] linear::Error),
}
