use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlgebraError {
    /// A matrix needs at least one row and one column.
    #[error("Invalid matrix dimensions {0}x{1}")]
    InvalidDimension(usize, usize),
    /// The side length exceeds the configured limit.
    #[error("Matrix size {rows}x{cols} is too large, side length is limited to {max}")]
    SizeTooLarge { rows: usize, cols: usize, max: usize },
    /// Construction from an empty buffer or empty rows.
    #[error("Cannot build a matrix from empty input")]
    NullOrEmptyInput,
    /// Fail due to operations on structures of unexpected differing lengths.
    #[error("Unexpected different lengths: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// Element or row index outside the matrix.
    #[error("Index ({row}, {col}) out of range for a {nrows}x{ncols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes do not fit the operation `op`.
    #[error("Shape mismatch in {op}: {}x{} and {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// The operation is undefined for this matrix, e.g. deleting the only row.
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),
    /// A square matrix was required.
    #[error("Matrix is not square: {0}x{1}")]
    NotSquare(usize, usize),
    /// The determinant is exactly zero, so there is no inverse.
    #[error("Matrix is singular, determinant is zero")]
    SingularMatrix,
    /// Cofactor expansion recurses once per order, so very large orders are refused.
    #[error("Cofactor expansion of order {order} exceeds the limit of {limit}")]
    ExpansionTooDeep { order: usize, limit: usize },
    /// Opening or creating a file failed.
    #[error("Cannot open '{}'", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A record was short or unreadable.
    #[error("Cannot read matrix record {record}")]
    FileRead {
        record: usize,
        #[source]
        source: bincode::Error,
    },
    /// Writing or flushing a record failed.
    #[error("Cannot write matrix record {record}")]
    FileWrite {
        record: usize,
        #[source]
        source: bincode::Error,
    },
    /// A record header holds a shape that is not allowed.
    #[error("Matrix record {record} has an invalid shape {rows}x{cols}")]
    FileFormat {
        record: usize,
        rows: u64,
        cols: u64,
    },
}
