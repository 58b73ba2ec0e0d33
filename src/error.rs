use thiserror::Error;

// Unified error types for adjugate

/// Errors from matrix construction and algebra.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error(
        "dimension mismatch: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("matrix is {rows}x{cols}, operation requires a square matrix")]
    NotSquare { rows: usize, cols: usize },
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("matrix is singular (determinant is zero)")]
    Singular,
}

/// Errors from unit expressions and quantity conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("cannot express {from} in units of {to}")]
    IncompatibleUnits { from: String, to: String },
    #[error("malformed unit expression: {0}")]
    Parse(String),
    #[error("unexpected separator symbol in unit {0:?}")]
    UnexpectedSymbol(String),
}
