use std::error::Error;
use std::fmt;

/// Failure reasons for vector and matrix operations.
///
/// Every fallible mutation in the crate reports one of these and leaves its
/// receiver untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand sizes disagree.
    SizeMismatch { expected: usize, found: usize },
    /// The operation is undefined on a zero-length operand.
    EmptyOperand,
    /// A row, column or element index past the effective extent.
    IndexOutOfBounds { index: usize, bound: usize },
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A literal table whose rows are not all the same length.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Inner dimensions of a matrix product disagree.
    DimensionMismatch { left_cols: usize, right_rows: usize },
    /// Operation size overrides may only shrink the logical size.
    OperationSizeTooLarge { requested: usize, len: usize },
    /// Projection onto the zero vector.
    ZeroVector,
    CapacityOverflow,
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::SizeMismatch { expected, found } => {
                write!(f, "size mismatch: expected {}, found {}", expected, found)
            }
            LinalgError::EmptyOperand => write!(f, "operation is undefined for an empty operand"),
            LinalgError::IndexOutOfBounds { index, bound } => {
                write!(f, "index {} out of bounds (limit {})", index, bound)
            }
            LinalgError::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "cell ({}, {}) out of bounds for a {}x{} matrix",
                row, col, rows, cols
            ),
            LinalgError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} entries but the first row has {}",
                row, found, expected
            ),
            LinalgError::DimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "cannot multiply: left operand has {} columns, right operand has {} rows",
                left_cols, right_rows
            ),
            LinalgError::OperationSizeTooLarge { requested, len } => write!(
                f,
                "operation size {} exceeds logical size {}",
                requested, len
            ),
            LinalgError::ZeroVector => write!(f, "cannot project onto the zero vector"),
            LinalgError::CapacityOverflow => write!(f, "capacity overflow while growing storage"),
        }
    }
}

impl Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;
