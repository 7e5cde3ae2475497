use std::error::Error;
use std::fmt;

/// A `(rows, cols)` pair.
pub type Shape = (usize, usize);

/// Errors raised by the matrix engine.
///
/// Every fallible operation validates its inputs before touching storage, so
/// when one of these is returned the destination is exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A row or column index lies outside `[0, rows)` / `[0, cols)`.
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Operand or output shapes violate the operation's precondition.
    ShapeMismatch {
        op: &'static str,
        expected: Shape,
        found: Shape,
    },
    /// A flat buffer does not hold exactly `rows * cols` elements.
    LengthMismatch { expected: usize, found: usize },
    /// A view was requested with a zero dimension.
    InvalidShape { rows: usize, cols: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::ShapeMismatch {
                op,
                expected,
                found,
            } => write!(
                f,
                "{}: expected shape {}x{}, found {}x{}",
                op, expected.0, expected.1, found.0, found.1
            ),
            MatrixError::LengthMismatch { expected, found } => write!(
                f,
                "buffer of length {} does not match {} matrix elements",
                found, expected
            ),
            MatrixError::InvalidShape { rows, cols } => {
                write!(f, "invalid shape ({}, {}): dimensions must be positive", rows, cols)
            }
        }
    }
}

impl Error for MatrixError {}

// Constructors used at every rejection site, so each rejected call leaves one
// debug line behind.
impl MatrixError {
    pub(crate) fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        log::debug!(
            "rejected access at ({}, {}) on {}x{} matrix",
            row,
            col,
            rows,
            cols
        );
        MatrixError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    pub(crate) fn shape_mismatch(op: &'static str, expected: Shape, found: Shape) -> Self {
        log::debug!(
            "{}: expected shape {}x{}, found {}x{}",
            op,
            expected.0,
            expected.1,
            found.0,
            found.1
        );
        MatrixError::ShapeMismatch {
            op,
            expected,
            found,
        }
    }

    pub(crate) fn length_mismatch(expected: usize, found: usize) -> Self {
        log::debug!(
            "rejected flat source of length {}, expected {} elements",
            found,
            expected
        );
        MatrixError::LengthMismatch { expected, found }
    }

    pub(crate) fn invalid_shape(rows: usize, cols: usize) -> Self {
        log::debug!("rejected {}x{} shape", rows, cols);
        MatrixError::InvalidShape { rows, cols }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
